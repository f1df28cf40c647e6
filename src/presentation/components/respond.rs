use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::descriptor;
use crate::submit::{FieldFill, FillValue, THANK_YOU_BODY, THANK_YOU_TITLE};

use super::super::view::RespondContext;
use super::layout::{centered_rect, pane_block};
use super::panel::value_panel;

/// The form as a respondent sees it: header plus one card per field.
pub fn render_respond_form(frame: &mut Frame<'_>, area: Rect, ctx: &RespondContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    let mut header = vec![Line::from(Span::styled(
        ctx.form.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !ctx.form.description.is_empty() {
        header.push(Line::from(Span::styled(
            ctx.form.description.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(header)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    if ctx.fill.is_empty() {
        let hint = Paragraph::new("This form has no fields")
            .style(Style::default().fg(Color::DarkGray))
            .block(pane_block("Form", true));
        frame.render_widget(hint, chunks[1]);
        return;
    }

    let content_width = chunks[1].width.saturating_sub(6);
    let items: Vec<ListItem<'_>> = ctx
        .fill
        .fields()
        .iter()
        .enumerate()
        .map(|(index, fill)| {
            ListItem::new(answer_card_lines(fill, index == ctx.fill.focus(), content_width))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(ctx.fill.focus()));

    let list = List::new(items)
        .block(pane_block("Form", true))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

pub(crate) fn answer_card_lines(
    fill: &FieldFill,
    focused: bool,
    content_width: u16,
) -> Vec<Line<'static>> {
    let field = fill.field();
    let mut label = field.display_label().to_string();
    if field.required {
        label.push_str(" *");
    }
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![Line::from(Span::styled(label, label_style))];

    match fill.value() {
        FillValue::Text(buffer) => {
            if buffer.is_empty() && !focused {
                let placeholder = descriptor(field.kind).placeholder;
                let hint = if field.placeholder.is_empty() {
                    placeholder.to_string()
                } else {
                    field.placeholder.clone()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {hint}"),
                    Style::default().fg(Color::DarkGray),
                )));
            } else {
                let (panel, _) = value_panel(buffer, focused, content_width);
                lines.extend(panel);
            }
        }
        FillValue::Choice(selected) => {
            for (index, option) in field.options.iter().enumerate() {
                let picked = *selected == Some(index);
                let marker = if picked { "(•)" } else { "( )" };
                let style = if picked {
                    Style::default().fg(Color::Green)
                } else if focused {
                    Style::default()
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(Span::styled(
                    format!("  {marker} {option}"),
                    style,
                )));
            }
        }
        FillValue::Checks { cursor, checked } => {
            for (index, option) in field.options.iter().enumerate() {
                let ticked = checked.get(index).copied().unwrap_or(false);
                let marker = if ticked { "[x]" } else { "[ ]" };
                let pointer = if focused && index == *cursor { "›" } else { " " };
                let style = if ticked {
                    Style::default().fg(Color::Green)
                } else if focused {
                    Style::default()
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(Span::styled(
                    format!(" {pointer}{marker} {option}"),
                    style,
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines
}

/// Full-screen confirmation once a response has been recorded.
pub fn render_thanks(frame: &mut Frame<'_>, area: Rect) {
    let panel = centered_rect(area, 44, 7);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            THANK_YOU_TITLE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(THANK_YOU_BODY),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));
    frame.render_widget(widget, panel);
}
