use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::input::BuilderZone;
use crate::editor::{InspectorAttr, InspectorView, NO_SELECTION_HINT};

use super::super::view::BuilderContext;
use super::layout::pane_block;
use super::panel::value_panel;

/// Property editor for the selected field.
pub fn render_inspector(frame: &mut Frame<'_>, area: Rect, ctx: &BuilderContext<'_>) {
    let focused = ctx.zone == BuilderZone::Inspector;
    let block = pane_block("Edit Field", focused);

    let InspectorView::Editing(props) = ctx.editor.inspector_view() else {
        let hint = Paragraph::new(NO_SELECTION_HINT)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let content_width = area.width.saturating_sub(4);
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            format!("{} field", props.kind),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    let mut cursor: Option<(usize, u16)> = None;

    for attr in props.attrs() {
        let active = focused && attr == ctx.attr;
        if attr == InspectorAttr::Required {
            let mark = if props.required { "[x]" } else { "[ ]" };
            let style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(format!("{mark} {}", attr.title()), style)];
            if active {
                spans.push(Span::styled(
                    "  Space toggles",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
            continue;
        }

        let title_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(attr.title().to_string(), title_style)));

        let text = if active {
            ctx.attr_buffer.to_string()
        } else {
            match attr {
                InspectorAttr::Label => props.label.clone(),
                InspectorAttr::Placeholder => props.placeholder.clone().unwrap_or_default(),
                InspectorAttr::Options => props.options_text.clone().unwrap_or_default(),
                InspectorAttr::Required => String::new(),
            }
        };
        let (panel, panel_cursor) = value_panel(&text, active, content_width);
        if let Some(hint) = panel_cursor {
            cursor = Some((lines.len() + hint.line_offset, hint.column));
        }
        lines.extend(panel);
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if let Some((line_offset, column)) = cursor {
        let max_line = area.height.saturating_sub(2) as usize;
        let cursor_y = area
            .y
            .saturating_add(1)
            .saturating_add(line_offset.min(max_line) as u16);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(column)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
