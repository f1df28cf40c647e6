use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::editor::{EMPTY_LIST_HINT, FieldListView, FieldRow};

use super::layout::pane_block;

/// The ordered field cards making up the form canvas.
pub fn render_field_list(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &FieldListView,
    selected: Option<usize>,
    focused: bool,
) {
    let block = pane_block("Fields", focused);

    if view.is_empty() {
        let hint = Paragraph::new(format!(
            "{EMPTY_LIST_HINT}\nPress 1-8 to add a field from the palette"
        ))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem<'_>> = view
        .rows
        .iter()
        .map(|row| ListItem::new(field_card_lines(row)))
        .collect();

    let mut state = ListState::default();
    state.select(selected.filter(|index| *index < view.rows.len()));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

pub(crate) fn field_card_lines(row: &FieldRow) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        format!("{} {}", row.icon, row.kind),
        Style::default().fg(Color::DarkGray),
    )];
    if row.required {
        header.push(Span::styled(
            "  Required",
            Style::default().fg(Color::Red),
        ));
    }
    let mut hints = String::new();
    if row.can_move_up {
        hints.push_str(" ↑");
    }
    if row.can_move_down {
        hints.push_str(" ↓");
    }
    if !hints.is_empty() {
        header.push(Span::styled(
            format!(" {hints}"),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ));
    }

    vec![
        Line::from(header),
        Line::from(Span::styled(
            row.label.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}
