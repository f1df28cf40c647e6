use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::domain::FIELD_TYPES;

use super::layout::pane_block;

/// Field type palette; the digit in front of each entry is the key
/// that adds it.
pub fn render_palette(frame: &mut Frame<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = FIELD_TYPES
        .iter()
        .enumerate()
        .map(|(slot, descriptor)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", slot + 1), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{} ", descriptor.icon), Style::default().fg(Color::Cyan)),
                Span::raw(descriptor.label),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(pane_block("Field Types", false)), area);
}
