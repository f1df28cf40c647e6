use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
};

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [slot] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [slot] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(slot);
    slot
}

/// Bordered pane with a focus-dependent border colour.
pub fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}
