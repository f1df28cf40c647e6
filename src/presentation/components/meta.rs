use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::input::BuilderZone;
use crate::domain::DEFAULT_FORM_TITLE;

use super::super::view::BuilderContext;
use super::layout::pane_block;

const DESCRIPTION_PLACEHOLDER: &str = "Form description";

/// Title and description inputs at the top of the builder.
pub fn render_meta(frame: &mut Frame<'_>, area: Rect, ctx: &BuilderContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let title_focused = ctx.zone == BuilderZone::Title;
    let title = if ctx.title_buffer.is_empty() {
        Paragraph::new(DEFAULT_FORM_TITLE).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(ctx.title_buffer).style(Style::default().add_modifier(Modifier::BOLD))
    };
    frame.render_widget(title.block(pane_block("Title", title_focused)), rows[0]);
    if title_focused {
        let column = rows[0]
            .x
            .saturating_add(1)
            .saturating_add(UnicodeWidthStr::width(ctx.title_buffer) as u16);
        let limit = rows[0].right().saturating_sub(2);
        frame.set_cursor_position((column.min(limit), rows[0].y.saturating_add(1)));
    }

    let description_focused = ctx.zone == BuilderZone::Description;
    let description = if ctx.description_buffer.is_empty() {
        Paragraph::new(DESCRIPTION_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(ctx.description_buffer).wrap(Wrap { trim: false })
    };
    frame.render_widget(
        description.block(pane_block("Description", description_focused)),
        rows[1],
    );
}
