use ratatui::layout::Rect;
use ratatui::style::Modifier;

use crate::presentation::components::layout::centered_rect;
use crate::presentation::components::panel::value_panel;

#[test]
fn active_values_get_a_box_and_a_cursor_hint() {
    let (lines, cursor) = value_panel("Ann", true, 40);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].spans[0].content, "┌─────┐");
    assert_eq!(lines[1].spans[1].content, "Ann");
    assert!(lines[1].spans[1].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(lines[2].spans[0].content, "└─────┘");

    let cursor = cursor.unwrap();
    assert_eq!(cursor.line_offset, 1, "cursor sits on the last value line");
    assert_eq!(cursor.column, 5, "two border cells plus the value width");
}

#[test]
fn inactive_values_render_as_plain_indented_text() {
    let (lines, cursor) = value_panel("Ann", false, 40);
    assert!(cursor.is_none());
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans[0].content, "  ");
    assert_eq!(lines[0].spans[1].content, "Ann");
}

#[test]
fn long_values_wrap_and_the_cursor_follows_the_last_line() {
    let (lines, cursor) = value_panel("alpha beta", true, 5);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].spans[1].content, "alpha");
    assert_eq!(lines[2].spans[1].content, "beta ", "short lines pad to the box width");

    let cursor = cursor.unwrap();
    assert_eq!(cursor.line_offset, 2);
    assert_eq!(cursor.column, 6);
}

#[test]
fn explicit_line_breaks_survive_wrapping() {
    let (lines, _) = value_panel("a\n\nbb", true, 40);
    assert_eq!(lines.len(), 5, "border, three value lines, border");
    assert_eq!(lines[2].spans[1].content, "  ", "blank segments keep their row");
}

#[test]
fn an_empty_value_still_draws_a_box() {
    let (lines, cursor) = value_panel("", true, 40);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].spans[0].content, "┌──┐");
    assert_eq!(cursor.unwrap().column, 2);
}

#[test]
fn centered_rect_centers_within_the_area() {
    let area = Rect::new(0, 0, 100, 41);
    assert_eq!(centered_rect(area, 44, 7), Rect::new(28, 17, 44, 7));
}
