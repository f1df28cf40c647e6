use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Where the terminal cursor belongs inside a panel: line offset from
/// the panel's first line, and the column within that line.
pub struct PanelCursor {
    pub line_offset: usize,
    pub column: u16,
}

/// Renders a value as wrapped lines. Active values get a drawn box and
/// a cursor hint at the end of their last line; inactive ones are
/// indented plain text.
pub fn value_panel(
    text: &str,
    active: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<PanelCursor>) {
    let clamp_width = max_width.max(4) as usize;
    let mut wrapped: Vec<String> = text
        .split('\n')
        .flat_map(|segment| {
            let pieces = wrap(segment, clamp_width);
            if pieces.is_empty() {
                vec![String::new()]
            } else {
                pieces.into_iter().map(|piece| piece.into_owned()).collect()
            }
        })
        .collect();
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    let inner_width = wrapped
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    let last_width = wrapped
        .last()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .unwrap_or(0);

    let mut lines = Vec::new();
    if !active {
        for segment in wrapped {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(segment, Style::default().fg(Color::White)),
            ]));
        }
        return (lines, None);
    }

    let border = "─".repeat(inner_width.saturating_add(2));
    let border_style = Style::default().fg(Color::Yellow);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    lines.push(Line::from(Span::styled(
        format!("┌{border}┐"),
        border_style,
    )));
    let value_count = wrapped.len();
    for segment in wrapped {
        let mut content = segment;
        let mut width = UnicodeWidthStr::width(content.as_str());
        while width < inner_width {
            content.push(' ');
            width += 1;
        }
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(content, value_style),
            Span::styled(" │", border_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("└{border}┘"),
        border_style,
    )));

    let cursor = PanelCursor {
        line_offset: value_count,
        column: 2u16.saturating_add(last_width as u16),
    };
    (lines, Some(cursor))
}
