use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::notice::{Notice, Severity};

/// Everything the footer shows, shared by both screens.
pub struct FooterInfo<'a> {
    pub status_message: &'a str,
    pub dirty: bool,
    pub notice: Option<&'a Notice>,
    pub control_label: &'a str,
    pub control_enabled: bool,
    pub help: Option<&'a str>,
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, info: &FooterInfo<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let actions = info.help.unwrap_or(" ");
    let actions_widget = Paragraph::new(format!("Actions: {actions}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(actions_widget, rows[0]);

    let mut status = info.status_message.to_string();
    if info.dirty {
        status.push_str(" • unsaved changes");
    }

    let control_style = if info.control_enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw("  "),
        Span::styled(format!("[{}]", info.control_label), control_style),
    ];
    if let Some(notice) = info.notice {
        let notice_style = match notice.severity() {
            Severity::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Severity::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.message().to_string(), notice_style));
    }

    let status_widget = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[1]);
}
