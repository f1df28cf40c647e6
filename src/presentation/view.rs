use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::input::BuilderZone;
use crate::domain::Form;
use crate::editor::{FormEditor, InspectorAttr};
use crate::submit::{FillState, SubmissionCollector};

use super::components::{
    FooterInfo, render_field_list, render_footer, render_inspector, render_meta, render_palette,
    render_respond_form, render_thanks,
};

/// Everything the builder screen needs for one frame.
pub struct BuilderContext<'a> {
    pub editor: &'a FormEditor,
    pub zone: BuilderZone,
    pub attr: InspectorAttr,
    pub attr_buffer: &'a str,
    pub title_buffer: &'a str,
    pub description_buffer: &'a str,
    pub status_message: &'a str,
    pub dirty: bool,
    pub help: Option<&'a str>,
}

pub fn draw_builder(frame: &mut Frame<'_>, ctx: &BuilderContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_meta(frame, chunks[0], ctx);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);
    render_field_list(
        frame,
        body[0],
        &ctx.editor.field_list_view(),
        ctx.editor.selected_index(),
        ctx.zone == BuilderZone::Fields,
    );
    render_inspector(frame, body[1], ctx);
    render_palette(frame, body[2]);

    let control = ctx.editor.save_control();
    let footer = FooterInfo {
        status_message: ctx.status_message,
        dirty: ctx.dirty,
        notice: ctx.editor.notice(),
        control_label: control.label,
        control_enabled: control.enabled,
        help: ctx.help,
    };
    render_footer(frame, chunks[2], &footer);
}

/// Everything the respond screen needs for one frame.
pub struct RespondContext<'a> {
    pub form: &'a Form,
    pub fill: &'a FillState,
    pub collector: &'a SubmissionCollector,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw_respond(frame: &mut Frame<'_>, ctx: &RespondContext<'_>) {
    if ctx.collector.succeeded() {
        render_thanks(frame, frame.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(frame.area());

    render_respond_form(frame, chunks[0], ctx);

    let control = ctx.collector.submit_control();
    let footer = FooterInfo {
        status_message: ctx.status_message,
        dirty: false,
        notice: ctx.collector.notice(),
        control_label: control.label,
        control_enabled: control.enabled,
        help: ctx.help,
    };
    render_footer(frame, chunks[1], &footer);
}
