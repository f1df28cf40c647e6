use std::sync::{Arc, mpsc};
use std::thread;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::domain::{FIELD_TYPES, Form};
use crate::editor::{FieldPatch, FormEditor, InspectorAttr, InspectorView};
use crate::presentation::{self, BuilderContext};
use crate::store::{FormStore, StoreError};
use crate::submit::apply_text_key;

use super::input::{BuilderCommand, BuilderZone, classify_builder};
use super::options::UiOptions;
use super::status::{BUILDER_READY, StatusLine};
use super::terminal::TerminalGuard;

pub const BUILDER_HELP: &str = "Tab -> switch zone • ↑/↓ -> select • 1-8 -> add field • \
    Del -> remove • Ctrl+↑/↓ -> move • Ctrl+S -> save • Ctrl+Q -> quit";

/// Interactive form designer. Drives a [`FormEditor`] from the
/// keyboard and persists through the injected store; saves run on a
/// worker thread so the loop keeps drawing while the store is slow.
pub struct BuilderApp {
    editor: FormEditor,
    store: Arc<dyn FormStore + Send + Sync>,
    pending_save: Option<mpsc::Receiver<Result<String, StoreError>>>,
    options: UiOptions,
    status: StatusLine,
    zone: BuilderZone,
    attr: InspectorAttr,
    attr_buffer: String,
    attr_seed: String,
    title_buffer: String,
    description_buffer: String,
    dirty: bool,
    quit_armed: bool,
    should_quit: bool,
}

impl BuilderApp {
    pub fn new(store: Arc<dyn FormStore + Send + Sync>) -> Self {
        Self::with_form(Form::new(), store, UiOptions::default())
    }

    pub fn with_form(
        form: Form,
        store: Arc<dyn FormStore + Send + Sync>,
        options: UiOptions,
    ) -> Self {
        let editor = FormEditor::with_form(form);
        let title_buffer = editor.form().title.clone();
        let description_buffer = editor.form().description.clone();
        Self {
            editor,
            store,
            pending_save: None,
            options,
            status: StatusLine::new(BUILDER_READY),
            zone: BuilderZone::Fields,
            attr: InspectorAttr::Label,
            attr_buffer: String::new(),
            attr_seed: String::new(),
            title_buffer,
            description_buffer,
            dirty: false,
            quit_armed: false,
            should_quit: false,
        }
    }

    pub fn editor(&self) -> &FormEditor {
        &self.editor
    }

    /// Runs the builder until the user quits, returning the document
    /// as last edited.
    pub fn run(mut self) -> Result<Form> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.tick();
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.editor.form().clone())
    }

    /// Housekeeping between input events: settles a finished save,
    /// expires a hung one, retires stale notices.
    pub(crate) fn tick(&mut self) {
        self.poll_pending_save();
        if self.editor.expire_save(self.options.call_timeout) {
            self.pending_save = None;
        }
        self.editor.prune_notice();
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match classify_builder(self.zone, &key) {
            BuilderCommand::AddPaletteEntry(slot) => self.on_add(slot),
            BuilderCommand::SelectDelta(delta) => self.on_select_delta(delta),
            BuilderCommand::MoveSelected(delta) => self.on_move(delta),
            BuilderCommand::RemoveSelected => self.on_remove(),
            BuilderCommand::NextZone => self.cycle_zone(1),
            BuilderCommand::PrevZone => self.cycle_zone(-1),
            BuilderCommand::EnterInspector => self.on_enter_inspector(),
            BuilderCommand::LeaveZone => self.on_escape(),
            BuilderCommand::NextAttr => self.cycle_attr(1),
            BuilderCommand::PrevAttr => self.cycle_attr(-1),
            BuilderCommand::Save => self.on_save(),
            BuilderCommand::Quit => self.on_quit(),
            BuilderCommand::Edit(key) => self.on_edit(key),
            BuilderCommand::None => {}
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let context = BuilderContext {
            editor: &self.editor,
            zone: self.zone,
            attr: self.attr,
            attr_buffer: &self.attr_buffer,
            title_buffer: &self.title_buffer,
            description_buffer: &self.description_buffer,
            status_message: self.status.message(),
            dirty: self.dirty,
            help: self.options.show_help.then_some(BUILDER_HELP),
        };
        presentation::draw_builder(frame, &context);
    }

    fn poll_pending_save(&mut self) {
        let Some(receiver) = &self.pending_save else {
            return;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending_save = None;
                if self.editor.complete_save(outcome).is_ok() {
                    self.dirty = false;
                }
                self.status.ready();
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending_save = None;
                let _ = self
                    .editor
                    .complete_save(Err(StoreError::Rejected("store worker disappeared".into())));
                self.status.ready();
            }
        }
    }

    fn on_save(&mut self) {
        self.quit_armed = false;
        self.commit_attr_edit();
        let Ok(snapshot) = self.editor.begin_save() else {
            return;
        };
        let (tx, rx) = mpsc::channel();
        let store = Arc::clone(&self.store);
        thread::spawn(move || {
            let _ = tx.send(store.create_or_update(&snapshot));
        });
        self.pending_save = Some(rx);
        self.status.set_raw("Saving...");
    }

    fn on_add(&mut self, slot: usize) {
        let Some(descriptor) = FIELD_TYPES.get(slot) else {
            return;
        };
        self.editor.add_field(descriptor.kind);
        self.attr = InspectorAttr::Label;
        self.seed_attr_buffer();
        self.mark_dirty();
        self.status.set_raw(format!("Added {} field", descriptor.label));
    }

    fn on_select_delta(&mut self, delta: i32) {
        let len = self.editor.form().fields.len();
        if len == 0 {
            return;
        }
        self.commit_attr_edit();
        let next = match self.editor.selected_index() {
            Some(index) => index
                .saturating_add_signed(delta as isize)
                .min(len - 1),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.editor.select_field(next);
        self.seed_attr_buffer();
    }

    fn on_move(&mut self, delta: i32) {
        let Some(index) = self.editor.selected_index() else {
            return;
        };
        if self.editor.move_field_by(index, delta) {
            self.mark_dirty();
        }
    }

    fn on_remove(&mut self) {
        let Some(index) = self.editor.selected_index() else {
            return;
        };
        self.editor.remove_field(index);
        self.seed_attr_buffer();
        self.mark_dirty();
        self.status.set_raw("Field removed");
    }

    fn on_enter_inspector(&mut self) {
        let Some(label) = self.editor.selected_field().map(|field| field.display_label()) else {
            return;
        };
        let label = label.to_string();
        self.zone = BuilderZone::Inspector;
        self.seed_attr_buffer();
        self.status.editing(&label);
    }

    fn on_escape(&mut self) {
        self.editor.dismiss_notice();
        self.quit_armed = false;
        self.status.ready();
        match self.zone {
            BuilderZone::Inspector => {
                self.commit_attr_edit();
                self.zone = BuilderZone::Fields;
            }
            BuilderZone::Fields => {
                self.commit_attr_edit();
                self.editor.clear_selection();
                self.seed_attr_buffer();
            }
            BuilderZone::Title | BuilderZone::Description => self.zone = BuilderZone::Fields,
        }
    }

    fn on_quit(&mut self) {
        self.commit_attr_edit();
        if self.options.confirm_quit && self.dirty && !self.quit_armed {
            self.quit_armed = true;
            self.status.pending_quit();
            return;
        }
        self.should_quit = true;
    }

    fn on_edit(&mut self, key: KeyEvent) {
        match self.zone {
            BuilderZone::Title => {
                if apply_text_key(&mut self.title_buffer, &key, false) {
                    self.editor.set_title(self.title_buffer.clone());
                    self.mark_dirty();
                }
            }
            BuilderZone::Description => {
                if apply_text_key(&mut self.description_buffer, &key, true) {
                    self.editor.set_description(self.description_buffer.clone());
                    self.mark_dirty();
                }
            }
            BuilderZone::Inspector => self.on_inspector_edit(key),
            BuilderZone::Fields => {}
        }
    }

    fn on_inspector_edit(&mut self, key: KeyEvent) {
        if self.attr == InspectorAttr::Required {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter)
                && let InspectorView::Editing(props) = self.editor.inspector_view()
            {
                self.editor
                    .update_field(props.index, FieldPatch::required(!props.required));
                self.mark_dirty();
            }
            return;
        }
        let multiline = self.attr == InspectorAttr::Options;
        if apply_text_key(&mut self.attr_buffer, &key, multiline) {
            self.mark_dirty();
        }
    }

    /// Pushes a changed attribute buffer into the document. Called on
    /// every blur of the inspector: attribute and zone switches, save,
    /// and quit.
    fn commit_attr_edit(&mut self) {
        if self.attr_buffer == self.attr_seed {
            return;
        }
        let Some(index) = self.editor.selected_index() else {
            return;
        };
        let patch = match self.attr {
            InspectorAttr::Label => FieldPatch::label(self.attr_buffer.clone()),
            InspectorAttr::Placeholder => FieldPatch::placeholder(self.attr_buffer.clone()),
            InspectorAttr::Options => FieldPatch::options_from_lines(&self.attr_buffer),
            InspectorAttr::Required => return,
        };
        self.editor.update_field(index, patch);
        self.attr_seed = self.attr_buffer.clone();
    }

    /// Reloads the attribute buffer from the selected field, falling
    /// back to the label attribute when the current one does not apply
    /// to the field's kind.
    fn seed_attr_buffer(&mut self) {
        let InspectorView::Editing(props) = self.editor.inspector_view() else {
            self.attr_buffer.clear();
            self.attr_seed.clear();
            return;
        };
        if !props.attrs().contains(&self.attr) {
            self.attr = InspectorAttr::Label;
        }
        self.attr_buffer = match self.attr {
            InspectorAttr::Label => props.label,
            InspectorAttr::Placeholder => props.placeholder.unwrap_or_default(),
            InspectorAttr::Options => props.options_text.unwrap_or_default(),
            InspectorAttr::Required => String::new(),
        };
        self.attr_seed = self.attr_buffer.clone();
    }

    fn cycle_attr(&mut self, delta: i32) {
        self.commit_attr_edit();
        let InspectorView::Editing(props) = self.editor.inspector_view() else {
            return;
        };
        let attrs = props.attrs();
        let current = attrs
            .iter()
            .position(|attr| *attr == self.attr)
            .unwrap_or(0);
        let next = (current as i64 + i64::from(delta)).rem_euclid(attrs.len() as i64);
        self.attr = attrs[next as usize];
        self.seed_attr_buffer();
    }

    fn cycle_zone(&mut self, delta: i32) {
        self.commit_attr_edit();
        let mut ring = vec![
            BuilderZone::Title,
            BuilderZone::Description,
            BuilderZone::Fields,
        ];
        if self.editor.selected_index().is_some() {
            ring.push(BuilderZone::Inspector);
        }
        let current = ring
            .iter()
            .position(|zone| *zone == self.zone)
            .unwrap_or(2);
        let next = (current as i64 + i64::from(delta)).rem_euclid(ring.len() as i64);
        self.zone = ring[next as usize];
        if self.zone == BuilderZone::Inspector {
            self.seed_attr_buffer();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.quit_armed = false;
    }
}

#[cfg(test)]
impl BuilderApp {
    pub(crate) fn zone(&self) -> BuilderZone {
        self.zone
    }

    pub(crate) fn status_message(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn wants_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn attr_buffer(&self) -> &str {
        &self.attr_buffer
    }
}
