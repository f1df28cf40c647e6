use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::{Field, FieldKind, Form};
use crate::notice::Notice;
use crate::store::{FormStore, StoreError};

use super::actions::{EditorCommand, FieldPatch};

pub const SAVE_SUCCESS_NOTICE: &str = "Form saved successfully!";
pub const SAVE_FAILURE_NOTICE: &str = "Failed to save form";

/// Where the editor stands in the save round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePhase {
    #[default]
    Idle,
    Saving,
}

/// Monotonic counters bumped whenever the matching derived view would
/// render differently. Callers compare against a remembered value to
/// skip rebuilding an unchanged pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewRevisions {
    pub field_list: u64,
    pub inspector: u64,
}

impl ViewRevisions {
    fn bump_field_list(&mut self) {
        self.field_list = self.field_list.wrapping_add(1);
    }

    fn bump_inspector(&mut self) {
        self.inspector = self.inspector.wrapping_add(1);
    }

    fn bump_both(&mut self) {
        self.bump_field_list();
        self.bump_inspector();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("a save is already in flight")]
    InFlight,
    #[error("no save is in flight")]
    NotInFlight,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Mutable editing session over one [`Form`].
///
/// All field operations go through this type so the derived views and
/// their revision counters stay consistent with the document. Index
/// arguments outside the current field range are ignored rather than
/// rejected; the surfaces that feed commands in race against their own
/// last rendered snapshot.
#[derive(Debug)]
pub struct FormEditor {
    form: Form,
    selected: Option<usize>,
    revisions: ViewRevisions,
    phase: SavePhase,
    save_started: Option<Instant>,
    notice: Option<Notice>,
}

impl FormEditor {
    pub fn new() -> Self {
        Self::with_form(Form::new())
    }

    pub fn with_form(mut form: Form) -> Self {
        if form.title.trim().is_empty() {
            form.title = crate::domain::DEFAULT_FORM_TITLE.to_string();
        }
        FormEditor {
            form,
            selected: None,
            revisions: ViewRevisions::default(),
            phase: SavePhase::Idle,
            save_started: None,
            notice: None,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.form.field(self.selected?)
    }

    pub fn revisions(&self) -> ViewRevisions {
        self.revisions
    }

    /// Applies one command. Commands with stale indices degrade to
    /// no-ops, so replaying a queue recorded against an older snapshot
    /// is safe.
    pub fn apply(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::AddField(kind) => {
                self.add_field(kind);
            }
            EditorCommand::RemoveField(index) => self.remove_field(index),
            EditorCommand::MoveField { from, to } => {
                self.move_field(from, to);
            }
            EditorCommand::SelectField(index) => self.select_field(index),
            EditorCommand::ClearSelection => self.clear_selection(),
            EditorCommand::UpdateField { index, patch } => self.update_field(index, patch),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.set_title(title);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Appends a defaulted field of `kind`, selects it, and returns its
    /// index.
    pub fn add_field(&mut self, kind: FieldKind) -> usize {
        self.form.fields.push(Field::new(kind));
        let index = self.form.fields.len() - 1;
        self.selected = Some(index);
        self.revisions.bump_both();
        index
    }

    pub fn remove_field(&mut self, index: usize) {
        if index >= self.form.fields.len() {
            return;
        }
        self.form.fields.remove(index);
        self.selected = None;
        self.revisions.bump_both();
    }

    /// Moves the field at `from` to position `to`. Returns whether the
    /// document changed; out-of-range positions leave it untouched.
    pub fn move_field(&mut self, from: usize, to: usize) -> bool {
        let len = self.form.fields.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let field = self.form.fields.remove(from);
            self.form.fields.insert(to, field);
        }
        self.selected = Some(to);
        self.revisions.bump_both();
        true
    }

    /// Moves the field at `index` by a signed offset, stopping at the
    /// ends of the list.
    pub fn move_field_by(&mut self, index: usize, delta: i32) -> bool {
        let len = self.form.fields.len();
        if index >= len {
            return false;
        }
        let Some(target) = checked_offset(index, delta) else {
            return false;
        };
        let target = target.min(len - 1);
        if target == index {
            return false;
        }
        self.move_field(index, target)
    }

    pub fn select_field(&mut self, index: usize) {
        let next = if index < self.form.fields.len() {
            Some(index)
        } else {
            None
        };
        if next != self.selected {
            self.selected = next;
            self.revisions.bump_inspector();
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.revisions.bump_inspector();
        }
    }

    pub fn update_field(&mut self, index: usize, patch: FieldPatch) {
        let Some(field) = self.form.fields.get_mut(index) else {
            return;
        };
        if patch.is_empty() {
            return;
        }
        patch.apply_to(field);
        self.revisions.bump_both();
    }

    /// Starts a save round trip and hands back the document snapshot to
    /// persist. Fails while an earlier save has not been completed or
    /// expired.
    pub fn begin_save(&mut self) -> Result<Form, SaveError> {
        if self.phase == SavePhase::Saving {
            return Err(SaveError::InFlight);
        }
        self.phase = SavePhase::Saving;
        self.save_started = Some(Instant::now());
        Ok(self.form.clone())
    }

    /// Settles the in-flight save with the store's verdict and returns
    /// to idle. On success the assigned id is folded into the document.
    pub fn complete_save(
        &mut self,
        outcome: Result<String, StoreError>,
    ) -> Result<String, SaveError> {
        if self.phase != SavePhase::Saving {
            return Err(SaveError::NotInFlight);
        }
        self.phase = SavePhase::Idle;
        self.save_started = None;
        match outcome {
            Ok(id) => {
                debug!(form_id = %id, "form saved");
                self.form.id = Some(id.clone());
                self.notice = Some(Notice::success(SAVE_SUCCESS_NOTICE));
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "form save failed");
                self.notice = Some(Notice::error(SAVE_FAILURE_NOTICE));
                Err(SaveError::Store(err))
            }
        }
    }

    /// Gives up on a save that has been in flight longer than `timeout`,
    /// settling it as a store timeout. Returns whether anything expired.
    pub fn expire_save(&mut self, timeout: Duration) -> bool {
        let Some(started) = self.save_started else {
            return false;
        };
        if started.elapsed() < timeout {
            return false;
        }
        let _ = self.complete_save(Err(StoreError::Timeout));
        true
    }

    /// Runs the whole save round trip against `store` on the calling
    /// thread.
    pub fn save_with(&mut self, store: &dyn FormStore) -> Result<String, SaveError> {
        let snapshot = self.begin_save()?;
        self.complete_save(store.create_or_update(&snapshot))
    }

    pub fn save_phase(&self) -> SavePhase {
        self.phase
    }

    pub fn save_in_flight(&self) -> bool {
        self.phase == SavePhase::Saving
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Drops the current notice once its display window has passed.
    pub fn prune_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_offset(index: usize, delta: i32) -> Option<usize> {
    let target = index as i64 + i64::from(delta);
    usize::try_from(target).ok()
}
