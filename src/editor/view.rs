use crate::domain::{FieldKind, descriptor};

use super::state::{FormEditor, SavePhase};

pub const EMPTY_LIST_HINT: &str = "No fields yet";
pub const NO_SELECTION_HINT: &str = "Select a field to edit its properties";
pub const SAVE_IDLE_LABEL: &str = "Save Form";
pub const SAVE_BUSY_LABEL: &str = "Saving...";

/// One entry of the field list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub id: String,
    pub kind: FieldKind,
    pub icon: &'static str,
    pub label: String,
    pub required: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

/// Render model for the field list pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldListView {
    pub rows: Vec<FieldRow>,
}

impl FieldListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render model for the inspector pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorView {
    Empty,
    Editing(FieldProps),
}

/// Properties of the selected field, gated by its kind: attributes the
/// kind does not carry are absent rather than blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps {
    pub index: usize,
    pub id: String,
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    pub placeholder: Option<String>,
    pub options_text: Option<String>,
}

impl FieldProps {
    /// The inspector attributes this field exposes, in display order.
    pub fn attrs(&self) -> Vec<InspectorAttr> {
        let mut attrs = vec![InspectorAttr::Label];
        if self.placeholder.is_some() {
            attrs.push(InspectorAttr::Placeholder);
        }
        if self.options_text.is_some() {
            attrs.push(InspectorAttr::Options);
        }
        attrs.push(InspectorAttr::Required);
        attrs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorAttr {
    Label,
    Placeholder,
    Options,
    Required,
}

impl InspectorAttr {
    pub fn title(self) -> &'static str {
        match self {
            InspectorAttr::Label => "Label",
            InspectorAttr::Placeholder => "Placeholder",
            InspectorAttr::Options => "Options (one per line)",
            InspectorAttr::Required => "Required",
        }
    }
}

/// State of the save button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl FormEditor {
    /// Derives the field list pane from the current document.
    pub fn field_list_view(&self) -> FieldListView {
        let last = self.form().fields.len().saturating_sub(1);
        let rows = self
            .form()
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| FieldRow {
                id: field.id.clone(),
                kind: field.kind,
                icon: descriptor(field.kind).icon,
                label: field.display_label().to_string(),
                required: field.required,
                can_move_up: index > 0,
                can_move_down: index < last,
            })
            .collect();
        FieldListView { rows }
    }

    /// Derives the inspector pane for the current selection.
    pub fn inspector_view(&self) -> InspectorView {
        let Some(index) = self.selected_index() else {
            return InspectorView::Empty;
        };
        let Some(field) = self.form().field(index) else {
            return InspectorView::Empty;
        };
        let placeholder = field
            .kind
            .takes_placeholder()
            .then(|| field.placeholder.clone());
        let options_text = field.kind.takes_options().then(|| field.options.join("\n"));
        InspectorView::Editing(FieldProps {
            index,
            id: field.id.clone(),
            kind: field.kind,
            label: field.label.clone(),
            required: field.required,
            placeholder,
            options_text,
        })
    }

    /// Derives the save control: disabled with a busy label while a
    /// save is in flight.
    pub fn save_control(&self) -> SaveControl {
        match self.save_phase() {
            SavePhase::Idle => SaveControl {
                enabled: true,
                label: SAVE_IDLE_LABEL,
            },
            SavePhase::Saving => SaveControl {
                enabled: false,
                label: SAVE_BUSY_LABEL,
            },
        }
    }
}
