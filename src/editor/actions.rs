use crate::domain::{Field, FieldKind};

/// Editing operations a builder surface can feed to [`FormEditor`].
///
/// [`FormEditor`]: super::FormEditor
#[derive(Debug, Clone)]
pub enum EditorCommand {
    AddField(FieldKind),
    RemoveField(usize),
    MoveField { from: usize, to: usize },
    SelectField(usize),
    ClearSelection,
    UpdateField { index: usize, patch: FieldPatch },
}

/// Partial field update; unset attributes keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn label(value: impl Into<String>) -> Self {
        FieldPatch {
            label: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn placeholder(value: impl Into<String>) -> Self {
        FieldPatch {
            placeholder: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn required(value: bool) -> Self {
        FieldPatch {
            required: Some(value),
            ..Self::default()
        }
    }

    pub fn options(values: Vec<String>) -> Self {
        FieldPatch {
            options: Some(values),
            ..Self::default()
        }
    }

    /// Parses the options editor's text: one option per line, blank lines
    /// dropped, the rest kept verbatim (no trimming).
    pub fn options_from_lines(raw: &str) -> Self {
        let options = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self::options(options)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, field: &mut Field) {
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(placeholder) = self.placeholder {
            field.placeholder = placeholder;
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(options) = self.options {
            field.options = options;
        }
    }
}
