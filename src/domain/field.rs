use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::registry::descriptor;

/// Label shown in place of a blank field label.
pub const UNTITLED_FIELD: &str = "Untitled Field";

/// The eight field kinds a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Number,
    Select,
    Radio,
    Checkbox,
    Date,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Text,
        FieldKind::LongText,
        FieldKind::Email,
        FieldKind::Number,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::Date,
    ];

    /// Choice kinds carry an options list the respondent picks from.
    pub fn takes_options(self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Radio | FieldKind::Checkbox)
    }

    /// Free-text kinds expose an editable placeholder.
    pub fn takes_placeholder(self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::LongText | FieldKind::Email | FieldKind::Number
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::LongText => "long-text",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Date => "date",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single question within a form.
///
/// The id is opaque and stable for the field's lifetime; the kind never
/// changes after creation. `options` is meaningful for choice kinds only,
/// but the model does not enforce that; the views decide what to surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Field {
    /// Builds a field from its kind's registry defaults: descriptor label
    /// and placeholder, a fresh id, and a starter pair of options for
    /// choice kinds.
    pub fn new(kind: FieldKind) -> Self {
        let entry = descriptor(kind);
        let options = if kind.takes_options() {
            vec!["Option 1".to_string(), "Option 2".to_string()]
        } else {
            Vec::new()
        };
        Field {
            id: format!("field_{}", short_token()),
            kind,
            label: entry.label.to_string(),
            placeholder: entry.placeholder.to_string(),
            required: false,
            options,
        }
    }

    /// Label shown in the field list; blank labels fall back to a stand-in.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            UNTITLED_FIELD
        } else {
            &self.label
        }
    }
}

/// Short random token used for generated identifiers.
pub(crate) fn short_token() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}
