use serde::{Deserialize, Serialize};

use super::field::Field;

/// Title a form falls back to whenever the user leaves it blank.
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// The form document the builder edits and the stores persist.
///
/// `id` stays `None` until the first successful save assigns one. The order
/// of `fields` is authoritative: it is the order respondents see and the
/// column order of exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Form {
            id: None,
            title: DEFAULT_FORM_TITLE.to_string(),
            description: String::new(),
            fields: Vec::new(),
        }
    }

    /// Title edits coerce empty input back to the default so the document
    /// never carries an empty title.
    pub fn set_title(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.title = if raw.is_empty() {
            DEFAULT_FORM_TITLE.to_string()
        } else {
            raw
        };
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
