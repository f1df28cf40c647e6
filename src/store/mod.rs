mod dir;
mod export;
mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Form;
use crate::submit::SubmissionPayload;

pub use dir::DirStore;
pub use export::export_csv;
pub use memory::MemoryStore;

/// Failures the persistence layer can report.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("form not found: {0}")]
    NotFound(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("store call timed out")]
    Timeout,
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stored document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persistence for form documents.
pub trait FormStore {
    /// Saves `form`, allocating an id when it has none, and returns the
    /// id the document is stored under.
    fn create_or_update(&self, form: &Form) -> Result<String, StoreError>;

    /// Loads a form by id; `Ok(None)` when no such form exists.
    fn fetch(&self, id: &str) -> Result<Option<Form>, StoreError>;

    /// Lists every stored form, most recently updated first.
    fn list(&self) -> Result<Vec<FormSummary>, StoreError>;

    /// Removes a form and its responses. Deleting an absent id is not
    /// an error.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Persistence for submitted responses.
pub trait SubmissionStore {
    /// Records one response against `form_id`. Fails with
    /// [`StoreError::NotFound`] when the form does not exist.
    fn submit(&self, form_id: &str, payload: &SubmissionPayload) -> Result<(), StoreError>;

    /// Loads every response recorded for `form_id`, oldest first.
    fn responses(&self, form_id: &str) -> Result<Vec<ResponseRecord>, StoreError>;
}

/// One row of the stored-forms listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSummary {
    pub id: String,
    pub title: String,
    pub field_count: usize,
    pub updated_at: DateTime<Utc>,
}

/// A form document as persisted, with its bookkeeping timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredForm {
    #[serde(flatten)]
    pub form: Form,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredForm {
    pub fn summary(&self) -> FormSummary {
        FormSummary {
            id: self.form.id.clone().unwrap_or_default(),
            title: self.form.title.clone(),
            field_count: self.form.fields.len(),
            updated_at: self.updated_at,
        }
    }
}

/// One recorded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    pub answers: SubmissionPayload,
}
