use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{Form, short_token};
use crate::submit::SubmissionPayload;

use super::{FormStore, FormSummary, ResponseRecord, StoreError, StoredForm, SubmissionStore};

/// Filesystem store: one pretty-printed JSON document per form under
/// `forms/`, and one response log per form under `responses/`.
#[derive(Debug, Clone)]
pub struct DirStore {
    forms_dir: PathBuf,
    responses_dir: PathBuf,
}

impl DirStore {
    /// Opens a store rooted at `root`, creating its layout on first
    /// use.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();
        let store = DirStore {
            forms_dir: root.join("forms"),
            responses_dir: root.join("responses"),
        };
        fs::create_dir_all(&store.forms_dir)?;
        fs::create_dir_all(&store.responses_dir)?;
        Ok(store)
    }

    fn form_path(&self, id: &str) -> PathBuf {
        self.forms_dir.join(format!("{id}.json"))
    }

    fn responses_path(&self, id: &str) -> PathBuf {
        self.responses_dir.join(format!("{id}.json"))
    }

    fn read_form(&self, id: &str) -> Result<Option<StoredForm>, StoreError> {
        let path = self.form_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_json(&self, path: &Path, value: &impl Serialize) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

impl FormStore for DirStore {
    fn create_or_update(&self, form: &Form) -> Result<String, StoreError> {
        let id = form.id.clone().unwrap_or_else(short_token);
        let now = Utc::now();
        let created_at = self
            .read_form(&id)?
            .map_or(now, |existing| existing.created_at);
        let mut stored = StoredForm {
            form: form.clone(),
            created_at,
            updated_at: now,
        };
        stored.form.id = Some(id.clone());
        let path = self.form_path(&id);
        self.write_json(&path, &stored)?;
        info!(form_id = %id, path = %path.display(), "form written");
        Ok(id)
    }

    fn fetch(&self, id: &str) -> Result<Option<Form>, StoreError> {
        Ok(self.read_form(id)?.map(|stored| stored.form))
    }

    fn list(&self) -> Result<Vec<FormSummary>, StoreError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.forms_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            let stored: StoredForm = serde_json::from_str(&raw)?;
            summaries.push(stored.summary());
        }
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        for path in [self.form_path(id), self.responses_path(id)] {
            if path.exists() {
                fs::remove_file(&path)?;
                debug!(path = %path.display(), "removed");
            }
        }
        Ok(())
    }
}

impl SubmissionStore for DirStore {
    fn submit(&self, form_id: &str, payload: &SubmissionPayload) -> Result<(), StoreError> {
        if !self.form_path(form_id).exists() {
            return Err(StoreError::NotFound(form_id.to_string()));
        }
        let mut records = self.responses(form_id)?;
        records.push(ResponseRecord {
            id: short_token(),
            submitted_at: Utc::now(),
            answers: payload.clone(),
        });
        self.write_json(&self.responses_path(form_id), &records)?;
        info!(form_id = %form_id, total = records.len(), "response recorded");
        Ok(())
    }

    fn responses(&self, form_id: &str) -> Result<Vec<ResponseRecord>, StoreError> {
        let path = self.responses_path(form_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
