use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use indexmap::IndexMap;
use tracing::debug;

use crate::domain::{Form, short_token};
use crate::submit::SubmissionPayload;

use super::{FormStore, FormSummary, ResponseRecord, StoreError, StoredForm, SubmissionStore};

/// In-process store, used by the test suite and as the builder's
/// default when no data directory is wanted. The failure switches make
/// the save and submit error paths reachable from tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    forms: IndexMap<String, StoredForm>,
    responses: IndexMap<String, Vec<ResponseRecord>>,
    fail_saves: bool,
    fail_submits: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail with a rejection.
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Makes every subsequent submit fail with a rejection.
    pub fn set_fail_submits(&self, fail: bool) {
        self.lock().fail_submits = fail;
    }

    pub fn form_count(&self) -> usize {
        self.lock().forms.len()
    }

    pub fn response_count(&self, form_id: &str) -> usize {
        self.lock()
            .responses
            .get(form_id)
            .map_or(0, |records| records.len())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormStore for MemoryStore {
    fn create_or_update(&self, form: &Form) -> Result<String, StoreError> {
        let mut inner = self.lock();
        if inner.fail_saves {
            return Err(StoreError::Rejected("save rejected".into()));
        }
        let id = form.id.clone().unwrap_or_else(short_token);
        let now = Utc::now();
        let created_at = inner
            .forms
            .get(&id)
            .map_or(now, |existing| existing.created_at);
        let mut stored = StoredForm {
            form: form.clone(),
            created_at,
            updated_at: now,
        };
        stored.form.id = Some(id.clone());
        inner.forms.insert(id.clone(), stored);
        debug!(form_id = %id, "form stored in memory");
        Ok(id)
    }

    fn fetch(&self, id: &str) -> Result<Option<Form>, StoreError> {
        Ok(self.lock().forms.get(id).map(|stored| stored.form.clone()))
    }

    fn list(&self) -> Result<Vec<FormSummary>, StoreError> {
        let mut summaries: Vec<_> = self
            .lock()
            .forms
            .values()
            .map(StoredForm::summary)
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.forms.shift_remove(id);
        inner.responses.shift_remove(id);
        Ok(())
    }
}

impl SubmissionStore for MemoryStore {
    fn submit(&self, form_id: &str, payload: &SubmissionPayload) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.fail_submits {
            return Err(StoreError::Rejected("submission rejected".into()));
        }
        if !inner.forms.contains_key(form_id) {
            return Err(StoreError::NotFound(form_id.to_string()));
        }
        let record = ResponseRecord {
            id: short_token(),
            submitted_at: Utc::now(),
            answers: payload.clone(),
        };
        inner
            .responses
            .entry(form_id.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    fn responses(&self, form_id: &str) -> Result<Vec<ResponseRecord>, StoreError> {
        Ok(self
            .lock()
            .responses
            .get(form_id)
            .cloned()
            .unwrap_or_default())
    }
}
