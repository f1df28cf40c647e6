use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::notice::Notice;
use crate::store::{StoreError, SubmissionStore};

use super::payload::SubmissionPayload;

pub const SUBMIT_FAILURE_NOTICE: &str = "Failed to submit form. Please try again.";
pub const THANK_YOU_TITLE: &str = "Thank you!";
pub const THANK_YOU_BODY: &str = "Your response has been recorded.";
pub const SUBMIT_IDLE_LABEL: &str = "Submit";
pub const SUBMIT_BUSY_LABEL: &str = "Submitting...";

/// Lifecycle of one filling session. `Done` is terminal; a failed
/// submit drops back to `Idle` so the respondent can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this response has already been recorded")]
    Completed,
    #[error("no submission is in flight")]
    NotInFlight,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

/// Tracks one respondent's pass through a form: whether a submission
/// is in flight, has landed, or failed and may be retried.
#[derive(Debug)]
pub struct SubmissionCollector {
    form_id: String,
    phase: SubmitPhase,
    started: Option<Instant>,
    notice: Option<Notice>,
}

impl SubmissionCollector {
    pub fn new(form_id: impl Into<String>) -> Self {
        SubmissionCollector {
            form_id: form_id.into(),
            phase: SubmitPhase::Idle,
            started: None,
            notice: None,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn succeeded(&self) -> bool {
        self.phase == SubmitPhase::Done
    }

    pub fn in_flight(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Moves to `Submitting`. Refused while a submission is pending or
    /// after one has already landed.
    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        match self.phase {
            SubmitPhase::Submitting => Err(SubmitError::InFlight),
            SubmitPhase::Done => Err(SubmitError::Completed),
            SubmitPhase::Idle => {
                self.phase = SubmitPhase::Submitting;
                self.started = Some(Instant::now());
                Ok(())
            }
        }
    }

    /// Settles the in-flight submission: success parks the collector in
    /// `Done`, failure returns to `Idle` with a retry notice.
    pub fn complete_submit(&mut self, outcome: Result<(), StoreError>) -> Result<(), SubmitError> {
        if self.phase != SubmitPhase::Submitting {
            return Err(SubmitError::NotInFlight);
        }
        self.started = None;
        match outcome {
            Ok(()) => {
                debug!(form_id = %self.form_id, "response recorded");
                self.phase = SubmitPhase::Done;
                self.notice = None;
                Ok(())
            }
            Err(err) => {
                warn!(form_id = %self.form_id, error = %err, "submission failed");
                self.phase = SubmitPhase::Idle;
                self.notice = Some(Notice::error(SUBMIT_FAILURE_NOTICE));
                Err(SubmitError::Store(err))
            }
        }
    }

    /// Gives up on a submission older than `timeout`, settling it as a
    /// store timeout. Returns whether anything expired.
    pub fn expire_submit(&mut self, timeout: Duration) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        if started.elapsed() < timeout {
            return false;
        }
        let _ = self.complete_submit(Err(StoreError::Timeout));
        true
    }

    /// Runs the whole submit round trip against `store` on the calling
    /// thread.
    pub fn submit_with(
        &mut self,
        store: &dyn SubmissionStore,
        payload: &SubmissionPayload,
    ) -> Result<(), SubmitError> {
        self.begin_submit()?;
        self.complete_submit(store.submit(&self.form_id, payload))
    }

    /// Derives the submit control: busy while in flight, disabled for
    /// good once the response has been recorded.
    pub fn submit_control(&self) -> SubmitControl {
        match self.phase {
            SubmitPhase::Idle => SubmitControl {
                enabled: true,
                label: SUBMIT_IDLE_LABEL,
            },
            SubmitPhase::Submitting => SubmitControl {
                enabled: false,
                label: SUBMIT_BUSY_LABEL,
            },
            SubmitPhase::Done => SubmitControl {
                enabled: false,
                label: SUBMIT_IDLE_LABEL,
            },
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn prune_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
