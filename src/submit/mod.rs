mod collector;
mod fill;
mod payload;

pub use collector::{
    SUBMIT_BUSY_LABEL, SUBMIT_FAILURE_NOTICE, SUBMIT_IDLE_LABEL, SubmissionCollector, SubmitControl,
    SubmitError, SubmitPhase, THANK_YOU_BODY, THANK_YOU_TITLE,
};
pub use fill::{FieldFill, FillState, FillValue};
pub use payload::{AnswerValue, SubmissionPayload};

pub(crate) use fill::apply_text_key;
