#![deny(rust_2018_idioms)]

#[cfg(feature = "tui")]
mod app;
mod domain;
mod editor;
mod notice;
#[cfg(feature = "tui")]
mod presentation;
mod store;
mod submit;

#[cfg(feature = "tui")]
pub use app::{BUILDER_HELP, BuilderApp, RESPOND_HELP, RespondApp, UiOptions};
pub use domain::{
    DEFAULT_FORM_TITLE, FIELD_TYPES, Field, FieldKind, FieldTypeDescriptor, Form, UNTITLED_FIELD,
    descriptor,
};
pub use editor::{
    EMPTY_LIST_HINT, EditorCommand, FieldListView, FieldPatch, FieldProps, FieldRow, FormEditor,
    InspectorAttr, InspectorView, NO_SELECTION_HINT, SAVE_BUSY_LABEL, SAVE_FAILURE_NOTICE,
    SAVE_IDLE_LABEL, SAVE_SUCCESS_NOTICE, SaveControl, SaveError, SavePhase, ViewRevisions,
};
pub use notice::{NOTICE_TTL, Notice, Severity};
pub use store::{
    DirStore, FormStore, FormSummary, MemoryStore, ResponseRecord, StoreError, StoredForm,
    SubmissionStore, export_csv,
};
pub use submit::{
    AnswerValue, FieldFill, FillState, FillValue, SUBMIT_BUSY_LABEL, SUBMIT_FAILURE_NOTICE,
    SUBMIT_IDLE_LABEL, SubmissionCollector, SubmissionPayload, SubmitControl, SubmitError,
    SubmitPhase, THANK_YOU_BODY, THANK_YOU_TITLE,
};

pub mod prelude {
    #[cfg(feature = "tui")]
    pub use super::{BuilderApp, RespondApp, UiOptions};
    pub use super::{
        DirStore, Field, FieldKind, Form, FormEditor, FormStore, MemoryStore, SubmissionCollector,
        SubmissionPayload, SubmissionStore,
    };
}

#[cfg(test)]
mod tests;
