mod actions;
mod state;
mod view;

pub use actions::{EditorCommand, FieldPatch};
pub use state::{
    FormEditor, SAVE_FAILURE_NOTICE, SAVE_SUCCESS_NOTICE, SaveError, SavePhase, ViewRevisions,
};
pub use view::{
    EMPTY_LIST_HINT, FieldListView, FieldProps, FieldRow, InspectorAttr, InspectorView,
    NO_SELECTION_HINT, SAVE_BUSY_LABEL, SAVE_IDLE_LABEL, SaveControl,
};
