mod field;
mod form;
mod registry;

pub use field::{Field, FieldKind, UNTITLED_FIELD};
pub use form::{DEFAULT_FORM_TITLE, Form};
pub use registry::{FIELD_TYPES, FieldTypeDescriptor, descriptor};

pub(crate) use field::short_token;
