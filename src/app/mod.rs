pub(crate) mod input;
pub(crate) mod status;

mod builder;
mod options;
mod respond;
mod terminal;

pub use builder::{BUILDER_HELP, BuilderApp};
pub use options::UiOptions;
pub use respond::{RESPOND_HELP, RespondApp};
