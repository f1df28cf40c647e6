pub(crate) mod components;
mod view;

pub use view::{BuilderContext, RespondContext, draw_builder, draw_respond};
