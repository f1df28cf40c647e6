pub(crate) mod fields;
mod footer;
mod inspector;
pub(crate) mod layout;
mod meta;
mod palette;
pub(crate) mod panel;
pub(crate) mod respond;

pub use fields::render_field_list;
pub use footer::{FooterInfo, render_footer};
pub use inspector::render_inspector;
pub use meta::render_meta;
pub use palette::render_palette;
pub use respond::{render_respond_form, render_thanks};
