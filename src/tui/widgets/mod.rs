//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;
pub mod tabs;
pub mod toast;

pub use form::{FieldFocus, FormView, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};
pub use tabs::draw_tabs;
pub use toast::draw_toast;
