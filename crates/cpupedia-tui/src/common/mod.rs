//! Shared widgets and text helpers.

pub mod scrollbar;
pub mod text;

pub use scrollbar::Scrollbar;
pub use text::{truncate_with_ellipsis, wrap_text};
