//! UI components built with Leptos.
//!
//! - [`preview`] - Staged file previews and the "select more" control
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod preview;

pub use preview::PreviewList;
