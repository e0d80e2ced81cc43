//! Data models for the widget.
//!
//! Browser-independent staging types live in `dropstage_core`; this module
//! adds the web-specific pieces:
//! - [`BrowserFile`] - `web_sys::File` adapter implementing `FileLike`
//! - [`StagedFiles`] - staging set over browser files

mod file;

pub use file::BrowserFile;

/// Staging set holding browser files.
pub type StagedFiles = dropstage_core::StagingSet<BrowserFile>;
