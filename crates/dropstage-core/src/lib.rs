//! Browser-independent logic for the dropstage file-staging widget.
//!
//! This crate provides:
//! - [`FileIdentity`] and the [`FileLike`] abstraction over browser files
//! - [`StagingSet`] - ordered, identity-deduplicated staged files
//! - [`MediaKind`] - preview strategy selection from a MIME type
//! - [`DropZoneConfig`] - page-level configuration
//! - Error types shared with the web front end

pub mod config;
pub mod error;
pub mod format;
mod identity;
mod media;
mod staging;

pub use config::{DropZoneConfig, SelectionMode};
pub use error::{ConfigError, PreviewError, SetupError};
pub use identity::{FileIdentity, FileLike};
pub use media::{MediaKind, data_url};
pub use staging::{StageOutcome, StageReport, StagedFile, StagingSet, ZoneView};
