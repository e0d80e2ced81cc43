//! Error types for the widget.
//!
//! - [`PreviewError`] - Reading a staged file or rendering its preview
//! - [`SetupError`] - Locating page elements at initialization
//! - [`ConfigError`] - Parsing and validating page configuration

use thiserror::Error;

/// Preview generation errors.
///
/// Kept `Clone` so a failed preview can live inside a reactive resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Reading the file contents failed
    #[error("failed to read file: {0}")]
    Read(String),
    /// PDF.js is not present on the page
    #[error("PDF.js is not loaded on this page")]
    PdfLibraryUnavailable,
    /// PDF.js could not open the document or its first page
    #[error("failed to load PDF: {0}")]
    PdfLoad(String),
    /// Rasterizing the first page failed
    #[error("failed to render PDF page: {0}")]
    PdfRender(String),
    /// Canvas or its 2D context could not be created
    #[error("canvas 2D context unavailable")]
    Canvas,
}

/// Initialization errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    /// No `document` (not running in a browser page)
    #[error("document not available")]
    NoDocument,
    /// Required element missing from the page
    #[error("element #{0} not found")]
    MissingElement(String),
    /// Element exists but has the wrong type
    #[error("element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },
    /// Page configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// JSON did not match the config schema
    #[error("invalid drop zone config: {0}")]
    Parse(String),
    /// PDF scale must be finite and positive
    #[error("PDF scale must be a positive number, got {0}")]
    InvalidPdfScale(f64),
    /// A required element id was blank
    #[error("{0} must not be empty")]
    EmptyElementId(&'static str),
}
