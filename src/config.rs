//! Application configuration.
//!
//! Centralizes DOM-facing constants. Element ids and behaviour defaults
//! live in [`dropstage_core::config`] and can be overridden per page.

use dropstage_core::DropZoneConfig;

use crate::utils::dom;

// =============================================================================
// Page Integration
// =============================================================================

/// `<body>` attribute holding an optional JSON [`DropZoneConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-dropstage";

/// Window globals under which PDF.js may be exposed, checked in order.
pub const PDFJS_GLOBALS: &[&str] = &["pdfjsLib", "pdfjs-dist/build/pdf"];

/// Class added to the drop zone while files are dragged over it.
pub const DRAG_OVER_CLASS: &str = "drop-zone--over";

// =============================================================================
// Preview Configuration
// =============================================================================

/// Message shown in place of a PDF preview that could not be rendered.
pub const PDF_ERROR_MESSAGE: &str = "Error loading PDF preview.";

/// Label of the control that reopens the picker once files are staged.
pub const SELECT_MORE_LABEL: &str = "Select more files";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the widget.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Read the page's drop zone configuration.
///
/// Falls back to defaults when the attribute is absent. An invalid
/// attribute is reported on the console and defaults are used.
pub fn load_page_config() -> DropZoneConfig {
    let raw = dom::document()
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

    let Some(raw) = raw else {
        return DropZoneConfig::default();
    };

    match DropZoneConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("dropstage: ignoring {}: {}", CONFIG_ATTRIBUTE, e).into(),
            );
            DropZoneConfig::default()
        }
    }
}
