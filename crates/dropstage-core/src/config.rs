//! Widget configuration.
//!
//! Defaults match the element ids of the upload form the widget was built
//! for. A page can override any of them with a JSON object, see
//! [`DropZoneConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// =============================================================================
// Defaults
// =============================================================================

/// Default id of the drop target region.
pub const DEFAULT_DROP_ZONE_ID: &str = "drop-zone";

/// Default id of the `<input type="file">` whose files are submitted.
pub const DEFAULT_INPUT_ID: &str = "file-input";

/// Default id of the button that opens the file picker.
pub const DEFAULT_SELECT_BUTTON_ID: &str = "select-file-btn";

/// Default id of the container previews are rendered into.
pub const DEFAULT_PREVIEW_CONTAINER_ID: &str = "preview-container";

/// Default id of the "no file chosen" prompt.
pub const DEFAULT_PROMPT_ID: &str = "upload-prompt";

/// Default id of the single-mode file name display.
pub const DEFAULT_FILE_NAME_DISPLAY_ID: &str = "fileNameDisplay";

/// Scale at which the first PDF page is rasterized.
pub const DEFAULT_PDF_SCALE: f64 = 0.4;

// =============================================================================
// SelectionMode
// =============================================================================

/// How newly selected files combine with already staged ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Accumulate files, ignoring duplicates.
    #[default]
    Multiple,
    /// Keep at most one file; a new selection replaces it.
    Single,
}

// =============================================================================
// DropZoneConfig
// =============================================================================

/// Element ids and behaviour switches for one drop zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DropZoneConfig {
    pub drop_zone_id: String,
    pub input_id: String,
    pub select_button_id: String,
    pub preview_container_id: String,
    pub prompt_id: String,
    pub file_name_display_id: String,
    pub mode: SelectionMode,
    pub pdf_scale: f64,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            drop_zone_id: DEFAULT_DROP_ZONE_ID.to_string(),
            input_id: DEFAULT_INPUT_ID.to_string(),
            select_button_id: DEFAULT_SELECT_BUTTON_ID.to_string(),
            preview_container_id: DEFAULT_PREVIEW_CONTAINER_ID.to_string(),
            prompt_id: DEFAULT_PROMPT_ID.to_string(),
            file_name_display_id: DEFAULT_FILE_NAME_DISPLAY_ID.to_string(),
            mode: SelectionMode::default(),
            pdf_scale: DEFAULT_PDF_SCALE,
        }
    }
}

impl DropZoneConfig {
    /// Parse a JSON config object, filling omitted fields with defaults.
    ///
    /// ```
    /// use dropstage_core::{DropZoneConfig, SelectionMode};
    ///
    /// let config = DropZoneConfig::from_json(r#"{"mode": "single"}"#).unwrap();
    /// assert_eq!(config.mode, SelectionMode::Single);
    /// assert_eq!(config.input_id, "file-input");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pdf_scale.is_finite() || self.pdf_scale <= 0.0 {
            return Err(ConfigError::InvalidPdfScale(self.pdf_scale));
        }

        let required = [
            ("dropZoneId", &self.drop_zone_id),
            ("inputId", &self.input_id),
            ("previewContainerId", &self.preview_container_id),
            ("promptId", &self.prompt_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyElementId(field));
            }
        }
        Ok(())
    }
}
