//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as File, LuFileImage as FileImage, LuFileText as FilePdf, LuPlus as Plus,
        LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsExclamationTriangle as Warning, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf, BsPlusLg as Plus,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(PLUS, Plus);
themed_icon!(WARNING, Warning);
themed_icon!(CLOSE, Close);
