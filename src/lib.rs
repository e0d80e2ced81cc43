//! dropstage: a drag-and-drop file staging widget for server-rendered forms.
//!
//! The widget attaches to existing page elements, lets the user pick or
//! drop files, previews each staged file and keeps the page's file input in
//! sync so a plain form submission sends exactly the staged files.
//!
//! ```ignore
//! let config = dropstage::config::load_page_config();
//! dropstage::init_drop_zone_from_document(&config)?.forget();
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod utils;

pub use app::{
    DropZone, DropZoneHandles, StagingState, init_drop_zone, init_drop_zone_from_document,
};
