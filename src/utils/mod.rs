//! Utility modules for browser API access.
//!
//! Provides:
//! - [`dom`] - Element lookup, visibility and error description helpers
//! - [`read_bytes`], [`read_data_url`] - Non-blocking file content reads
//! - [`render_first_page`] - PDF.js first-page rasterization
//! - [`sync_input_files`] - Mirroring staged files into a file input

pub mod dom;
mod file_list;
mod pdf;
mod read;

pub use file_list::{build_file_list, input_file_count, sync_input_files};
pub use pdf::render_first_page;
pub use read::{read_bytes, read_data_url};
