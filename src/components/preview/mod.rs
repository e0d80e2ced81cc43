//! Preview components for staged files.
//!
//! [`PreviewList`] renders one [`PreviewItem`] per staged file. Bodies are
//! picked by media type: image thumbnail, first PDF page, or file icon.

mod content;
mod item;
mod list;

pub use content::{FilePreview, ImagePreview, PdfPreview};
pub use item::PreviewItem;
pub use list::PreviewList;
