//! Asynchronous file content reading.
//!
//! Wraps `Blob.arrayBuffer()` so reads never block the UI thread.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;

use dropstage_core::{FileLike, PreviewError, data_url};

use super::dom::describe_js_error;
use crate::models::BrowserFile;

/// Read the whole file into memory.
pub async fn read_bytes(file: &BrowserFile) -> Result<Vec<u8>, PreviewError> {
    let buffer = JsFuture::from(file.raw().array_buffer())
        .await
        .map_err(|e| PreviewError::Read(describe_js_error(&e)))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Read the file and encode it as a `data:` URL using its declared type.
pub async fn read_data_url(file: &BrowserFile) -> Result<String, PreviewError> {
    let bytes = read_bytes(file).await?;
    Ok(data_url(&file.media_type(), &bytes))
}
