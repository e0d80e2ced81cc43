//! Keeping a file input's `files` in sync with the staged set.
//!
//! Browsers do not allow constructing a `FileList` directly; a fresh
//! `DataTransfer` is filled with the files and its list is assigned to the
//! input, so a plain form submission sends exactly those files.

use wasm_bindgen::JsValue;
use web_sys::{DataTransfer, FileList, HtmlInputElement};

/// Build a `FileList` containing `files` in order.
pub fn build_file_list<'a>(
    files: impl IntoIterator<Item = &'a web_sys::File>,
) -> Result<FileList, JsValue> {
    let transfer = DataTransfer::new()?;
    let items = transfer.items();
    for file in files {
        items.add_with_file(file)?;
    }
    transfer
        .files()
        .ok_or_else(|| JsValue::from_str("DataTransfer has no file list"))
}

/// Replace the input's selected files.
pub fn sync_input_files<'a>(
    input: &HtmlInputElement,
    files: impl IntoIterator<Item = &'a web_sys::File>,
) -> Result<(), JsValue> {
    let list = build_file_list(files)?;
    input.set_files(Some(&list));
    Ok(())
}

/// Number of files currently exposed by the input.
pub fn input_file_count(input: &HtmlInputElement) -> u32 {
    input.files().map(|list| list.length()).unwrap_or(0)
}
