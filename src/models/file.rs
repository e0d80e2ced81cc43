//! Browser file adapter.

use dropstage_core::FileLike;
use web_sys::{File, FileList};

/// A user-selected `File` from a picker or drop gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    /// The underlying `File` object.
    pub fn raw(&self) -> &File {
        &self.0
    }

    /// Collect every file of a `FileList`.
    ///
    /// The list is copied because browsers reuse and replace `FileList`s
    /// (e.g. when the input's files are reassigned).
    pub fn from_list(list: &FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self)
            .collect()
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileLike for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn last_modified(&self) -> i64 {
        self.0.last_modified() as i64
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}
