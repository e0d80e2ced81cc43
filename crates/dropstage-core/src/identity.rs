//! File identity derivation.

use std::fmt;

use serde::Serialize;

/// Deduplication key for a staged file.
///
/// Derived from the file's name, byte size and last-modified timestamp,
/// joined as `"{name}-{size}-{last_modified}"`. Two distinct file objects
/// carrying the same three properties are considered the same file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileIdentity(String);

impl FileIdentity {
    /// Derive the identity from file properties.
    pub fn derive(name: &str, size: u64, last_modified: i64) -> Self {
        Self(format!("{}-{}-{}", name, size, last_modified))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimal view of a user-selected file.
///
/// Implemented by the browser adapter around `web_sys::File`, and by plain
/// structs in tests.
pub trait FileLike {
    /// File name without any path.
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Last modification time in milliseconds since the Unix epoch.
    fn last_modified(&self) -> i64;

    /// Declared MIME type, empty when the browser could not guess one.
    fn media_type(&self) -> String;

    fn identity(&self) -> FileIdentity {
        FileIdentity::derive(&self.name(), self.size(), self.last_modified())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    impl FileLike for Stub {
        fn name(&self) -> String {
            "report.pdf".to_string()
        }
        fn size(&self) -> u64 {
            2048
        }
        fn last_modified(&self) -> i64 {
            1_700_000_000_000
        }
        fn media_type(&self) -> String {
            "application/pdf".to_string()
        }
    }

    #[test]
    fn test_identity_format() {
        let id = FileIdentity::derive("photo.png", 1234, 1_699_999_999_000);
        assert_eq!(id.as_str(), "photo.png-1234-1699999999000");
        assert_eq!(id.to_string(), "photo.png-1234-1699999999000");
    }

    #[test]
    fn test_identity_from_file_like() {
        assert_eq!(Stub.identity().as_str(), "report.pdf-2048-1700000000000");
    }

    #[test]
    fn test_identity_differs_per_property() {
        let base = FileIdentity::derive("a.txt", 10, 5);
        assert_ne!(base, FileIdentity::derive("b.txt", 10, 5));
        assert_ne!(base, FileIdentity::derive("a.txt", 11, 5));
        assert_ne!(base, FileIdentity::derive("a.txt", 10, 6));
    }

    #[test]
    fn test_identity_serializes_as_string() {
        let id = FileIdentity::derive("a.txt", 1, 2);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a.txt-1-2\"");
    }
}
