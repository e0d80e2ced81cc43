//! Media type classification and data URL encoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Fallback MIME type for data URLs when the browser reports none.
const OCTET_STREAM: &str = "application/octet-stream";

/// Preview strategy for a staged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image/*`, shown as an `<img>` from a data URL.
    Image,
    /// `application/pdf`, first page rendered onto a canvas.
    Pdf,
    /// Anything else, shown as a generic icon with the file name.
    Other,
}

impl MediaKind {
    /// Classify a declared MIME type.
    ///
    /// Matching is exact: browsers report `File.type` lowercased, and
    /// parameters such as `; x=y` make a type [`MediaKind::Other`].
    pub fn classify(media_type: &str) -> Self {
        if media_type.starts_with("image/") {
            Self::Image
        } else if media_type == "application/pdf" {
            Self::Pdf
        } else {
            Self::Other
        }
    }
}

/// Encode bytes as a base64 `data:` URL.
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    let media_type = match media_type.trim() {
        "" => OCTET_STREAM,
        t => t,
    };
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_images() {
        assert_eq!(MediaKind::classify("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::classify("image/svg+xml"), MediaKind::Image);
    }

    #[test]
    fn test_classify_pdf() {
        assert_eq!(MediaKind::classify("application/pdf"), MediaKind::Pdf);
    }

    #[test]
    fn test_classify_is_exact() {
        assert_eq!(MediaKind::classify("IMAGE/JPEG"), MediaKind::Other);
        assert_eq!(MediaKind::classify("Application/PDF"), MediaKind::Other);
        assert_eq!(MediaKind::classify(" image/png"), MediaKind::Other);
        assert_eq!(MediaKind::classify("application/pdf; x=y"), MediaKind::Other);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(MediaKind::classify("text/plain"), MediaKind::Other);
        assert_eq!(MediaKind::classify(""), MediaKind::Other);
        assert_eq!(MediaKind::classify("image"), MediaKind::Other);
        assert_eq!(MediaKind::classify("application/pdfx"), MediaKind::Other);
        assert_eq!(MediaKind::classify("video/mp4"), MediaKind::Other);
    }

    #[test]
    fn test_classify_multibyte_does_not_panic() {
        assert_eq!(MediaKind::classify("ïmage/png"), MediaKind::Other);
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(data_url("image/gif", b""), "data:image/gif;base64,");
    }

    #[test]
    fn test_data_url_without_type() {
        assert_eq!(
            data_url("", &[0xff]),
            "data:application/octet-stream;base64,/w=="
        );
    }
}
