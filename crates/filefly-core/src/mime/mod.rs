//! Extension-based MIME dispatch for received files.
//!
//! The viewer handoff only needs enough typing for the platform to pick
//! an application, so the mapping is a fixed extension table rather than
//! content sniffing. Unknown extensions fall through to the wildcard and
//! let the user choose the application.

use std::path::{Path, PathBuf};

/// MIME type used when the extension is not in the table.
pub const WILDCARD_MIME: &str = "*/*";

/// Map a file extension (without the dot, any case) to a MIME type.
#[must_use]
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "doc" | "docx" => "application/msword",
        "pdf" => "application/pdf",
        "ppt" | "pptx" => "application/vnd.ms-powerpoint",
        "xls" | "xlsx" => "application/vnd.ms-excel",
        "zip" | "rar" => "application/zip",
        "rtf" => "application/rtf",
        "wav" | "mp3" => "audio/x-wav",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "txt" => "text/plain",
        "3gp" | "mpg" | "mpeg" | "mpe" | "mp4" | "avi" => "video/*",
        _ => WILDCARD_MIME,
    }
}

/// Map a file path to a MIME type by its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(WILDCARD_MIME, mime_for_extension)
}

/// A request to open a file with an appropriate viewer application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// File to open
    pub path: PathBuf,
    /// MIME type derived from the file's extension
    pub mime: &'static str,
}

impl ViewRequest {
    /// Build a view request for the given file.
    #[must_use]
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mime = mime_for_path(&path);
        Self { path, mime }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_for_extension("pdf"), "application/pdf");
        assert_eq!(mime_for_extension("doc"), "application/msword");
        assert_eq!(mime_for_extension("docx"), "application/msword");
        assert_eq!(mime_for_extension("pptx"), "application/vnd.ms-powerpoint");
        assert_eq!(mime_for_extension("xls"), "application/vnd.ms-excel");
        assert_eq!(mime_for_extension("rar"), "application/zip");
        assert_eq!(mime_for_extension("rtf"), "application/rtf");
        assert_eq!(mime_for_extension("mp3"), "audio/x-wav");
        assert_eq!(mime_for_extension("gif"), "image/gif");
        assert_eq!(mime_for_extension("jpeg"), "image/jpeg");
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("txt"), "text/plain");
        assert_eq!(mime_for_extension("mp4"), "video/*");
    }

    #[test]
    fn test_unknown_extension_is_wildcard() {
        assert_eq!(mime_for_extension("xyz"), WILDCARD_MIME);
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(mime_for_extension("PDF"), "application/pdf");
        assert_eq!(mime_for_extension("Jpg"), "image/jpeg");
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(
            mime_for_path(Path::new("/data/received/report.pdf")),
            "application/pdf"
        );
        assert_eq!(mime_for_path(Path::new("/data/received/noext")), WILDCARD_MIME);
    }

    #[test]
    fn test_view_request() {
        let request = ViewRequest::for_file("/data/received/report.pdf");
        assert_eq!(request.mime, "application/pdf");
        assert_eq!(request.path, PathBuf::from("/data/received/report.pdf"));
    }
}
