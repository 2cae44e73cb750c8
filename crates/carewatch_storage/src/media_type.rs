//! MIME type inference from file extensions.

use std::path::Path;

/// Content type served for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

const MIME_TABLE: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// MIME type to serve for a file name, by case-insensitive extension.
///
/// # Examples
///
/// ```
/// use carewatch_storage::mime_type_for;
///
/// assert_eq!(mime_type_for("fall.MP4"), "video/mp4");
/// assert_eq!(mime_type_for("notes.txt"), "application/octet-stream");
/// ```
pub fn mime_type_for(name: &str) -> &'static str {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| {
            MIME_TABLE
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(OCTET_STREAM)
}
