//! File name validation.

use carewatch_error::{StorageError, StorageErrorKind};

/// Check that `name` is a plain file name that stays inside the directory.
///
/// Rejects empty names, `.` and `..`, anything containing `..`, path
/// separators of either platform, and NUL bytes.
///
/// # Examples
///
/// ```
/// use carewatch_storage::validate_file_name;
///
/// assert!(validate_file_name("patient_fall_cam1.mp4").is_ok());
/// assert!(validate_file_name("../../etc/passwd").is_err());
/// assert!(validate_file_name("nested/clip.mp4").is_err());
/// ```
pub fn validate_file_name(name: &str) -> Result<&str, StorageError> {
    let reason = if name.is_empty() {
        Some("empty file name")
    } else if name == "." || name.contains("..") {
        Some("parent directory reference")
    } else if name.contains('/') || name.contains('\\') {
        Some("path separator")
    } else if name.contains('\0') {
        Some("NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
            "{:?}: {}",
            name, reason
        )))),
        None => Ok(name),
    }
}
