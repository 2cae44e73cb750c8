//! Upload request error types.

/// Kinds of upload request errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// The request carried no `video` field
    #[display("No file uploaded")]
    MissingFile,
    /// The request body exceeded the configured limit of this many bytes
    #[display("Upload exceeds the {} byte limit", _0)]
    TooLarge(u64),
    /// The multipart body could not be read
    #[display("Malformed upload: {}", _0)]
    Multipart(String),
}

/// Upload error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
