//! Top-level error wrapper types.

use crate::{ConfigError, ServerError, StorageError, SynthesisError, UploadError};

/// Every error a Carewatch operation can produce.
///
/// # Examples
///
/// ```
/// use carewatch_error::{CarewatchError, CarewatchErrorKind, ConfigError};
///
/// let err: CarewatchError = ConfigError::new("bad port").into();
/// assert!(matches!(err.kind(), CarewatchErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CarewatchErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Upload directory error
    #[from(StorageError)]
    Storage(StorageError),
    /// Speech synthesis error
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Upload request error
    #[from(UploadError)]
    Upload(UploadError),
    /// HTTP server lifecycle error
    #[from(ServerError)]
    Server(ServerError),
}

/// Carewatch error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Carewatch Error: {}", _0)]
pub struct CarewatchError(Box<CarewatchErrorKind>);

impl CarewatchError {
    /// Create a new error from a kind.
    pub fn new(kind: CarewatchErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CarewatchErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CarewatchErrorKind
impl<T> From<T> for CarewatchError
where
    T: Into<CarewatchErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Carewatch operations.
pub type CarewatchResult<T> = std::result::Result<T, CarewatchError>;
