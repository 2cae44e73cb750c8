//! Speech synthesis error types.

/// Kinds of speech synthesis failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// The speech engine could not be started
    #[display("Speech engine unavailable: {}", _0)]
    EngineUnavailable(String),
    /// The speech engine ran but reported failure
    #[display("Speech engine failed: {}", _0)]
    EngineFailed(String),
    /// The rendered audio could not be written into place
    #[display("Failed to write alert audio: {}", _0)]
    Output(String),
}

/// Speech synthesis error with location tracking.
///
/// # Examples
///
/// ```
/// use carewatch_error::{SynthesisError, SynthesisErrorKind};
///
/// let err = SynthesisError::new(SynthesisErrorKind::EngineUnavailable("espeak-ng".into()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis Error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The kind of error that occurred
    pub kind: SynthesisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new synthesis error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
