//! Speech engine seam.

use carewatch_error::SynthesisError;
use std::path::Path;

/// Renders text to an audio file.
///
/// Each call owns whatever engine resources it needs and releases them before
/// returning, whether or not rendering succeeded. Implementations must not keep
/// engine state between calls.
#[async_trait::async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Engine name for logs.
    fn name(&self) -> &str;

    /// Render `text` as speech into `output`, creating or replacing it.
    async fn render(&self, text: &str, output: &Path) -> Result<(), SynthesisError>;
}
