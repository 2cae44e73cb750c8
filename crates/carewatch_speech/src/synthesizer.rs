//! Alert selection and rendering.

use crate::SpeechEngine;
use carewatch_core::{AlertMessage, DetectionResult};
use carewatch_error::{CarewatchResult, SynthesisError, SynthesisErrorKind};
use carewatch_storage::{StoredFile, UploadDirectory};
use derive_getters::Getters;
use std::sync::Arc;

/// Fixed name of the alert audio in the upload directory.
pub const ALERT_FILE_NAME: &str = "alert.mp3";

/// An alert that was spoken and written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SpokenAlert {
    /// Which alert was chosen
    message: AlertMessage,
    /// The sentence that was rendered
    text: String,
    /// The written audio file
    audio: StoredFile,
}

impl SpokenAlert {
    /// File name of the audio within the upload directory.
    pub fn audio_file_name(&self) -> &str {
        &self.audio.name
    }
}

/// Turns detection results into a spoken alert file.
#[derive(Clone)]
pub struct AlertSynthesizer {
    engine: Arc<dyn SpeechEngine>,
    uploads: UploadDirectory,
}

impl std::fmt::Debug for AlertSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertSynthesizer")
            .field("engine", &self.engine.name())
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl AlertSynthesizer {
    /// Create a synthesizer writing into `uploads`.
    pub fn new(engine: Arc<dyn SpeechEngine>, uploads: UploadDirectory) -> Self {
        Self { engine, uploads }
    }

    /// Speak the highest-priority alert for `labels`.
    ///
    /// The audio replaces `alert.mp3` only once rendering has fully succeeded.
    /// On failure the previous alert file is left as it was.
    ///
    /// # Errors
    ///
    /// Returns a synthesis error if the engine is unavailable, fails, or the
    /// audio cannot be moved into place.
    #[tracing::instrument(skip(self, labels), fields(labels = %labels, engine = self.engine.name()))]
    pub async fn synthesize(&self, labels: &DetectionResult) -> CarewatchResult<SpokenAlert> {
        let message = AlertMessage::for_labels(labels);
        let text = message.text();

        // Dropping the staged file on any early return discards partial audio.
        let staged = self
            .uploads
            .stage(ALERT_FILE_NAME)
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Output(e.to_string())))?;
        self.engine.render(&text, staged.path()).await?;

        let audio = staged
            .commit()
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Output(e.to_string())))?;

        tracing::info!(
            critical = message.is_critical(),
            message = %text,
            size = audio.size_bytes,
            "Alert synthesized"
        );

        Ok(SpokenAlert {
            message,
            text,
            audio,
        })
    }
}
