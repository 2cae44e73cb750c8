//! Shared request state.

use crate::CarewatchConfig;
use carewatch_core::Labeler;
use carewatch_error::CarewatchResult;
use carewatch_speech::{AlertSynthesizer, EspeakEngine, SpeechEngine};
use carewatch_storage::UploadDirectory;
use derive_getters::Getters;
use std::sync::Arc;

/// Default request body limit (512 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 512 * 1024 * 1024;

/// Components shared by all request handlers.
#[derive(Debug, Clone, Getters)]
pub struct AppState {
    /// Flat directory for uploads and alert audio
    uploads: UploadDirectory,
    /// Filename labeler
    labeler: Arc<Labeler>,
    /// Alert synthesizer writing into `uploads`
    synthesizer: AlertSynthesizer,
    /// Largest accepted request body in bytes
    max_upload_bytes: u64,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(uploads: UploadDirectory, labeler: Labeler, engine: Arc<dyn SpeechEngine>) -> Self {
        let synthesizer = AlertSynthesizer::new(engine, uploads.clone());
        Self {
            uploads,
            labeler: Arc::new(labeler),
            synthesizer,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Override the request body limit.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: u64) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Build state from configuration, creating the upload directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload directory cannot be created.
    pub fn from_config(config: &CarewatchConfig) -> CarewatchResult<Self> {
        let uploads = UploadDirectory::new(&config.storage.upload_dir)?;
        let engine = Arc::new(EspeakEngine::new(config.speech.clone()));
        Ok(Self::new(uploads, Labeler::new(), engine)
            .with_max_upload_bytes(config.server.max_upload_bytes))
    }
}
