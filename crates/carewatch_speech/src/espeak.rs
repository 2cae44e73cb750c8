//! espeak-ng backed speech engine.

use crate::{SpeechConfig, SpeechEngine};
use carewatch_error::{SynthesisError, SynthesisErrorKind};
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Speech engine that runs an `espeak-ng` compatible program per render.
///
/// The child process is killed if the render future is dropped early, so no
/// engine outlives the call that started it.
#[derive(Debug, Clone)]
pub struct EspeakEngine {
    config: SpeechConfig,
}

impl EspeakEngine {
    /// Create an engine from configuration.
    pub fn new(config: SpeechConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    fn command(&self, output: &Path) -> Command {
        let mut command = Command::new(&self.config.program);
        if let Some(voice) = &self.config.voice {
            command.arg("-v").arg(voice);
        }
        if let Some(wpm) = self.config.words_per_minute {
            command.arg("-s").arg(wpm.to_string());
        }
        command
            .arg("-w")
            .arg(output)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait::async_trait]
impl SpeechEngine for EspeakEngine {
    fn name(&self) -> &str {
        "espeak"
    }

    #[tracing::instrument(skip(self, text, output), fields(program = %self.config.program.display()))]
    async fn render(&self, text: &str, output: &Path) -> Result<(), SynthesisError> {
        let mut child = self.command(output).spawn().map_err(|e| {
            SynthesisError::new(SynthesisErrorKind::EngineUnavailable(format!(
                "{}: {}",
                self.config.program.display(),
                e
            )))
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A failed write surfaces below as a non-zero exit.
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                tracing::warn!(error = %e, "Failed to send text to speech engine");
            }
        }

        let result = child.wait_with_output().await.map_err(|e| {
            SynthesisError::new(SynthesisErrorKind::EngineFailed(format!(
                "waiting for {}: {}",
                self.config.program.display(),
                e
            )))
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(SynthesisError::new(SynthesisErrorKind::EngineFailed(
                format!("{} ({})", result.status, stderr.trim()),
            )));
        }

        let written = match tokio::fs::metadata(output).await {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => {
                return Err(SynthesisError::new(SynthesisErrorKind::Output(format!(
                    "{}: {}",
                    output.display(),
                    e
                ))));
            }
        };
        if written == 0 {
            return Err(SynthesisError::new(SynthesisErrorKind::EngineFailed(
                format!("no audio written to {}", output.display()),
            )));
        }

        tracing::debug!(output = %output.display(), "Speech rendered");
        Ok(())
    }
}
