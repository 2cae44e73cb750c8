//! Layered service configuration.

use carewatch_error::{CarewatchResult, ConfigError};
use carewatch_speech::SpeechConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../carewatch.toml");

/// Complete service configuration.
///
/// Sources in order of precedence (later sources override earlier):
/// 1. Bundled defaults (`carewatch.toml` shipped with the crate)
/// 2. `./carewatch.toml` if present, or the file given explicitly
/// 3. `CAREWATCH__<SECTION>__<KEY>` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarewatchConfig {
    /// HTTP listener settings
    pub server: ServerSettings,
    /// Upload directory settings
    pub storage: StorageSettings,
    /// Speech engine settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on
    pub bind: String,
    /// Largest accepted request body in bytes
    pub max_upload_bytes: u64,
}

/// Upload directory settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding uploads and the alert audio
    pub upload_dir: PathBuf,
}

impl CarewatchConfig {
    /// The bundled defaults alone.
    pub fn defaults() -> CarewatchResult<Self> {
        Self::build(Self::base())
    }

    /// Load configuration, reading `path` if given and `./carewatch.toml`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing or any source
    /// fails to parse.
    pub fn load(path: Option<&Path>) -> CarewatchResult<Self> {
        let builder = match path {
            Some(path) => Self::base().add_source(File::from(path).format(FileFormat::Toml)),
            None => Self::base().add_source(File::with_name("carewatch").required(false)),
        };

        let builder = builder.add_source(
            Environment::with_prefix("CAREWATCH")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    fn base() -> ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<config::builder::DefaultState>) -> CarewatchResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        if config.server.max_upload_bytes == 0 {
            return Err(ConfigError::new("server.max_upload_bytes must be positive").into());
        }
        Ok(config)
    }
}
