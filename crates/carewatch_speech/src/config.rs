//! Speech engine configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the external speech program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Program to run; must accept espeak-ng's `-w`, `-v`, `-s` and `--stdin`
    pub program: PathBuf,
    /// Voice name passed with `-v`
    #[serde(default)]
    pub voice: Option<String>,
    /// Speaking rate passed with `-s`
    #[serde(default)]
    pub words_per_minute: Option<u32>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("espeak-ng"),
            voice: None,
            words_per_minute: None,
        }
    }
}
