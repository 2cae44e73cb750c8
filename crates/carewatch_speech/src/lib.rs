//! Spoken alerts for Carewatch.
//!
//! [`AlertSynthesizer`] chooses the alert sentence for a detection result and
//! renders it through a [`SpeechEngine`] into the fixed `alert.mp3` file of the
//! upload directory. The default engine, [`EspeakEngine`], runs an
//! `espeak-ng` compatible program once per alert.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod espeak;
mod synthesizer;

pub use carewatch_error::{SynthesisError, SynthesisErrorKind};
pub use config::SpeechConfig;
pub use engine::SpeechEngine;
pub use espeak::EspeakEngine;
pub use synthesizer::{AlertSynthesizer, SpokenAlert, ALERT_FILE_NAME};
