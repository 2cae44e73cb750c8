//! Error types for Carewatch.
//!
//! This crate provides the error types shared by every Carewatch crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use carewatch_error::{CarewatchResult, UploadError, UploadErrorKind};
//!
//! fn read_upload() -> CarewatchResult<Vec<u8>> {
//!     Err(UploadError::new(UploadErrorKind::MissingFile))?
//! }
//!
//! assert!(read_upload().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod server;
mod storage;
mod synthesis;
mod upload;

pub use config::ConfigError;
pub use error::{CarewatchError, CarewatchErrorKind, CarewatchResult};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
pub use upload::{UploadError, UploadErrorKind};
