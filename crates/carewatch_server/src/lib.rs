//! HTTP front end for Carewatch.
//!
//! Serves two static pages, the upload directory, and the `/upload` endpoint
//! that stores a video, labels it from its file name, and speaks an alert.
//!
//! # Routes
//!
//! | Method | Path                  | Purpose                          |
//! |--------|-----------------------|----------------------------------|
//! | GET    | `/`                   | Home page                        |
//! | GET    | `/prediction`         | Upload page                      |
//! | GET    | `/uploads/{filename}` | Stored video or alert audio      |
//! | POST   | `/upload`             | Label a video and speak an alert |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod error;
mod observability;
mod pages;
mod server;
mod state;

pub use api::{create_router, UploadResponse};
pub use config::{CarewatchConfig, ServerSettings, StorageSettings};
pub use error::ApiError;
pub use observability::{init_logging, LoggingConfig};
pub use server::serve;
pub use state::AppState;
