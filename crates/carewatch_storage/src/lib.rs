//! Upload storage for Carewatch.
//!
//! Uploaded videos and the generated alert audio live side by side in one flat
//! directory. Files are keyed by their client-supplied name, so every name
//! passes through [`UploadDirectory::resolve`] before it touches the
//! filesystem.
//!
//! # Example
//!
//! ```rust
//! use carewatch_storage::UploadDirectory;
//! use tokio::io::AsyncReadExt;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let uploads = UploadDirectory::new("/tmp/carewatch-uploads")?;
//!
//! let stored = uploads.store("fall_incident.mp4", b"not really a video").await?;
//! assert_eq!(stored.mime_type, "video/mp4");
//!
//! let (file, mut reader) = uploads.open("fall_incident.mp4").await?;
//! let mut data = Vec::new();
//! reader.read_to_end(&mut data).await?;
//! assert_eq!(file.size_bytes, 18);
//! assert_eq!(data, b"not really a video");
//!
//! // Anything that could escape the directory is refused.
//! assert!(uploads.resolve("../etc/passwd").is_err());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod directory;
mod media_type;
mod path;

pub use carewatch_error::{StorageError, StorageErrorKind};
pub use directory::{StagedFile, StoredFile, UploadDirectory};
pub use media_type::{mime_type_for, OCTET_STREAM};
pub use path::validate_file_name;
