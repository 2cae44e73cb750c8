//! Flat upload directory.

use crate::{media_type, validate_file_name};
use carewatch_error::{CarewatchResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// A file held in the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name the file is stored under
    pub name: String,
    /// Location on disk
    pub path: PathBuf,
    /// Size in bytes
    pub size_bytes: u64,
    /// MIME type to serve the file with
    pub mime_type: &'static str,
}

impl StoredFile {
    fn new(name: &str, path: PathBuf, size_bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            path,
            size_bytes,
            mime_type: media_type::mime_type_for(name),
        }
    }
}

/// A single flat folder of uploads and generated audio.
///
/// Files are stored under the name the client supplied. A later store with
/// the same name replaces the earlier file. Writes go to a uniquely named
/// staging file first and are renamed into place, so readers never observe a
/// half-written file.
#[derive(Debug, Clone)]
pub struct UploadDirectory {
    root: PathBuf,
}

impl UploadDirectory {
    /// Open the upload directory, creating it if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(root))]
    pub fn new(root: impl Into<PathBuf>) -> CarewatchResult<Self> {
        let root = root.into();

        std::fs::create_dir_all(&root).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                root.display(),
                e
            )))
        })?;

        tracing::info!(path = %root.display(), "Opened upload directory");
        Ok(Self { root })
    }

    /// Root of the directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a client-supplied name to its path inside the directory.
    ///
    /// This is the only place names are turned into paths.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for names that could leave the directory.
    pub fn resolve(&self, name: &str) -> CarewatchResult<PathBuf> {
        let name = validate_file_name(name)?;
        Ok(self.root.join(name))
    }

    /// Create an empty staging file that [`StagedFile::commit`] later moves
    /// onto `name`.
    ///
    /// The staging name is independent of `name`, so any name the filesystem
    /// accepts can be staged.
    #[tracing::instrument(skip(self))]
    pub async fn stage(&self, name: &str) -> CarewatchResult<StagedFile> {
        let target = self.resolve(name)?;
        let path = self
            .root
            .join(format!(".{}.tmp", Uuid::new_v4().simple()));

        let file = tokio::fs::File::create(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Ok(StagedFile {
            name: name.to_string(),
            path,
            target,
            file: Some(file),
            committed: false,
        })
    }

    /// Store `data` under `name`, replacing any file already there.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn store(&self, name: &str, data: &[u8]) -> CarewatchResult<StoredFile> {
        let mut staged = self.stage(name).await?;
        staged.write_chunk(data).await?;
        staged.commit().await
    }

    /// Open the file stored under `name` for streaming.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no regular file exists under `name` and
    /// `InvalidPath` if the name is rejected.
    #[tracing::instrument(skip(self))]
    pub async fn open(&self, name: &str) -> CarewatchResult<(StoredFile, tokio::fs::File)> {
        let path = self.resolve(name)?;

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => return Err(not_found(name).into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(not_found(name).into());
            }
            Err(e) => return Err(read_error(&path, e).into()),
        };

        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|e| read_error(&path, e))?;

        tracing::debug!(path = %path.display(), size = metadata.len(), "Opened file");
        Ok((StoredFile::new(name, path, metadata.len()), file))
    }

    /// Whether a file is stored under `name`.
    pub async fn exists(&self, name: &str) -> CarewatchResult<bool> {
        let path = self.resolve(name)?;
        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| read_error(&path, e))?;
        Ok(exists)
    }
}

fn not_found(name: &str) -> StorageError {
    StorageError::new(StorageErrorKind::NotFound(name.to_string()))
}

fn read_error(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::new(StorageErrorKind::FileRead(format!(
        "{}: {}",
        path.display(),
        e
    )))
}

/// A file being written into the upload directory.
///
/// Dropping it without [`commit`](Self::commit) removes the staging file, so
/// failed writes leave nothing behind.
#[derive(Debug)]
pub struct StagedFile {
    name: String,
    path: PathBuf,
    target: PathBuf,
    file: Option<tokio::fs::File>,
    committed: bool,
}

impl StagedFile {
    /// Location of the staging file.
    ///
    /// External writers may replace its content before commit.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `data` to the staging file.
    pub async fn write_chunk(&mut self, data: &[u8]) -> CarewatchResult<()> {
        let path = &self.path;
        let file = match self.file.as_mut() {
            Some(file) => file,
            None => {
                return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: already closed",
                    path.display()
                )))
                .into());
            }
        };

        file.write_all(data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(())
    }

    /// Atomically move the staged content onto its target name, replacing
    /// any previous file.
    #[tracing::instrument(skip(self), fields(name = %self.name))]
    pub async fn commit(mut self) -> CarewatchResult<StoredFile> {
        if let Some(mut file) = self.file.take() {
            file.flush().await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;
        }

        tokio::fs::rename(&self.path, &self.target)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "rename {} to {}: {}",
                    self.path.display(),
                    self.target.display(),
                    e
                )))
            })?;
        self.committed = true;

        let size_bytes = tokio::fs::metadata(&self.target)
            .await
            .map(|m| m.len())
            .map_err(|e| read_error(&self.target, e))?;

        tracing::info!(
            path = %self.target.display(),
            size = size_bytes,
            "Stored file"
        );
        Ok(StoredFile::new(&self.name, self.target.clone(), size_bytes))
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Close before removing.
        self.file.take();
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staging file");
            }
        }
    }
}
