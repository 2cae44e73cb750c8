//! Upload API.

use crate::{pages, ApiError, AppState};
use axum::{
    body::{Body, Bytes},
    extract::{
        multipart::{Field, Multipart, MultipartError, MultipartRejection},
        DefaultBodyLimit, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use carewatch_error::{UploadError, UploadErrorKind};
use carewatch_storage::{StoredFile, UploadDirectory};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;
use tokio_stream::Stream;

/// Multipart field carrying the video.
const VIDEO_FIELD: &str = "video";

/// Read size when streaming a stored file back out.
const DOWNLOAD_CHUNK_BYTES: usize = 64 * 1024;

/// Body returned by a successful `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// File name the video was stored under
    pub video_name: String,
    /// Labels joined with `", "`
    pub behaviors: String,
    /// Sentence that was spoken
    pub voice_message: String,
    /// Where to fetch the alert audio
    pub audio_url: String,
}

/// Creates the service router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = usize::try_from(*state.max_upload_bytes()).unwrap_or(usize::MAX);

    Router::new()
        .route("/", get(pages::home))
        .route("/prediction", get(pages::prediction))
        .route("/uploads/:filename", get(serve_upload))
        .route("/upload", post(upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Serve a stored upload or the alert audio.
#[tracing::instrument(skip(state))]
async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let (stored, file) = state.uploads().open(&filename).await?;

    Ok((
        [
            (header::CONTENT_TYPE, stored.mime_type.to_string()),
            (header::CONTENT_LENGTH, stored.size_bytes.to_string()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        Body::from_stream(file_chunks(file)),
    )
        .into_response())
}

fn file_chunks(mut file: tokio::fs::File) -> impl Stream<Item = std::io::Result<Bytes>> {
    async_stream::try_stream! {
        let mut buf = vec![0u8; DOWNLOAD_CHUNK_BYTES];
        loop {
            let read = file.read(&mut buf).await?;
            if read == 0 {
                break;
            }
            yield Bytes::copy_from_slice(&buf[..read]);
        }
    }
}

/// Store a video, label it and speak the alert.
#[tracing::instrument(skip_all)]
async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(%rejection, "Upload request is not multipart");
            return Err(ApiError::new(UploadError::new(UploadErrorKind::MissingFile)));
        }
    };

    let stored = receive_video(&mut multipart, state.uploads(), *state.max_upload_bytes()).await?;
    let labels = state.labeler().derive_labels(&stored.path);
    let alert = state.synthesizer().synthesize(&labels).await?;

    tracing::info!(
        video = %stored.name,
        behaviors = %labels,
        critical = alert.message().is_critical(),
        "Processed upload"
    );

    Ok(Json(UploadResponse {
        video_name: stored.name,
        behaviors: labels.joined(),
        voice_message: alert.text().clone(),
        audio_url: format!("/uploads/{}", alert.audio_file_name()),
    }))
}

/// Find the `video` file field and stream it into the upload directory.
///
/// Fields with other names, and a `video` field without a file name, are
/// skipped.
async fn receive_video(
    multipart: &mut Multipart,
    uploads: &UploadDirectory,
    limit: u64,
) -> Result<StoredFile, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        return stream_field(field, &file_name, uploads, limit).await;
    }

    Err(ApiError::new(UploadError::new(UploadErrorKind::MissingFile)))
}

/// Copy one field to disk chunk by chunk.
///
/// An error part way through drops the staged file, so nothing is left
/// under `file_name`'s slot except what was there before.
async fn stream_field(
    mut field: Field<'_>,
    file_name: &str,
    uploads: &UploadDirectory,
    limit: u64,
) -> Result<StoredFile, ApiError> {
    let mut staged = uploads.stage(file_name).await?;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        staged.write_chunk(&chunk).await?;
    }

    let stored = staged.commit().await?;
    tracing::debug!(file_name = %stored.name, size = stored.size_bytes, "Received video");
    Ok(stored)
}

fn multipart_error(err: MultipartError, limit: u64) -> ApiError {
    let kind = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadErrorKind::TooLarge(limit)
    } else {
        UploadErrorKind::Multipart(err.body_text())
    };
    ApiError::new(UploadError::new(kind))
}
