//! End-to-end tests for the HTTP surface.

use carewatch_core::{Labeler, VOCABULARY};
use carewatch_server::{create_router, AppState, UploadResponse};
use carewatch_speech::{SpeechEngine, SynthesisError, SynthesisErrorKind};
use carewatch_storage::UploadDirectory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Writes the sentence itself as the audio.
struct TextEngine;

#[async_trait::async_trait]
impl SpeechEngine for TextEngine {
    fn name(&self) -> &str {
        "text"
    }

    async fn render(&self, text: &str, output: &Path) -> Result<(), SynthesisError> {
        tokio::fs::write(output, text.as_bytes())
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Output(e.to_string())))
    }
}

/// Behaves like a host without a speech program.
struct MissingEngine;

#[async_trait::async_trait]
impl SpeechEngine for MissingEngine {
    fn name(&self) -> &str {
        "missing"
    }

    async fn render(&self, _text: &str, _output: &Path) -> Result<(), SynthesisError> {
        Err(SynthesisError::new(SynthesisErrorKind::EngineUnavailable(
            "espeak-ng: No such file or directory".to_string(),
        )))
    }
}

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    temp_dir: TempDir,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn uploads(&self) -> &Path {
        self.temp_dir.path()
    }
}

async fn spawn_server(engine: Arc<dyn SpeechEngine>, max_upload_bytes: u64) -> TestServer {
    let temp_dir = TempDir::new().unwrap();
    let uploads = UploadDirectory::new(temp_dir.path()).unwrap();
    let state = AppState::new(uploads, Labeler::with_rng(StdRng::seed_from_u64(3)), engine)
        .with_max_upload_bytes(max_upload_bytes);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let router = create_router(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", address),
        client: reqwest::Client::new(),
        temp_dir,
    }
}

fn video_form(file_name: &str, data: &[u8]) -> Form {
    Form::new().part(
        "video",
        Part::bytes(data.to_vec())
            .file_name(file_name.to_string())
            .mime_str("video/mp4")
            .unwrap(),
    )
}

#[tokio::test]
async fn test_upload_fall_incident() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("fall_incident.mp4", b"fake video"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: UploadResponse = response.json().await.unwrap();
    assert_eq!(
        body,
        UploadResponse {
            video_name: "fall_incident.mp4".to_string(),
            behaviors: "fall".to_string(),
            voice_message: "Alert! The patient has fallen.".to_string(),
            audio_url: "/uploads/alert.mp3".to_string(),
        }
    );

    assert_eq!(
        std::fs::read(server.uploads().join("fall_incident.mp4")).unwrap(),
        b"fake video"
    );
}

#[tokio::test]
async fn test_uploaded_files_are_served() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;
    server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("seizure_and_attack.mp4", b"clip"))
        .send()
        .await
        .unwrap();

    let audio = server.client.get(server.url("/uploads/alert.mp3")).send().await.unwrap();
    assert_eq!(audio.status(), StatusCode::OK);
    assert_eq!(audio.headers()["content-type"], "audio/mpeg");
    assert_eq!(
        audio.text().await.unwrap(),
        "Emergency! Someone is attacking the patient."
    );

    let video = server
        .client
        .get(server.url("/uploads/seizure_and_attack.mp4"))
        .send()
        .await
        .unwrap();
    assert_eq!(video.status(), StatusCode::OK);
    assert_eq!(video.headers()["content-type"], "video/mp4");
    assert_eq!(video.bytes().await.unwrap().as_ref(), b"clip");
}

#[tokio::test]
async fn test_unmatched_name_gets_random_labels() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("cam2_0815.mp4", b"clip"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: UploadResponse = response.json().await.unwrap();
    let labels: Vec<&str> = body.behaviors.split(", ").collect();
    assert!((1..=3).contains(&labels.len()));
    for label in labels {
        assert!(VOCABULARY.iter().any(|v| v.as_str() == label), "{label}");
    }
}

#[tokio::test]
async fn test_missing_video_field() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(Form::new().text("comment", "no video here"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "No file uploaded"}));
}

#[tokio::test]
async fn test_non_multipart_request_is_missing_file() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let response = server.client.post(server.url("/upload")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "No file uploaded"}));
}

#[tokio::test]
async fn test_synthesis_failure_is_500() {
    let server = spawn_server(Arc::new(MissingEngine), 1024 * 1024).await;

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("fall_incident.mp4", b"clip"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Speech engine unavailable"));
    assert!(!server.uploads().join("alert.mp3").exists());
}

#[tokio::test]
async fn test_upload_name_traversal_is_rejected() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("../escape_fall.mp4", b"clip"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>().await.unwrap()["error"].is_string());
    assert!(!server.uploads().parent().unwrap().join("escape_fall.mp4").exists());
}

#[tokio::test]
async fn test_download_traversal_is_rejected() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let encoded = server
        .client
        .get(server.url("/uploads/..%2F..%2Fetc%2Fpasswd"))
        .send()
        .await
        .unwrap();
    assert_eq!(encoded.status(), StatusCode::BAD_REQUEST);

    // Clients normalize the literal form before sending; it must not resolve either.
    let literal = server
        .client
        .get(server.url("/uploads/../../etc/passwd"))
        .send()
        .await
        .unwrap();
    assert_eq!(literal.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_upload_is_404() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    let response = server
        .client
        .get(server.url("/uploads/never_uploaded.mp4"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.json::<Value>().await.unwrap()["error"].is_string());
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let server = spawn_server(Arc::new(TextEngine), 1024).await;

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("fall.mp4", &vec![0u8; 8 * 1024]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!server.uploads().join("fall.mp4").exists());
    // The partially received body was discarded.
    assert_eq!(std::fs::read_dir(server.uploads()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_pages_render() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;

    for path in ["/", "/prediction"] {
        let response = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(response.text().await.unwrap().contains("Carewatch"));
    }

    let unknown = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_large_video_streams_both_ways() {
    let server = spawn_server(Arc::new(TextEngine), 4 * 1024 * 1024).await;
    let video: Vec<u8> = (0..1024 * 1024 + 17).map(|i| (i % 251) as u8).collect();

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form("wandering_hallway.mp4", &video))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: UploadResponse = response.json().await.unwrap();
    assert_eq!(body.behaviors, "wandering");

    let download = server
        .client
        .get(server.url("/uploads/wandering_hallway.mp4"))
        .send()
        .await
        .unwrap();
    assert_eq!(download.status(), StatusCode::OK);
    assert_eq!(
        download.headers()["content-length"],
        video.len().to_string().as_str()
    );
    assert_eq!(download.bytes().await.unwrap().as_ref(), video.as_slice());

    // Only the video and the alert; no staging files.
    assert_eq!(std::fs::read_dir(server.uploads()).unwrap().count(), 2);
}

#[tokio::test]
async fn test_long_file_name_is_accepted() {
    let server = spawn_server(Arc::new(TextEngine), 1024 * 1024).await;
    let name = format!("fall_{}.mp4", "a".repeat(241));

    let response = server
        .client
        .post(server.url("/upload"))
        .multipart(video_form(&name, b"clip"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: UploadResponse = response.json().await.unwrap();
    assert_eq!(body.video_name, name);
    assert_eq!(body.behaviors, "fall");
}
