use photodeck::api::{DeckApi, MessageLevel};
use photodeck::capture::CaptureSource;
use photodeck::catalog::Catalog;
use photodeck::error::DeckError;
use photodeck::model::{DataUri, PhotoRecord};
use photodeck::naming::SequenceNamer;
use photodeck::store::memory::{MemFileStore, MemPreferenceStore};
use photodeck::upload::UploadClient;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> UploadClient {
    UploadClient::new(
        format!("{}/images/upload", server.uri()),
        "file",
        Duration::from_secs(5),
    )
    .unwrap()
}

fn record() -> PhotoRecord {
    PhotoRecord::persisted(
        "1000",
        PathBuf::from("stored-images/1000.jpeg"),
        DataUri::encode("image/jpeg", b"JPEGDATA"),
    )
}

#[tokio::test]
async fn posts_single_multipart_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/images/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client(&server).upload(&record()).await.unwrap();
    assert!(receipt.success);
    assert_eq!(receipt.file_name, "1000.jpeg");
    assert_eq!(receipt.bytes, 8);

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"1000.jpeg\""));
    assert!(body.contains("image/jpeg"));
    assert!(body.contains("JPEGDATA"));
}

#[tokio::test]
async fn endpoint_can_report_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let receipt = client(&server).upload(&record()).await.unwrap();
    assert!(!receipt.success);
}

#[tokio::test]
async fn server_error_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    match client(&server).upload(&record()).await {
        Err(DeckError::UploadRejected { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn upload_command_reports_each_photo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(2)
        .mount(&server)
        .await;

    let mut catalog = Catalog::new(MemFileStore::new(), MemPreferenceStore::new())
        .with_namer(SequenceNamer::starting_at(1000));
    catalog
        .add(CaptureSource::CameraCapture(b"one".to_vec()))
        .await
        .unwrap();
    catalog
        .add(CaptureSource::CameraCapture(b"two".to_vec()))
        .await
        .unwrap();
    let mut api = DeckApi::new(catalog, client(&server), PathBuf::from("/unused"));

    let result = api.upload_photos(&["1", "2"]).await.unwrap();
    assert_eq!(result.affected_photos.len(), 2);
    assert!(result
        .messages
        .iter()
        .all(|m| m.level == MessageLevel::Success));
    assert_eq!(result.messages[0].content, "File upload complete: 1000.jpeg");
}

#[tokio::test]
async fn upload_command_turns_rejection_into_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let mut catalog = Catalog::new(MemFileStore::new(), MemPreferenceStore::new());
    catalog
        .add(CaptureSource::FileSelection(b"x".to_vec()))
        .await
        .unwrap();
    let mut api = DeckApi::new(catalog, client(&server), PathBuf::from("/unused"));

    let result = api.upload_photos(&["1"]).await.unwrap();
    assert!(result.has_errors());
    assert!(result.messages[0].content.starts_with("File upload failed"));
    // The catalog is never touched by an upload
    assert_eq!(api.catalog().images().len(), 1);
}
