//! Endpoint contract tests against a mock extraction server.

use std::time::Duration;

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use extractor_client::api::v1::upload::FileUpload;
use extractor_client::api::{ApiClient, ApiConfig, ApiError};
use extractor_client::models::TaskState;

fn client_for(server: &MockServer) -> ApiClient {
    let remote = Url::parse(&server.uri()).unwrap();
    ApiClient::new(&remote).unwrap()
}

#[tokio::test]
async fn test_upload_posts_one_multipart_field_per_file_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "abc123",
            "status": "pending",
            "total_files": 2,
            "message": "files uploaded successfully, processing started"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let files = vec![
        FileUpload::new("a.pdf", b"first".to_vec()),
        FileUpload::new("b.docx", b"second".to_vec()),
    ];
    let response = client.upload_files(files).await.unwrap();

    assert_eq!(response.task_id, "abc123");
    assert_eq!(response.status, TaskState::Pending);
    assert_eq!(response.total_files, 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    // one `files` part per file, input order preserved
    let body = String::from_utf8_lossy(&requests[0].body);
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    let first = body.find("filename=\"a.pdf\"").unwrap();
    let second = body.find("filename=\"b.docx\"").unwrap();
    assert!(first < second);
    assert!(body.contains("first"));
    assert!(body.contains("second"));
}

#[tokio::test]
async fn test_upload_parts_carry_guessed_mime_types() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "t1",
            "status": "pending",
            "total_files": 1,
            "message": "ok"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .upload_files(vec![FileUpload::new("contract.pdf", b"%PDF-1.4".to_vec())])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("application/pdf"));
}

#[tokio::test]
async fn test_task_status_hits_exact_path_with_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "abc123",
            "status": "processing",
            "progress": 50.0,
            "total_files": 2,
            "processed": 1,
            "failed": 0,
            "result_path": "",
            "created_at": "2025-01-01 12:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.task_status("abc123").await.unwrap();

    assert_eq!(status.task_id, "abc123");
    assert_eq!(status.status, TaskState::Processing);
    assert_eq!(status.progress, 50.0);
    assert!(status.completed_at.is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_task_results_hits_exact_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/abc123/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "extraction completed",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client.task_results("abc123").await.unwrap();

    assert!(results.success);
    assert_eq!(results.message, "extraction completed");
    assert!(results.results.is_empty());
}

#[tokio::test]
async fn test_download_returns_body_verbatim() {
    // deliberately not valid JSON: the download path must never parse
    let blob: Vec<u8> = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff, 0x01];

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/abc123/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(blob.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client.download_result("abc123").await.unwrap();

    assert_eq!(bytes.as_ref(), blob.as_slice());
}

#[tokio::test]
async fn test_health_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "healthy",
            "service": "contract-key-extractor"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "contract-key-extractor");
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/missing"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"error":"task not found"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.task_status("missing").await.unwrap_err();

    match err {
        ApiError::HttpStatus(status, body) => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("task not found"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_statuses_surface_on_every_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"no files uploaded"}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/t1/download"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"task not completed yet"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.upload_files(Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::HttpStatus(status, _) if status.as_u16() == 400));

    let err = client.download_result("t1").await.unwrap_err();
    match err {
        ApiError::HttpStatus(status, body) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("not completed"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_server_trips_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/t1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let remote = Url::parse(&server.uri()).unwrap();
    let config = ApiConfig {
        timeout: Duration::from_millis(200),
    };
    let client = ApiClient::with_config(&remote, &config).unwrap();

    let err = client.task_status("t1").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // reserve a port, then drop the server so nothing listens on it
    // (a pooled server from MockServer::start() keeps listening after drop)
    let server = MockServer::builder().start().await;
    let remote = Url::parse(&server.uri()).unwrap();
    drop(server);

    let client = ApiClient::new(&remote).unwrap();
    let err = client.task_status("t1").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/task/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task_id": "t1",
            "status": "pending",
            "progress": 0.0,
            "total_files": 1,
            "processed": 0,
            "failed": 0,
            "result_path": "",
            "created_at": "2025-01-01 12:00:00"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (a, b) = tokio::join!(client.task_status("t1"), client.task_status("t1"));

    assert_eq!(a.unwrap().status, TaskState::Pending);
    assert_eq!(b.unwrap().status, TaskState::Pending);
}
