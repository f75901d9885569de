//! Fetch-path integration tests against a mock HTTP endpoint.
//!
//! Covers the failure taxonomy end to end: happy path, protocol errors,
//! mis-shaped payloads, and transport failures.

use slotwise_core::{Availability, SchedulerError};

const FIXTURE: &str = r#"{
    "days": [
        {"id": 1, "date": "2025-02-15", "start": "09:00", "end": "21:00"},
        {"id": 2, "date": "2025-02-16", "start": "08:00", "end": "22:00"}
    ],
    "timeslots": [
        {"id": 1, "day_id": 1, "start": "17:30", "end": "20:00"},
        {"id": 2, "day_id": 1, "start": "09:00", "end": "12:00"}
    ]
}"#;

async fn serve(status: usize, body: &str) -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
    (server, mock)
}

#[tokio::test]
async fn fetch_builds_queryable_engine() {
    let (server, mock) = serve(200, FIXTURE).await;

    let engine = Availability::fetch(&server.url()).await.unwrap();
    mock.assert_async().await;

    assert_eq!(engine.snapshot().days.len(), 2);
    assert_eq!(
        engine.free_slots("2025-02-15"),
        vec![
            ("12:00".to_string(), "17:30".to_string()),
            ("20:00".to_string(), "21:00".to_string()),
        ]
    );
    assert!(engine.is_available("2025-02-16", "10:00", "11:00"));
}

#[tokio::test]
async fn non_success_status_is_protocol_error() {
    let (server, _mock) = serve(500, "oops").await;

    let err = Availability::fetch(&server.url()).await.unwrap_err();
    assert!(matches!(err, SchedulerError::Protocol { status: 500 }));
}

#[tokio::test]
async fn not_found_status_carries_code() {
    let (server, _mock) = serve(404, "").await;

    let err = Availability::fetch(&server.url()).await.unwrap_err();
    assert!(matches!(err, SchedulerError::Protocol { status: 404 }));
}

#[tokio::test]
async fn malformed_json_is_data_shape_error() {
    let (server, _mock) = serve(200, "{not json").await;

    let err = Availability::fetch(&server.url()).await.unwrap_err();
    assert!(matches!(err, SchedulerError::DataShape(_)));
}

#[tokio::test]
async fn missing_field_is_data_shape_error() {
    // Timeslot without a day_id.
    let body = r#"{
        "days": [{"id": 1, "date": "2025-02-15", "start": "09:00", "end": "21:00"}],
        "timeslots": [{"id": 1, "start": "17:30", "end": "20:00"}]
    }"#;
    let (server, _mock) = serve(200, body).await;

    let err = Availability::fetch(&server.url()).await.unwrap_err();
    assert!(matches!(err, SchedulerError::DataShape(_)));
}

#[tokio::test]
async fn missing_top_level_array_is_data_shape_error() {
    let (server, _mock) = serve(200, r#"{"days": []}"#).await;

    let err = Availability::fetch(&server.url()).await.unwrap_err();
    assert!(matches!(err, SchedulerError::DataShape(_)));
}

#[tokio::test]
async fn bad_time_string_is_data_shape_error() {
    let body = r#"{
        "days": [{"id": 1, "date": "2025-02-15", "start": "9:00", "end": "21:00"}],
        "timeslots": []
    }"#;
    let (server, _mock) = serve(200, body).await;

    let err = Availability::fetch(&server.url()).await.unwrap_err();
    match err {
        SchedulerError::DataShape(msg) => assert!(msg.contains("day 1")),
        other => panic!("expected DataShape, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_connection_error() {
    // Nothing listens on the discard port.
    let err = Availability::fetch("http://127.0.0.1:9/")
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::Connection { .. }));
}

#[tokio::test]
async fn invalid_endpoint_url_is_rejected_without_a_request() {
    let err = Availability::fetch("not a url").await.unwrap_err();
    assert!(matches!(err, SchedulerError::DataShape(_)));
}
