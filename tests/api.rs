use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use voting_backend::db::connection::StorageBackend;
use voting_backend::db::memory_store::MemoryStore;
use voting_backend::db::null_store::NullStore;
use voting_backend::routes;
use voting_backend::state::AppState;

fn test_app() -> Router {
    routes::app(AppState::new(
        Arc::new(MemoryStore::default()),
        StorageBackend::Memory,
    ))
}

async fn post_vote(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/vote")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn vote_then_results() {
    let app = test_app();

    let (status, body) = post_vote(
        &app,
        json!({"voterName": "A", "voterEmail": "a@x.com", "vote": "casting"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    Uuid::parse_str(body["voteId"].as_str().unwrap()).expect("voteId must be a uuid");

    let (status, results) = get_json(&app, "/api/results").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results, json!({"casting": 1, "nota": 0, "total": 1}));
}

#[tokio::test]
async fn resubmission_is_rejected_and_results_are_unchanged() {
    let app = test_app();

    post_vote(
        &app,
        json!({"voterName": "A", "voterEmail": "a@x.com", "vote": "casting"}),
    )
    .await;

    // Same participant, different option, noisier identity spelling.
    let (status, body) = post_vote(
        &app,
        json!({"voterName": " a ", "voterEmail": "A@X.COM", "vote": "nota"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().len() > 0);

    let (_, results) = get_json(&app, "/api/results").await;
    assert_eq!(results, json!({"casting": 1, "nota": 0, "total": 1}));
}

#[tokio::test]
async fn invalid_option_is_rejected_and_never_persisted() {
    let app = test_app();

    let (status, body) = post_vote(
        &app,
        json!({"voterName": "B", "voterEmail": "b@x.com", "vote": "invalid-option"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (_, results) = get_json(&app, "/api/results").await;
    assert_eq!(results, json!({"casting": 0, "nota": 0, "total": 0}));
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = test_app();

    for body in [
        json!({"voterEmail": "a@x.com", "vote": "casting"}),
        json!({"voterName": "A", "vote": "casting"}),
        json!({"voterName": "A", "voterEmail": "a@x.com"}),
        json!({"voterName": "  ", "voterEmail": "a@x.com", "vote": "casting"}),
    ] {
        let (status, response) = post_vote(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], json!(false));
    }

    let (_, results) = get_json(&app, "/api/results").await;
    assert_eq!(results["total"], json!(0));
}

#[tokio::test]
async fn caller_timestamp_is_advisory() {
    let app = test_app();

    // Garbage timestamps do not fail the submission; server time is used.
    let (status, _) = post_vote(
        &app,
        json!({
            "voterName": "A",
            "voterEmail": "a@x.com",
            "vote": "nota",
            "timestamp": "definitely-not-a-date"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, results) = get_json(&app, "/api/results").await;
    assert_eq!(results, json!({"casting": 0, "nota": 1, "total": 1}));
}

#[tokio::test]
async fn distinct_participants_accumulate() {
    let app = test_app();

    for (name, option) in [("A", "casting"), ("B", "casting"), ("C", "nota")] {
        let email = format!("{}@x.com", name.to_lowercase());
        let (status, _) = post_vote(
            &app,
            json!({"voterName": name, "voterEmail": email, "vote": option}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, results) = get_json(&app, "/api/results").await;
    assert_eq!(results, json!({"casting": 2, "nota": 1, "total": 3}));
}

#[tokio::test]
async fn health_reports_a_reachable_configured_backend() {
    let app = test_app();

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["storageConnected"], json!(true));
    assert_eq!(body["storageBackend"], json!("memory"));
}

#[tokio::test]
async fn null_storage_accepts_votes_but_holds_nothing() {
    let app = routes::app(AppState::new(Arc::new(NullStore), StorageBackend::Null));

    let (status, body) = post_vote(
        &app,
        json!({"voterName": "A", "voterEmail": "a@x.com", "vote": "casting"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (_, results) = get_json(&app, "/api/results").await;
    assert_eq!(results, json!({"casting": 0, "nota": 0, "total": 0}));

    let (_, health) = get_json(&app, "/health").await;
    assert_eq!(health["storageConnected"], json!(false));
    assert_eq!(health["storageBackend"], json!("null"));
}
