mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::{Outcome, StubFactory};
use genie_gateway::startup::build_router;
use genie_gateway::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn router(factory: &Arc<StubFactory>) -> Router {
    build_router(AppState::new(factory.clone()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn not_found_envelope() -> Value {
    json!({ "error": "Genie space not found" })
}

#[tokio::test]
async fn found_space_is_returned_verbatim() {
    let space = json!({ "id": "abc123", "name": "Test Space" });
    let factory = StubFactory::new(Outcome::Found(space.clone()));

    let (status, body) = get(router(&factory), "/genie/get?space_id=abc123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), space);
    assert_eq!(factory.managers_built(), 1);
}

#[tokio::test]
async fn nested_fields_pass_through_unmodified() {
    let space = json!({
        "space_id": "s1",
        "title": "Sales",
        "table_identifiers": ["main.sales.orders", "main.sales.customers"],
        "serialized_space": null,
        "settings": { "sample_questions": [{ "question": ["Top customers?"] }] }
    });
    let factory = StubFactory::new(Outcome::Found(space.clone()));

    let (status, body) = get(router(&factory), "/genie/get?space_id=s1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), space);
}

#[tokio::test]
async fn absent_space_is_404_envelope() {
    let factory = StubFactory::new(Outcome::Absent);

    let (status, body) = get(router(&factory), "/genie/get?space_id=missing1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        not_found_envelope()
    );
}

#[tokio::test]
async fn does_not_exist_error_is_404_envelope() {
    let factory = StubFactory::new(Outcome::Fails("Space bad2 does not exist".to_string()));

    let (status, body) = get(router(&factory), "/genie/get?space_id=bad2").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        not_found_envelope()
    );
}

#[tokio::test]
async fn not_found_error_matches_regardless_of_case() {
    for message in ["Resource NOT FOUND", "space Not Found", "DOES NOT EXIST"] {
        let factory = StubFactory::new(Outcome::Fails(message.to_string()));

        let (status, body) = get(router(&factory), "/genie/get?space_id=x").await;

        assert_eq!(status, StatusCode::NOT_FOUND, "message: {}", message);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            not_found_envelope()
        );
    }
}

#[tokio::test]
async fn unauthorized_error_is_not_classified() {
    let factory = StubFactory::new(Outcome::Fails("Unauthorized: invalid token".to_string()));

    let (status, body) = get(router(&factory), "/genie/get?space_id=x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    assert_ne!(body, not_found_envelope());
}

#[tokio::test]
async fn connection_refused_propagates() {
    let factory = StubFactory::new(Outcome::Fails("connection refused".to_string()));

    let (status, _) = get(router(&factory), "/genie/get?space_id=x").await;

    assert_ne!(status, StatusCode::OK);
    assert_ne!(status, StatusCode::NOT_FOUND);
    assert!(status.is_server_error());
}

#[tokio::test]
async fn missing_space_id_is_rejected_before_lookup() {
    let factory = StubFactory::new(Outcome::Found(json!({ "id": "never" })));

    let (status, _) = get(router(&factory), "/genie/get").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(factory.managers_built(), 0);
}

#[tokio::test]
async fn each_request_builds_its_own_adapter() {
    let factory = StubFactory::new(Outcome::Absent);

    for _ in 0..3 {
        get(router(&factory), "/genie/get?space_id=a").await;
    }

    assert_eq!(factory.managers_built(), 3);
}
