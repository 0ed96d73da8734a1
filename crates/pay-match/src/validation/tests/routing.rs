use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::raw_request;
use crate::validation::observer::RecordingObserver;
use crate::validation::router::validation_router;
use crate::validation::service::ValidationService;

fn post_validation(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/validations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn validation_endpoint_returns_result() {
    let observer = RecordingObserver::default();
    let service = Arc::new(ValidationService::with_observer(Arc::new(observer.clone())));

    let response = validation_router(service)
        .oneshot(post_validation(&raw_request()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["verdict"], "APPROVED");
    assert_eq!(body["checks"]["amount_sufficiency"], true);
    assert_eq!(observer.results().len(), 1);
}

#[tokio::test]
async fn validation_endpoint_reports_discrepancies_in_order() {
    let mut raw = raw_request();
    raw["purchase_order"]["montoTotal"] = json!("$1.000.000");
    raw["receipt"]["conforme"] = json!(false);

    let response = validation_router(Arc::new(ValidationService::default()))
        .oneshot(post_validation(&raw))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["verdict"], "FLAGGED");
    assert_eq!(
        body["discrepancies"],
        json!([
            "invoice total 1190000 exceeds purchase order total 1000000",
            "receipt acknowledgment is not marked as conforming"
        ])
    );
}

#[tokio::test]
async fn validation_endpoint_rejects_malformed_documents() {
    let mut raw = raw_request();
    raw["invoice"]["rut"] = json!(["76.123.456-7"]);

    let response = validation_router(Arc::new(ValidationService::default()))
        .oneshot(post_validation(&raw))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["document"], "invoice");
    assert_eq!(body["field"], "rut");
}
