use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::service::{ValidationRequest, ValidationService, ValidationServiceError};

/// Router exposing the three-way match over HTTP.
pub fn validation_router(service: Arc<ValidationService>) -> Router {
    Router::new()
        .route("/api/v1/validations", post(validate_handler))
        .with_state(service)
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<ValidationService>>,
    axum::Json(request): axum::Json<ValidationRequest>,
) -> Response {
    match service.validate(&request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(ValidationServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
                "document": violation.document(),
                "field": violation.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
