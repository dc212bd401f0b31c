//! HTTP transport
//!
//! Two thin front ends over the same [`SpamClassifierService`]:
//! `POST /predict` takes a form-encoded `message` (page-style clients),
//! `POST /api/predict` takes `{"message": "..."}` (script clients).

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use spam_classifier::{Prediction, ServiceError, SpamClassifierService};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared, read-only classification capability.
pub type SharedService = Arc<dyn SpamClassifierService>;

/// Request body for both front ends.
#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: &'static str,
    pub message: String,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction: prediction.label.as_str(),
            message: prediction.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the router with `service` as state.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// POST /predict - form-encoded message
async fn predict_form(
    State(service): State<SharedService>,
    payload: Result<Form<MessageRequest>, FormRejection>,
) -> Response {
    match payload {
        Ok(Form(request)) => respond(service.as_ref(), request),
        Err(rejection) => bad_request(&rejection.body_text()),
    }
}

/// POST /api/predict - JSON message
async fn predict_json(
    State(service): State<SharedService>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => respond(service.as_ref(), request),
        Err(rejection) => bad_request(&rejection.body_text()),
    }
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

fn respond(service: &dyn SpamClassifierService, request: MessageRequest) -> Response {
    let message = match request.message {
        Some(message) if !message.is_empty() => message,
        _ => return bad_request(&ServiceError::Input.to_string()),
    };

    match service.predict(&message) {
        Ok(prediction) => (StatusCode::OK, Json(PredictResponse::from(prediction))).into_response(),
        Err(err @ ServiceError::Input) => bad_request(&err.to_string()),
        Err(err) => {
            warn!(error = %err, "Classification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(&err.to_string())),
            )
                .into_response()
        }
    }
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(msg))).into_response()
}
