use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use spam_classifier::{
    ClassificationError, Label, Prediction, ServiceError, SpamClassifier, SpamClassifierService,
};
use spam_guard::router;
use tower::ServiceExt;

/// Always fails after input validation, like a model whose feature space
/// does not match its vectorizer.
struct BrokenService;

impl SpamClassifierService for BrokenService {
    fn predict(&self, message: &str) -> Result<Prediction, ServiceError> {
        if message.is_empty() {
            return Err(ServiceError::Input);
        }
        Err(ClassificationError::DimensionMismatch {
            expected: 10,
            found: 20,
        }
        .into())
    }
}

/// Counts how often the pipeline is entered.
#[derive(Default)]
struct CountingService {
    calls: std::sync::atomic::AtomicUsize,
}

impl SpamClassifierService for CountingService {
    fn predict(&self, message: &str) -> Result<Prediction, ServiceError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if message.is_empty() {
            return Err(ServiceError::Input);
        }
        Ok(Prediction {
            label: Label::Ham,
            message: message.to_string(),
        })
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../spam-classifier/tests/fixtures")
        .join(name)
}

fn app() -> Router {
    let service = SpamClassifier::load(fixture("vectorizer.json"), fixture("classifier.json"))
        .expect("fixture artifacts should load");
    router(Arc::new(service))
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_form_predict_spam() {
    let (status, body) = send(
        app(),
        form_request("message=WINNER%21%21+You+have+been+selected+to+receive+a+%241000+prize%2C+call+now%21"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "spam");
    assert_eq!(
        body["message"],
        "WINNER!! You have been selected to receive a $1000 prize, call now!"
    );
}

#[tokio::test]
async fn test_json_predict_ham() {
    let message = "Hey, are we still meeting for lunch tomorrow?";
    let (status, body) = send(app(), json_request(json!({ "message": message }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": "ham", "message": message }));
}

#[tokio::test]
async fn test_missing_message_never_classifies() {
    let service = Arc::new(CountingService::default());
    let app = router(service.clone());

    let (status, body) = send(app.clone(), form_request("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No message provided");

    let (status, body) = send(app.clone(), json_request(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No message provided");

    let (status, _) = send(app, form_request("message=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(service.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let (status, body) = send(app(), form_request("message=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No message provided");
}

#[tokio::test]
async fn test_classification_failure_is_request_error() {
    let app = router(Arc::new(BrokenService));

    let (status, body) = send(app.clone(), json_request(json!({ "message": "free prize" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("dimensions"));
    assert!(body.get("prediction").is_none());

    // the router keeps serving after a failure
    let (status, _) = send(app, json_request(json!({ "message": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"message\": "))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
