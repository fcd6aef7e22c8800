//! Router tests against an injected model

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use scam_detect_core::logic::features::{layout, FEATURE_COUNT, FEATURE_VERSION};
use scam_detect_core::logic::model::{InferenceError, ModelFormat, ModelOutput};
use scam_detect_core::{load_model, Model, ModelMetadata, ScoringService};

use crate::{config::Config, create_router, AppState};

/// Model double with a fixed answer
struct FakeModel {
    metadata: ModelMetadata,
}

impl FakeModel {
    fn with_dim(input_dim: usize) -> Self {
        let current = input_dim == FEATURE_COUNT;
        Self {
            metadata: ModelMetadata {
                name: "fake".to_string(),
                format: ModelFormat::LogisticRegression,
                source: "<memory>".to_string(),
                input_dim,
                feature_version: current.then_some(FEATURE_VERSION),
                layout_hash: current.then(layout::layout_hash),
                feature_names: None,
                sha256: String::new(),
                loaded_at: chrono::Utc::now(),
            },
        }
    }
}

/// Model that outlives the request timeout
struct SlowModel(FakeModel);

impl Model for SlowModel {
    fn metadata(&self) -> &ModelMetadata {
        self.0.metadata()
    }

    fn predict(&self, features: &[f32]) -> Result<ModelOutput, InferenceError> {
        std::thread::sleep(Duration::from_secs(2));
        self.0.predict(features)
    }
}

impl Model for FakeModel {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn predict(&self, _features: &[f32]) -> Result<ModelOutput, InferenceError> {
        Ok(ModelOutput {
            class: 1,
            probabilities: vec![0.1234, 0.8766],
        })
    }
}

fn router(service: Arc<ScoringService>, config: Config) -> Router {
    create_router(AppState { service, config })
}

fn app_with(model: Arc<dyn Model>) -> Router {
    router(Arc::new(ScoringService::new(model)), Config::default())
}

fn app() -> Router {
    app_with(Arc::new(FakeModel::with_dim(FEATURE_COUNT)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_predict(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let service = Arc::new(ScoringService::new(Arc::new(FakeModel::with_dim(FEATURE_COUNT))));

    for body in [r#"{}"#, r#"{"url": null}"#, r#"{"url": ""}"#, r#"{"url": "   "}"#] {
        let app = router(service.clone(), Config::default());
        let (status, json) = post_predict(app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json, serde_json::json!({ "error": "No URL provided" }), "{body}");
    }

    // Rejected before scoring
    assert_eq!(service.status().inference_count, 0);

    let app = router(service.clone(), Config::default());
    let (status, _) = post_predict(app, r#"{"url": "http://google.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(service.status().inference_count, 1);
}

#[tokio::test]
async fn test_slow_request_times_out_with_json_body() {
    let service = Arc::new(ScoringService::new(Arc::new(SlowModel(FakeModel::with_dim(
        FEATURE_COUNT,
    )))));
    let config = Config {
        request_timeout_secs: 1,
        ..Config::default()
    };

    let (status, json) =
        post_predict(router(service, config), r#"{"url": "http://google.com"}"#).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json, serde_json::json!({ "error": "Request timed out" }));
}

#[tokio::test]
async fn test_redirect_in_query_of_bare_host_is_scored() {
    let (status, json) =
        post_predict(app(), r#"{"url": "example.com/login?next=http://evil.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["confidence"].is_f64());
}

#[tokio::test]
async fn test_predict_returns_result_and_confidence() {
    let (status, json) = post_predict(app(), r#"{"url": "http://google.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "Phising");
    assert_eq!(json["confidence"], 87.66);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_predict_with_bundled_model() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../models/phishing_model.json");
    let model = load_model(path, None).unwrap();

    let (status, json) = post_predict(app_with(model), r#"{"url": "http://google.com"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "Not Phishing");
    let confidence = json["confidence"].as_f64().unwrap();
    assert!((50.0..=100.0).contains(&confidence));
}

#[tokio::test]
async fn test_unknown_field_is_rejected() {
    let (status, json) =
        post_predict(app(), r#"{"url": "http://google.com", "extra": 1}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, json) = post_predict(app(), r#"{"url": "#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_unparseable_url_is_bad_request() {
    let (status, json) = post_predict(app(), r#"{"url": "http://"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(json["error"], "Internal server error");
}

#[tokio::test]
async fn test_shape_mismatch_is_opaque_500() {
    let app = app_with(Arc::new(FakeModel::with_dim(5)));
    let (status, json) = post_predict(app, r#"{"url": "http://google.com"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_health() {
    let (status, json) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_i64());
}

#[tokio::test]
async fn test_model_info() {
    let (status, json) = get(app(), "/model").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model"]["name"], "fake");
    assert_eq!(json["layout"]["feature_count"], FEATURE_COUNT);
    assert_eq!(json["layout"]["hash"], layout::layout_hash());
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, json) = get(app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
}
