//! HTTP routes and handlers

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use langid_core::LanguagePrediction;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, info, warn};

use crate::state::AppState;
use crate::static_files;

pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:8080"),
                HeaderValue::from_static("http://127.0.0.1:8080"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/models", get(list_models))
        .route("/metrics", get(render_metrics))
        .route("/predict", post(predict))
        .fallback(static_files::serve_static)
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn list_models(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "models": state.registry.names(),
        "default": state.config.default_model,
    }))
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

/// Prediction request.
///
/// `text` is modelled as an `Option` so a missing field maps to the API's
/// 400 response instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
struct PredictRequest {
    text: Option<String>,
    model_name: Option<String>,
}

/// Main prediction handler
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<LanguagePrediction>, AppError> {
    metrics::counter!("langid_requests_total").increment(1);

    if state.registry.is_empty() {
        warn!("prediction requested but no model is loaded");
        return Err(AppError::NoModels);
    }

    let text = req
        .text
        .ok_or_else(|| AppError::InvalidRequest("Invalid request: 'text' field missing.".into()))?;

    let model_name = req
        .model_name
        .unwrap_or_else(|| state.config.default_model.clone());

    let model = state
        .registry
        .get(&model_name)
        .ok_or_else(|| AppError::ModelNotFound(model_name.clone()))?;

    if text.trim().is_empty() {
        return Err(AppError::InvalidRequest("Input text cannot be empty.".into()));
    }

    debug!(model = %model_name, "predicting language for {} byte(s)", text.len());

    let prediction = model
        .predict_one(&text)
        .map_err(|e| AppError::Prediction(e.to_string()))?
        .ok_or_else(|| AppError::Prediction("model returned no label".into()))?;

    info!(
        model = %model_name,
        lang = %prediction.lang_code,
        confidence = prediction.confidence,
        "prediction served"
    );

    Ok(Json(prediction))
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    NoModels,
    InvalidRequest(String),
    ModelNotFound(String),
    Prediction(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        metrics::counter!("langid_errors_total").increment(1);

        let (status, message) = match self {
            AppError::NoModels => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No model loaded. Check server logs.".to_string(),
            ),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ModelNotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("Model '{name}' not found or failed to load."),
            ),
            AppError::Prediction(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Prediction failed: {msg}"),
            ),
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
