use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::engine;
use crate::fallback;
use crate::model::{MatchData, MatchInputs, ValidationError};
use crate::report::{MatchReport, MatchView};
use crate::sentiment::{SentimentBatch, SentimentClassifier, TextSnippet};

#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    classifier: Arc<SentimentClassifier>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        let classifier = match config.lexicon.clone() {
            Some(lex) => SentimentClassifier::with_lexicon(lex),
            None => SentimentClassifier::new(),
        };
        Self {
            config: Arc::new(config),
            classifier: Arc::new(classifier),
        }
    }

    /// Load `EngineConfig` from `$FIXTURE_INSIGHTS_CONFIG` / `config/engine.toml` / defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/predict", post(predict))
        .route("/sentiment", post(sentiment))
        .route("/matches", get(list_fallback_matches))
        .route("/matches/{id}", get(fallback_match))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug)]
pub enum ApiError {
    Invalid(ValidationError),
    NotFound(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Invalid(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Invalid(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Match '{id}' not found")),
        };
        (status, Json(json!({ "success": false, "error": msg }))).into_response()
    }
}

#[derive(Deserialize)]
struct PredictReq {
    #[serde(flatten)]
    inputs: MatchInputs,
    #[serde(default)]
    snippets: Vec<TextSnippet>,
}

async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictReq>,
) -> Result<Json<MatchReport>, ApiError> {
    let started = Instant::now();

    let data = MatchData::try_from(body.inputs).inspect_err(|e| {
        warn!(target: "api", error = %e, "rejected fixture");
        counter!("fixture_rejected_total").increment(1);
    })?;
    let analysis = engine::analyze(&data, &state.config);

    // Display-only; never feeds the prediction.
    let sentiment = (!body.snippets.is_empty()).then(|| state.classifier.classify(body.snippets));

    let winner = analysis.prediction.winner.as_str();
    counter!("fixture_predictions_total", "winner" => winner).increment(1);
    histogram!("fixture_prediction_duration_ms").record(started.elapsed().as_secs_f64() * 1000.0);
    info!(
        target: "api",
        fixture = %data.fixture.id,
        winner,
        confidence = analysis.prediction.confidence,
        insights = analysis.insights.len(),
        "prediction served"
    );

    Ok(Json(MatchReport::live(&data.fixture, &analysis, sentiment)))
}

async fn sentiment(
    State(state): State<AppState>,
    Json(snippets): Json<Vec<TextSnippet>>,
) -> Json<SentimentBatch> {
    let batch = state.classifier.classify(snippets);
    let s = batch.summary;
    for (label, n) in [
        ("positive", s.positive),
        ("negative", s.negative),
        ("neutral", s.neutral),
    ] {
        counter!("sentiment_snippets_total", "label" => label).increment(n as u64);
    }
    Json(batch)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchList {
    success: bool,
    matches: Vec<MatchView>,
    used_fallback: bool,
}

async fn list_fallback_matches(State(state): State<AppState>) -> Result<Json<MatchList>, ApiError> {
    let mut matches = Vec::with_capacity(fallback::fixtures().len());
    for f in fallback::fixtures() {
        matches.push(f.report(&state.config, &state.classifier)?.match_view);
    }
    counter!("fixture_fallback_reports_total").increment(1);
    Ok(Json(MatchList {
        success: true,
        matches,
        used_fallback: true,
    }))
}

async fn fallback_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchReport>, ApiError> {
    let f = fallback::find(&id).ok_or_else(|| ApiError::NotFound(id.clone()))?;
    let report = f.report(&state.config, &state.classifier)?;
    counter!("fixture_fallback_reports_total").increment(1);
    info!(target: "api", fixture = f.id, "served fallback fixture");
    Ok(Json(report))
}
