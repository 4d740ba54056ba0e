// src/lib.rs
// Public library surface for integration tests, the service binary and demo tools.

pub mod api;
pub mod config;
pub mod dates;
pub mod engine;
pub mod extract;
pub mod fallback;
pub mod insight;
pub mod metrics;
pub mod model;
pub mod prediction;
pub mod report;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::EngineConfig;
pub use crate::engine::{analyze, predict, predict_with, Analysis};
pub use crate::insight::{FavoredSide, Insight, InsightCategory, Polarity};
pub use crate::model::{Fixture, MatchData, MatchInputs, Side, ValidationError};
pub use crate::prediction::{Prediction, Scorecard, Winner};
pub use crate::report::MatchReport;
pub use crate::sentiment::{Sentiment, SentimentBatch, SentimentClassifier, SentimentSummary, TextSnippet};
