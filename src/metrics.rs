use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;

        describe_counter!("fixture_predictions_total", "Predictions served, by winner");
        describe_counter!("fixture_rejected_total", "Fixtures that failed validation");
        describe_counter!("fixture_fallback_reports_total", "Reports built from fallback data");
        describe_counter!("sentiment_snippets_total", "Snippets classified, by label");
        describe_histogram!(
            "fixture_prediction_duration_ms",
            Unit::Milliseconds,
            "Time to validate, extract and score one fixture"
        );

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
