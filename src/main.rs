//! Fixture Insights Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and metrics.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fixture_insights::{api, metrics::Metrics, AppState};

const DEFAULT_PORT: u16 = 8080;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fixture_insights=info,warn"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let state = AppState::from_env().context("loading engine config")?;
    let metrics = Metrics::init().context("installing metrics recorder")?;
    let app = api::router(state).merge(metrics.router());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding port {port}"))?;
    info!(port, "fixture-insights listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
