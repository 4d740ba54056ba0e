//! Demo: score a fixture from a JSON file, or print every fallback fixture's call.
//!
//! ```text
//! cargo run --bin predict-demo -- match.json
//! cargo run --bin predict-demo
//! ```

use anyhow::{Context, Result};
use fixture_insights::{
    engine, fallback, report::MatchReport, EngineConfig, MatchData, MatchInputs,
    SentimentClassifier, TextSnippet,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct DemoInput {
    #[serde(flatten)]
    inputs: MatchInputs,
    #[serde(default)]
    snippets: Vec<TextSnippet>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let cfg = EngineConfig::from_env()?;
    let classifier = match cfg.lexicon.clone() {
        Some(lex) => SentimentClassifier::with_lexicon(lex),
        None => SentimentClassifier::new(),
    };

    if let Some(path) = std::env::args().nth(1) {
        let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
        let input: DemoInput = serde_json::from_str(&raw).context("parsing match json")?;
        let data = MatchData::try_from(input.inputs)?;
        let analysis = engine::analyze(&data, &cfg);
        let sentiment =
            (!input.snippets.is_empty()).then(|| classifier.classify(input.snippets));
        let report = MatchReport::live(&data.fixture, &analysis, sentiment);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for f in fallback::fixtures() {
        let r = f.report(&cfg, &classifier)?;
        let m = &r.match_view;
        println!(
            "{:<6} {:<18} vs {:<24} -> {:<5} {:>3}%  ({} insights, {} comments)",
            m.id,
            m.home_team,
            m.away_team,
            m.predicted_winner.as_str(),
            m.confidence,
            r.insights.len(),
            r.comments.len()
        );
    }
    Ok(())
}
