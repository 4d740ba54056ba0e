//! Recent-form extractor.

use crate::config::FormConfig;
use crate::insight::{Insight, InsightCategory};
use crate::model::{Fixture, FormRecord, Outcome, Side, VenueRole};

/// One insight at most for `side`, based on its most recent matches.
///
/// Win rate at or above `strong_win_rate` → positive; at or below `poor_win_rate` with
/// no wins at all → negative; anything in between (or an empty sample) → nothing.
pub fn form_insights(
    records: &[FormRecord],
    side: Side,
    fixture: &Fixture,
    cfg: &FormConfig,
) -> Vec<Insight> {
    let role = VenueRole::from(side);
    let sample: Vec<&FormRecord> = records
        .iter()
        .take(cfg.window)
        .filter(|r| !cfg.match_venue_role || r.venue == role)
        .collect();
    if sample.is_empty() {
        return Vec::new();
    }

    let n = sample.len();
    let wins = sample.iter().filter(|r| r.outcome == Outcome::Win).count();
    let win_rate = wins as f32 / n as f32;
    let team = &fixture.team(side).name;

    let (strong_title, poor_title, scope, struggle) = match side {
        Side::Home => ("Strong Home Form", "Poor Home Form", "home", "at home"),
        Side::Away => ("Excellent Away Form", "Poor Away Form", "away", "away from home"),
    };
    let scope = if cfg.match_venue_role {
        format!("{scope} matches")
    } else {
        "matches".to_string()
    };

    if win_rate >= cfg.strong_win_rate {
        vec![Insight::positive(
            InsightCategory::Form,
            side,
            strong_title,
            format!("{team} has won {wins} of their last {n} {scope}"),
        )]
    } else if win_rate <= cfg.poor_win_rate && wins == 0 {
        vec![Insight::negative(
            InsightCategory::Form,
            side,
            poor_title,
            format!("{team} has struggled {struggle} recently ({wins} wins in last {n} matches)"),
        )]
    } else {
        Vec::new()
    }
}
