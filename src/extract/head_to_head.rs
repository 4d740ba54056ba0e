//! Head-to-head extractor.

use crate::config::HeadToHeadConfig;
use crate::insight::{Insight, InsightCategory};
use crate::model::{Fixture, HeadToHeadRecord, Side};

/// Majority winner of recent meetings → positive insight for that side. Level on wins
/// with at least one draw → a neutral "Evenly Matched" insight.
pub fn head_to_head_insights(
    records: &[HeadToHeadRecord],
    fixture: &Fixture,
    cfg: &HeadToHeadConfig,
) -> Vec<Insight> {
    let sample = &records[..records.len().min(cfg.window)];
    if sample.is_empty() {
        return Vec::new();
    }

    let n = sample.len();
    let (mut home_wins, mut away_wins, mut draws) = (0usize, 0usize, 0usize);
    for r in sample {
        match r.winner() {
            Some(Side::Home) => home_wins += 1,
            Some(Side::Away) => away_wins += 1,
            None => draws += 1,
        }
    }

    let leader = match home_wins.cmp(&away_wins) {
        std::cmp::Ordering::Greater => Some((Side::Home, home_wins)),
        std::cmp::Ordering::Less => Some((Side::Away, away_wins)),
        std::cmp::Ordering::Equal => None,
    };

    match leader {
        Some((side, wins)) => vec![Insight::positive(
            InsightCategory::HeadToHead,
            side,
            "Strong Head-to-Head Record",
            format!(
                "{} has won {wins} of the last {n} meetings",
                fixture.team(side).name
            ),
        )],
        None if draws > 0 => vec![Insight::neutral(
            InsightCategory::HeadToHead,
            "Evenly Matched",
            format!("{draws} of the last {n} meetings ended in draws"),
        )],
        None => Vec::new(),
    }
}
