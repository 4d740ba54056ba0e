//! # Prediction Engine
//! Pure, testable logic that maps a batch of [`Insight`]s → [`Prediction`].
//! No I/O, no shared state; safe to call concurrently for any number of fixtures.
//!
//! Policy: both sides start at the baseline. Each sided insight adds `favored_delta` to
//! the side it benefits and takes `opposing_delta` from the other ("bad for home" moves
//! the scores exactly like "good for away"). Scores are clamped to 0..=100 once at the
//! end and normalized so the two confidences sum to 100. A gap inside the draw band
//! (inclusive) is reported as a draw at 50.

use tracing::debug;

use crate::config::{EngineConfig, ScoringConfig};
use crate::extract::generate_insights;
use crate::insight::Insight;
use crate::model::{MatchData, Side};
use crate::prediction::{Prediction, Scorecard};

/// Insights plus the call derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub insights: Vec<Insight>,
    pub scorecard: Scorecard,
    pub prediction: Prediction,
}

/// Extract insights for one fixture and score them.
pub fn analyze(data: &MatchData, cfg: &EngineConfig) -> Analysis {
    let insights = generate_insights(data, cfg);
    let scorecard = score(&insights, &cfg.scoring);
    let prediction = call(&insights, &scorecard, &cfg.scoring);
    debug!(
        target: "engine",
        fixture = %data.fixture.id,
        insights = insights.len(),
        home = scorecard.home_confidence,
        away = scorecard.away_confidence,
        winner = prediction.winner.as_str(),
        confidence = prediction.confidence,
        "fixture analyzed"
    );
    Analysis {
        insights,
        scorecard,
        prediction,
    }
}

/// Aggregate with the default scoring model.
pub fn predict(insights: &[Insight]) -> Prediction {
    predict_with(insights, &ScoringConfig::default())
}

pub fn predict_with(insights: &[Insight], cfg: &ScoringConfig) -> Prediction {
    let scorecard = score(insights, cfg);
    call(insights, &scorecard, cfg)
}

/// Additive scores, clamped and normalized.
pub fn score(insights: &[Insight], cfg: &ScoringConfig) -> Scorecard {
    let (mut home, mut away) = (cfg.baseline, cfg.baseline);

    for side in insights.iter().filter_map(Insight::beneficiary) {
        let (gain, loss) = match side {
            Side::Home => (&mut home, &mut away),
            Side::Away => (&mut away, &mut home),
        };
        *gain = gain.saturating_add(cfg.favored_delta);
        *loss = loss.saturating_sub(cfg.opposing_delta);
    }

    let home_score = home.clamp(0, 100);
    let away_score = away.clamp(0, 100);
    let home_confidence = normalized_share(home_score, away_score);

    Scorecard {
        home_score,
        away_score,
        home_confidence,
        away_confidence: 100 - home_confidence,
    }
}

/// `round(100 * a / (a + b))` in integer arithmetic (half rounds up). Two zero scores
/// are indistinguishable and split evenly.
fn normalized_share(a: i32, b: i32) -> u8 {
    let total = a + b;
    if total <= 0 {
        return 50;
    }
    ((200 * a + total) / (2 * total)) as u8
}

fn call(insights: &[Insight], scorecard: &Scorecard, cfg: &ScoringConfig) -> Prediction {
    if insights.is_empty() {
        return Prediction::insufficient();
    }
    if scorecard.gap() <= cfg.draw_band {
        return Prediction::draw();
    }
    let side = if scorecard.home_confidence > scorecard.away_confidence {
        Side::Home
    } else {
        Side::Away
    };
    Prediction::lean(side, scorecard.confidence_for(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::InsightCategory;
    use crate::prediction::Winner;

    fn pos(side: Side) -> Insight {
        Insight::positive(InsightCategory::Form, side, "t", "d")
    }
    fn neg(side: Side) -> Insight {
        Insight::negative(InsightCategory::Injury, side, "t", "d")
    }
    fn neutral() -> Insight {
        Insight::neutral(InsightCategory::HeadToHead, "Evenly Matched", "d")
    }

    #[test]
    fn empty_is_home_fifty() {
        let p = predict(&[]);
        assert_eq!(p.winner, Winner::Home);
        assert_eq!(p.confidence, 50);
    }

    #[test]
    fn good_and_bad_for_home_cancel_out() {
        let insights = [pos(Side::Home), neg(Side::Home)];
        let s = score(&insights, &ScoringConfig::default());
        assert_eq!((s.home_score, s.away_score), (50, 50));
        assert_eq!(predict(&insights), Prediction::draw());
    }

    #[test]
    fn two_home_positives_give_home_67() {
        let insights = [pos(Side::Home), pos(Side::Home)];
        let s = score(&insights, &ScoringConfig::default());
        assert_eq!((s.home_score, s.away_score), (80, 40));
        assert_eq!((s.home_confidence, s.away_confidence), (67, 33));
        let p = predict(&insights);
        assert_eq!(p.winner, Winner::Home);
        assert_eq!(p.confidence, 67);
    }

    #[test]
    fn negative_for_away_equals_positive_for_home() {
        let cfg = ScoringConfig::default();
        assert_eq!(score(&[pos(Side::Home)], &cfg), score(&[neg(Side::Away)], &cfg));
        assert_eq!(score(&[pos(Side::Away)], &cfg), score(&[neg(Side::Home)], &cfg));
    }

    #[test]
    fn neutral_insights_do_not_move_scores_but_are_not_empty() {
        let s = score(&[neutral(), neutral()], &ScoringConfig::default());
        assert_eq!((s.home_score, s.away_score), (50, 50));
        assert_eq!(predict(&[neutral()]), Prediction::draw());
    }

    #[test]
    fn scores_clamp_before_normalizing() {
        let insights = vec![pos(Side::Away); 8];
        let s = score(&insights, &ScoringConfig::default());
        assert_eq!((s.home_score, s.away_score), (10, 100));
        // 100 / 110 = 90.9 → 91
        assert_eq!(s.away_confidence, 91);
        let p = predict(&insights);
        assert_eq!((p.winner, p.confidence), (Winner::Away, 91));
    }

    #[test]
    fn both_sides_at_zero_is_a_draw() {
        let mut insights = vec![neg(Side::Home); 5];
        insights.extend(vec![neg(Side::Away); 5]);
        let s = score(&insights, &ScoringConfig::default());
        assert_eq!((s.home_score, s.away_score), (0, 0));
        assert_eq!((s.home_confidence, s.away_confidence), (50, 50));
        assert_eq!(predict(&insights), Prediction::draw());
    }

    #[test]
    fn gap_on_the_band_edge_is_a_draw() {
        // home 55 / away 45 → gap exactly 10
        let cfg = ScoringConfig {
            baseline: 50,
            favored_delta: 5,
            opposing_delta: 5,
            draw_band: 10,
        };
        let insights = [pos(Side::Home)];
        let s = score(&insights, &cfg);
        assert_eq!((s.home_confidence, s.away_confidence), (55, 45));
        assert_eq!(predict_with(&insights, &cfg), Prediction::draw());

        let narrower = ScoringConfig { draw_band: 9, ..cfg };
        let p = predict_with(&insights, &narrower);
        assert_eq!((p.winner, p.confidence), (Winner::Home, 55));
    }

    #[test]
    fn single_home_positive_leans_home() {
        // 65 vs 45 → 59.09 → 59 / 41
        let p = predict(&[pos(Side::Home)]);
        assert_eq!((p.winner, p.confidence), (Winner::Home, 59));
    }

    #[test]
    fn idempotent() {
        let insights = [pos(Side::Away), neutral(), neg(Side::Home), pos(Side::Home)];
        assert_eq!(predict(&insights), predict(&insights));
    }

    #[test]
    fn extreme_deltas_saturate_instead_of_overflowing() {
        let cfg = ScoringConfig {
            baseline: 50,
            favored_delta: 2_000_000_000,
            opposing_delta: 2_000_000_000,
            draw_band: 10,
        };
        let insights = [pos(Side::Home), pos(Side::Home), neg(Side::Away)];
        let s = score(&insights, &cfg);
        assert_eq!((s.home_score, s.away_score), (100, 0));
        assert_eq!(predict_with(&insights, &cfg), Prediction::lean(Side::Home, 100));

        let reversed = [pos(Side::Away), pos(Side::Away), pos(Side::Home)];
        let p = predict_with(&reversed, &cfg);
        assert_eq!(p.winner, Winner::Away);
    }
}
