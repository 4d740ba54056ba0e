//! prediction.rs — winner call + confidence, and the intermediate scorecard.
//!
//! Confidence is a heuristic in 0..=100, not a calibrated probability.

use serde::{Deserialize, Serialize};

use crate::model::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Home,
    Away,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Home => Winner::Home,
            Side::Away => Winner::Away,
        }
    }
}

impl Winner {
    pub fn as_str(self) -> &'static str {
        match self {
            Winner::Home => "home",
            Winner::Away => "away",
            Winner::Draw => "draw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub winner: Winner,
    pub confidence: u8,
}

impl Prediction {
    /// Returned when there is nothing to score.
    pub fn insufficient() -> Self {
        Self {
            winner: Winner::Home,
            confidence: 50,
        }
    }

    pub fn draw() -> Self {
        Self {
            winner: Winner::Draw,
            confidence: 50,
        }
    }

    pub fn lean(side: Side, confidence: u8) -> Self {
        Self {
            winner: side.into(),
            confidence: confidence.clamp(50, 100),
        }
    }
}

/// Raw and normalized scores behind a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Clamped to 0..=100.
    pub home_score: i32,
    pub away_score: i32,
    /// `home_confidence + away_confidence == 100`.
    pub home_confidence: u8,
    pub away_confidence: u8,
}

impl Scorecard {
    pub fn confidence_for(&self, side: Side) -> u8 {
        match side {
            Side::Home => self.home_confidence,
            Side::Away => self.away_confidence,
        }
    }

    pub fn gap(&self) -> u8 {
        self.home_confidence.abs_diff(self.away_confidence)
    }
}
