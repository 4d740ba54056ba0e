//! Insight — one directional signal produced by an extractor.
//!
//! Fields are private so the polarity/side pairing can only be built through the
//! constructors below: a neutral insight never names a side, and a positive or negative
//! one always does.

use serde::Serialize;

use crate::model::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    Form,
    HeadToHead,
    Injury,
    HomeAdvantage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoredSide {
    Home,
    Away,
    Neutral,
}

impl From<Side> for FavoredSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Home => FavoredSide::Home,
            Side::Away => FavoredSide::Away,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    category: InsightCategory,
    title: String,
    description: String,
    polarity: Polarity,
    /// For a negative insight this is the side the signal counts against.
    favored_side: FavoredSide,
}

impl Insight {
    /// Good news for `side`.
    pub fn positive(
        category: InsightCategory,
        side: Side,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::sided(category, side, Polarity::Positive, title, description)
    }

    /// Bad news for `side`.
    pub fn negative(
        category: InsightCategory,
        side: Side,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::sided(category, side, Polarity::Negative, title, description)
    }

    /// Informational only; never moves the score.
    pub fn neutral(
        category: InsightCategory,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            description: description.into(),
            polarity: Polarity::Neutral,
            favored_side: FavoredSide::Neutral,
        }
    }

    fn sided(
        category: InsightCategory,
        side: Side,
        polarity: Polarity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            description: description.into(),
            polarity,
            favored_side: side.into(),
        }
    }

    pub fn category(&self) -> InsightCategory {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn favored_side(&self) -> FavoredSide {
        self.favored_side
    }

    /// The side that benefits from this insight. A negative insight about one side
    /// benefits the other; neutral insights benefit nobody.
    pub fn beneficiary(&self) -> Option<Side> {
        let side = match self.favored_side {
            FavoredSide::Home => Side::Home,
            FavoredSide::Away => Side::Away,
            FavoredSide::Neutral => return None,
        };
        match self.polarity {
            Polarity::Positive => Some(side),
            Polarity::Negative => Some(side.opposite()),
            Polarity::Neutral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_never_names_a_side() {
        let i = Insight::neutral(InsightCategory::HeadToHead, "Evenly Matched", "3 draws");
        assert_eq!(i.favored_side(), FavoredSide::Neutral);
        assert_eq!(i.beneficiary(), None);
    }

    #[test]
    fn negative_benefits_the_other_side() {
        let i = Insight::negative(InsightCategory::Injury, Side::Home, "Key Player Injuries", "");
        assert_eq!(i.favored_side(), FavoredSide::Home);
        assert_eq!(i.beneficiary(), Some(Side::Away));
    }

    #[test]
    fn serializes_with_stable_names() {
        let i = Insight::positive(InsightCategory::HeadToHead, Side::Away, "t", "d");
        let v = serde_json::to_value(&i).unwrap();
        assert_eq!(v["category"], "head-to-head");
        assert_eq!(v["polarity"], "positive");
        assert_eq!(v["favoredSide"], "away");
    }
}
