//! Home-advantage extractor. Needs nothing but the fixture itself.

use super::thousands;
use crate::config::VenueConfig;
use crate::insight::{Insight, InsightCategory};
use crate::model::{Fixture, Side};

pub fn home_advantage_insights(fixture: &Fixture, cfg: &VenueConfig) -> Vec<Insight> {
    match fixture.venue.capacity {
        Some(cap) if cap > cfg.large_stadium_capacity => vec![Insight::positive(
            InsightCategory::HomeAdvantage,
            Side::Home,
            "Large Stadium Advantage",
            format!(
                "{} (Capacity: {}) provides significant home advantage",
                fixture.venue.name,
                thousands(cap)
            ),
        )],
        _ => Vec::new(),
    }
}
