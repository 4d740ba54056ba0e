// src/extract/mod.rs
//! Indicator extractors: pure functions from one category of match data to zero or more
//! [`Insight`]s. Missing data is never an error; a category with nothing to say simply
//! contributes nothing.

pub mod form;
pub mod head_to_head;
pub mod injury;
pub mod venue;

use tracing::debug;

use crate::config::EngineConfig;
use crate::insight::Insight;
use crate::model::{MatchData, Side};

pub use form::form_insights;
pub use head_to_head::head_to_head_insights;
pub use injury::injury_insights;
pub use venue::home_advantage_insights;

/// Run every extractor in display order:
/// home form, away form, head-to-head, injuries, home advantage.
pub fn generate_insights(data: &MatchData, cfg: &EngineConfig) -> Vec<Insight> {
    let fixture = &data.fixture;
    let mut out = Vec::new();
    out.extend(form_insights(&data.home_form, Side::Home, fixture, &cfg.form));
    out.extend(form_insights(&data.away_form, Side::Away, fixture, &cfg.form));
    out.extend(head_to_head_insights(
        &data.head_to_head,
        fixture,
        &cfg.head_to_head,
    ));
    out.extend(injury_insights(&data.injuries, fixture, &cfg.injuries));
    out.extend(home_advantage_insights(fixture, &cfg.venue));

    debug!(
        target: "extract",
        fixture = %fixture.id,
        insights = out.len(),
        home_form = data.home_form.len(),
        away_form = data.away_form.len(),
        h2h = data.head_to_head.len(),
        injuries = data.injuries.len(),
        "extracted insights"
    );
    out
}

/// `61276` → `61,276`.
pub(crate) fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::NaiveDate;

    use crate::model::{Fixture, FormRecord, Outcome, Team, Venue, VenueRole};

    pub fn fixture(capacity: Option<u32>) -> Fixture {
        Fixture {
            id: "pl-2".into(),
            home: Team {
                id: "40".into(),
                name: "Liverpool".into(),
            },
            away: Team {
                id: "51".into(),
                name: "Brighton & Hove Albion".into(),
            },
            kickoff: NaiveDate::from_ymd_opt(2025, 12, 13)
                .and_then(|d| d.and_hms_opt(16, 0, 0))
                .unwrap(),
            venue: Venue {
                name: "Anfield".into(),
                city: Some("Liverpool (Anfield)".into()),
                capacity,
            },
            competition: "Premier League".into(),
        }
    }

    /// Build form records from a string like "WWDLW" (most recent first).
    pub fn form(results: &str, venue: VenueRole) -> Vec<FormRecord> {
        results
            .chars()
            .map(|c| {
                let (gf, ga) = match c {
                    'W' => (2, 0),
                    'D' => (1, 1),
                    _ => (0, 1),
                };
                FormRecord {
                    opponent: "Opponent".into(),
                    goals_for: gf,
                    goals_against: ga,
                    venue,
                    outcome: Outcome::from_goals(gf, ga),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::{fixture, form};
    use super::*;
    use crate::insight::InsightCategory;
    use crate::model::{AbsenceKind, HeadToHeadRecord, InjuryRecord, VenueRole};

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(40044), "40,044");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn order_is_form_home_away_h2h_injury_venue() {
        let data = MatchData {
            fixture: fixture(Some(61_276)),
            home_form: form("WWWWL", VenueRole::Home),
            away_form: form("LLLLL", VenueRole::Away),
            head_to_head: vec![HeadToHeadRecord {
                home_goals: 3,
                away_goals: 2,
            }],
            injuries: vec![InjuryRecord {
                team_id: "51".into(),
                player: "Kaoru Mitoma".into(),
                kind: AbsenceKind::Injury,
                detail: None,
            }],
        };
        let got = generate_insights(&data, &EngineConfig::default());
        let titles: Vec<&str> = got.iter().map(|i| i.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Strong Home Form",
                "Poor Away Form",
                "Strong Head-to-Head Record",
                "Key Player Injuries",
                "Large Stadium Advantage",
            ]
        );
        assert_eq!(got[4].category(), InsightCategory::HomeAdvantage);
    }

    #[test]
    fn no_history_still_yields_venue_insight_for_big_grounds() {
        let data = MatchData::bare(fixture(Some(61_276)));
        let got = generate_insights(&data, &EngineConfig::default());
        assert_eq!(got.len(), 1);

        let small = MatchData::bare(fixture(Some(21_990)));
        assert!(generate_insights(&small, &EngineConfig::default()).is_empty());
    }
}
