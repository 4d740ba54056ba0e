// tests/scenarios.rs
//
// Worked examples through the public library surface.

use chrono::NaiveDate;
use fixture_insights::config::{FormConfig, HeadToHeadConfig};
use fixture_insights::extract::{form_insights, head_to_head_insights};
use fixture_insights::model::{
    FormRecord, HeadToHeadRecord, Outcome, RawFixture, RawId, RawTeam, Team, Venue, VenueRole,
};
use fixture_insights::{
    analyze, predict, EngineConfig, FavoredSide, Fixture, Insight, InsightCategory, MatchData,
    Polarity, Prediction, Sentiment, SentimentClassifier, Side, Winner,
};

fn fixture() -> Fixture {
    Fixture {
        id: "pl-4".into(),
        home: Team {
            id: "42".into(),
            name: "Arsenal".into(),
        },
        away: Team {
            id: "39".into(),
            name: "Wolverhampton Wanderers".into(),
        },
        kickoff: NaiveDate::from_ymd_opt(2025, 12, 13)
            .and_then(|d| d.and_hms_opt(21, 0, 0))
            .unwrap(),
        venue: Venue {
            name: "Emirates Stadium".into(),
            city: None,
            capacity: Some(60_704),
        },
        competition: "Premier League".into(),
    }
}

fn home_result(gf: u32, ga: u32) -> FormRecord {
    FormRecord {
        opponent: "X".into(),
        goals_for: gf,
        goals_against: ga,
        venue: VenueRole::Home,
        outcome: Outcome::from_goals(gf, ga),
    }
}

#[test]
fn scenario_strong_home_form() {
    let records = vec![
        home_result(2, 0),
        home_result(1, 0),
        home_result(0, 1),
        home_result(3, 1),
        home_result(2, 1),
    ];
    let got = form_insights(&records, Side::Home, &fixture(), &FormConfig::default());
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].title(), "Strong Home Form");
    assert_eq!(got[0].polarity(), Polarity::Positive);
    assert_eq!(got[0].favored_side(), FavoredSide::Home);
}

#[test]
fn scenario_evenly_matched_head_to_head() {
    let records: Vec<HeadToHeadRecord> = [(2, 1), (0, 1), (1, 1), (0, 0), (3, 3)]
        .into_iter()
        .map(|(home_goals, away_goals)| HeadToHeadRecord {
            home_goals,
            away_goals,
        })
        .collect();
    let got = head_to_head_insights(&records, &fixture(), &HeadToHeadConfig::default());
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].title(), "Evenly Matched");
    assert_eq!(got[0].favored_side(), FavoredSide::Neutral);
}

#[test]
fn scenario_conflicting_home_signals_draw() {
    let insights = [
        Insight::positive(InsightCategory::Form, Side::Home, "Strong Home Form", ""),
        Insight::negative(InsightCategory::Injury, Side::Home, "Key Player Injuries", ""),
    ];
    assert_eq!(predict(&insights), Prediction::draw());
}

#[test]
fn scenario_two_home_positives() {
    let insights = [
        Insight::positive(InsightCategory::Form, Side::Home, "Strong Home Form", ""),
        Insight::positive(InsightCategory::HomeAdvantage, Side::Home, "Large Stadium Advantage", ""),
    ];
    let p = predict(&insights);
    assert_eq!(p.winner, Winner::Home);
    assert_eq!(p.confidence, 67);
}

#[test]
fn scenario_keyword_sentiment() {
    let c = SentimentClassifier::new();
    assert_eq!(
        c.classify_text("Team A are in excellent form and heading for victory"),
        Sentiment::Positive
    );
}

#[test]
fn scenario_stadium_only_fixture() {
    // All history sources failed upstream: only the venue speaks.
    let data = MatchData::bare(fixture());
    let a = analyze(&data, &EngineConfig::default());
    assert_eq!(a.insights.len(), 1);
    // 65 vs 45 → 59
    assert_eq!(a.prediction, Prediction::lean(Side::Home, 59));
}

#[test]
fn raw_inputs_round_through_validation() {
    let raw = RawFixture {
        id: Some(RawId::Num(7)),
        home: Some(RawTeam {
            id: Some(RawId::Num(1)),
            name: Some("Burnley".into()),
        }),
        away: Some(RawTeam {
            id: Some(RawId::Num(2)),
            name: Some("Fulham".into()),
        }),
        date: Some("Saturday, December 13, 2025".into()),
        time: Some("18:30".into()),
        venue: Some("Turf Moor".into()),
        city: None,
        capacity: Some(21_990),
        league: None,
    };
    let f = Fixture::try_from(raw).unwrap();
    assert_eq!(f.kickoff.to_string(), "2025-12-13 18:30:00");
    assert_eq!(f.competition, "Unknown competition");
    let a = analyze(&MatchData::bare(f), &EngineConfig::default());
    assert!(a.insights.is_empty());
    assert_eq!(a.prediction, Prediction::insufficient());
}

#[test]
fn away_form_without_roles_still_counts() {
    let inputs: fixture_insights::MatchInputs = serde_json::from_value(serde_json::json!({
        "fixture": {
            "id": 9, "home": { "id": 1, "name": "Burnley" }, "away": { "id": 2, "name": "Fulham" },
            "date": "2025-12-13", "time": "18:30", "venue": "Turf Moor", "capacity": 21990
        },
        "away_form": [
            { "opponent": "Leeds", "goals_for": 2, "goals_against": 0 },
            { "opponent": "Spurs", "goals_for": 1, "goals_against": 0 },
            { "opponent": "Wolves", "goals_for": 0, "goals_against": 0 }
        ]
    }))
    .unwrap();
    let a = analyze(&MatchData::try_from(inputs).unwrap(), &EngineConfig::default());
    let titles: Vec<&str> = a.insights.iter().map(|i| i.title()).collect();
    assert_eq!(titles, vec!["Excellent Away Form"]);
    assert_eq!(a.prediction.winner, Winner::Away);
}
