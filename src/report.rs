//! Presentation formatter: maps internal insights/predictions into the response shape the
//! UI consumes. Field names here are a public contract; keep them stable.

use serde::Serialize;

use crate::dates;
use crate::engine::Analysis;
use crate::fallback::FallbackAnalysis;
use crate::insight::{FavoredSide, Insight, InsightCategory, Polarity};
use crate::model::Fixture;
use crate::prediction::{Prediction, Scorecard, Winner};
use crate::sentiment::{ClassifiedSnippet, SentimentBatch, SentimentSummary};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub date_display: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub league: String,
    pub predicted_winner: Winner,
    pub confidence: u8,
}

impl MatchView {
    pub fn new(fixture: &Fixture, prediction: Prediction) -> Self {
        let date = fixture.kickoff.date();
        Self {
            id: fixture.id.clone(),
            home_team: fixture.home.name.clone(),
            away_team: fixture.away.name.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            time: fixture.kickoff.time().format("%H:%M").to_string(),
            date_display: dates::display_date(date),
            venue: fixture.venue.name.clone(),
            city: fixture.venue.city.clone(),
            capacity: fixture.venue.capacity,
            league: fixture.competition.clone(),
            predicted_winner: prediction.winner,
            confidence: prediction.confidence,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightView {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    pub impact: Polarity,
    pub team: FavoredSide,
}

fn insight_type(category: InsightCategory) -> &'static str {
    match category {
        InsightCategory::Form => "form",
        InsightCategory::HeadToHead => "head-to-head",
        InsightCategory::Injury => "injury",
        InsightCategory::HomeAdvantage => "home-record",
    }
}

impl From<&Insight> for InsightView {
    fn from(i: &Insight) -> Self {
        Self {
            kind: insight_type(i.category()),
            title: i.title().to_string(),
            description: i.description().to_string(),
            impact: i.polarity(),
            team: i.favored_side(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub success: bool,
    #[serde(rename = "match")]
    pub match_view: MatchView,
    /// Extraction order, unchanged.
    pub insights: Vec<InsightView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scorecard: Option<Scorecard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ClassifiedSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<&'static FallbackAnalysis>,
    /// True when the fixture came from the static fallback table rather than live data.
    pub used_fallback: bool,
}

impl MatchReport {
    pub fn live(fixture: &Fixture, analysis: &Analysis, sentiment: Option<SentimentBatch>) -> Self {
        let (summary, comments) = match sentiment {
            Some(b) => (Some(b.summary), b.items),
            None => (None, Vec::new()),
        };
        Self {
            success: true,
            match_view: MatchView::new(fixture, analysis.prediction),
            insights: analysis.insights.iter().map(InsightView::from).collect(),
            scorecard: Some(analysis.scorecard),
            sentiment: summary,
            comments,
            analysis: None,
            used_fallback: false,
        }
    }

    pub fn fallback(
        fixture: &Fixture,
        insights: &[Insight],
        prediction: Prediction,
        notes: &'static FallbackAnalysis,
        comments: SentimentBatch,
    ) -> Self {
        Self {
            success: true,
            match_view: MatchView::new(fixture, prediction),
            insights: insights.iter().map(InsightView::from).collect(),
            scorecard: None,
            sentiment: Some(comments.summary),
            comments: comments.items,
            analysis: Some(notes),
            used_fallback: true,
        }
    }
}
