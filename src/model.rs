//! # Match data model
//!
//! Two layers live here:
//! - `Raw*` records mirror what a fixture provider (or the UI) hands us: every field is
//!   optional, ids may be numbers or strings.
//! - Validated records (`Fixture`, `FormRecord`, `HeadToHeadRecord`, `InjuryRecord`) are
//!   what the extractors consume. They are built once at the boundary so the scoring
//!   logic never has to deal with nulls.
//!
//! A fixture that cannot be validated is an error (the caller switches to fallback data).
//! A single malformed history record (e.g. an unfinished match with null goals) is only
//! skipped.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dates;

/// Which of the two fixture sides something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Venue role of a team in one historical match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueRole {
    Home,
    Away,
}

impl From<Side> for VenueRole {
    fn from(side: Side) -> Self {
        match side {
            Side::Home => VenueRole::Home,
            Side::Away => VenueRole::Away,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_goals(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceKind {
    #[default]
    Injury,
    Suspension,
}

/// Boundary validation failures. Only the fixture itself is fatal; record-level
/// failures are logged and the record is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("fixture is missing its id")]
    MissingFixtureId,
    #[error("fixture is missing the {0:?} team")]
    MissingTeam(Side),
    #[error("{0:?} team has no id")]
    MissingTeamId(Side),
    #[error("{0:?} team has no name")]
    MissingTeamName(Side),
    #[error("home and away team share id {0}")]
    SameTeam(String),
    #[error("fixture date is missing")]
    MissingDate,
    #[error("unrecognized fixture date '{0}'")]
    BadDate(String),
    #[error("unrecognized kick-off time '{0}'")]
    BadTime(String),
    #[error("match record has no final score")]
    Unfinished,
    #[error("injury record is missing {0}")]
    IncompleteInjury(&'static str),
}

/// Provider ids arrive either as numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(u64),
    Text(String),
}

impl RawId {
    fn normalized(&self) -> Option<String> {
        match self {
            RawId::Num(n) => Some(n.to_string()),
            RawId::Text(s) => {
                let t = s.trim();
                (!t.is_empty()).then(|| t.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTeam {
    pub id: Option<RawId>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFixture {
    pub id: Option<RawId>,
    pub home: Option<RawTeam>,
    pub away: Option<RawTeam>,
    /// ISO `YYYY-MM-DD` or display form `Saturday, December 13, 2025`.
    pub date: Option<String>,
    /// `HH:MM`; defaults by weekday when absent.
    pub time: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<u32>,
    pub league: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFormRecord {
    pub opponent: Option<String>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub venue: Option<VenueRole>,
}

/// Goals are relative to the current fixture: `home_goals` belong to today's home side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHeadToHeadRecord {
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInjuryRecord {
    pub team_id: Option<RawId>,
    pub player: Option<String>,
    #[serde(default)]
    pub kind: AbsenceKind,
    /// Free-form role or severity tag, e.g. "Midfield" or "hamstring".
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: Option<String>,
    pub capacity: Option<u32>,
}

/// A single upcoming match. Immutable for the duration of a prediction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub home: Team,
    pub away: Team,
    pub kickoff: NaiveDateTime,
    pub venue: Venue,
    pub competition: String,
}

impl Fixture {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Which side a team id belongs to, if any.
    pub fn side_of(&self, team_id: &str) -> Option<Side> {
        if self.home.id == team_id {
            Some(Side::Home)
        } else if self.away.id == team_id {
            Some(Side::Away)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub opponent: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub venue: VenueRole,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl HeadToHeadRecord {
    /// Winner of the meeting from today's perspective; `None` for a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRecord {
    pub team_id: String,
    pub player: String,
    pub kind: AbsenceKind,
    pub detail: Option<String>,
}

impl TryFrom<RawTeam> for Team {
    type Error = ValidationError;

    fn try_from(raw: RawTeam) -> Result<Self, Self::Error> {
        // The caller maps the side onto the error; Home is a placeholder here.
        let id = raw
            .id
            .as_ref()
            .and_then(RawId::normalized)
            .ok_or(ValidationError::MissingTeamId(Side::Home))?;
        let name = non_empty(raw.name).ok_or(ValidationError::MissingTeamName(Side::Home))?;
        Ok(Team { id, name })
    }
}

fn team_for(raw: Option<RawTeam>, side: Side) -> Result<Team, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingTeam(side))?;
    Team::try_from(raw).map_err(|e| match e {
        ValidationError::MissingTeamId(_) => ValidationError::MissingTeamId(side),
        ValidationError::MissingTeamName(_) => ValidationError::MissingTeamName(side),
        other => other,
    })
}

impl TryFrom<RawFixture> for Fixture {
    type Error = ValidationError;

    fn try_from(raw: RawFixture) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .as_ref()
            .and_then(RawId::normalized)
            .ok_or(ValidationError::MissingFixtureId)?;
        let home = team_for(raw.home, Side::Home)?;
        let away = team_for(raw.away, Side::Away)?;
        if home.id == away.id {
            return Err(ValidationError::SameTeam(home.id));
        }

        let date_raw = non_empty(raw.date).ok_or(ValidationError::MissingDate)?;
        let date =
            dates::parse_date(&date_raw).ok_or_else(|| ValidationError::BadDate(date_raw.clone()))?;
        let time = match non_empty(raw.time) {
            Some(t) => dates::parse_time(&t).ok_or(ValidationError::BadTime(t))?,
            None => dates::default_kickoff(date),
        };

        Ok(Fixture {
            id,
            home,
            away,
            kickoff: date.and_time(time),
            venue: Venue {
                name: non_empty(raw.venue).unwrap_or_else(|| "TBC".to_string()),
                city: non_empty(raw.city),
                capacity: raw.capacity,
            },
            competition: non_empty(raw.league).unwrap_or_else(|| "Unknown competition".to_string()),
        })
    }
}

impl TryFrom<RawFormRecord> for FormRecord {
    type Error = ValidationError;

    fn try_from(raw: RawFormRecord) -> Result<Self, Self::Error> {
        let (Some(goals_for), Some(goals_against)) = (raw.goals_for, raw.goals_against) else {
            return Err(ValidationError::Unfinished);
        };
        Ok(FormRecord {
            opponent: non_empty(raw.opponent).unwrap_or_else(|| "Unknown".to_string()),
            goals_for,
            goals_against,
            // Outside a side's list, a record without a role counts as a home match.
            venue: raw.venue.unwrap_or(VenueRole::Home),
            outcome: Outcome::from_goals(goals_for, goals_against),
        })
    }
}

impl TryFrom<RawHeadToHeadRecord> for HeadToHeadRecord {
    type Error = ValidationError;

    fn try_from(raw: RawHeadToHeadRecord) -> Result<Self, Self::Error> {
        match (raw.home_goals, raw.away_goals) {
            (Some(home_goals), Some(away_goals)) => Ok(HeadToHeadRecord {
                home_goals,
                away_goals,
            }),
            _ => Err(ValidationError::Unfinished),
        }
    }
}

impl TryFrom<RawInjuryRecord> for InjuryRecord {
    type Error = ValidationError;

    fn try_from(raw: RawInjuryRecord) -> Result<Self, Self::Error> {
        let team_id = raw
            .team_id
            .as_ref()
            .and_then(RawId::normalized)
            .ok_or(ValidationError::IncompleteInjury("team id"))?;
        let player = non_empty(raw.player).ok_or(ValidationError::IncompleteInjury("player"))?;
        Ok(InjuryRecord {
            team_id,
            player,
            kind: raw.kind,
            detail: non_empty(raw.detail),
        })
    }
}

/// Validate a list of raw records, dropping (and logging) the ones that fail.
pub fn validate_records<R, T>(raw: Vec<R>, what: &'static str) -> Vec<T>
where
    T: TryFrom<R, Error = ValidationError>,
{
    let total = raw.len();
    let kept: Vec<T> = raw
        .into_iter()
        .filter_map(|r| match T::try_from(r) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(target: "model", what, error = %e, "skipping record");
                None
            }
        })
        .collect();
    if kept.len() != total {
        debug!(target: "model", what, total, kept = kept.len(), "records excluded");
    }
    kept
}

/// Everything the engine needs for one fixture, as received from upstream.
/// Categories that could not be fetched arrive as empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchInputs {
    pub fixture: RawFixture,
    #[serde(default)]
    pub home_form: Vec<RawFormRecord>,
    #[serde(default)]
    pub away_form: Vec<RawFormRecord>,
    #[serde(default)]
    pub head_to_head: Vec<RawHeadToHeadRecord>,
    #[serde(default)]
    pub injuries: Vec<RawInjuryRecord>,
}

/// Validated counterpart of [`MatchInputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchData {
    pub fixture: Fixture,
    pub home_form: Vec<FormRecord>,
    pub away_form: Vec<FormRecord>,
    pub head_to_head: Vec<HeadToHeadRecord>,
    pub injuries: Vec<InjuryRecord>,
}

impl MatchData {
    /// A fixture with no history at all.
    pub fn bare(fixture: Fixture) -> Self {
        Self {
            fixture,
            home_form: Vec::new(),
            away_form: Vec::new(),
            head_to_head: Vec::new(),
            injuries: Vec::new(),
        }
    }
}

impl TryFrom<MatchInputs> for MatchData {
    type Error = ValidationError;

    fn try_from(raw: MatchInputs) -> Result<Self, Self::Error> {
        Ok(MatchData {
            fixture: Fixture::try_from(raw.fixture)?,
            home_form: validate_records(with_role(raw.home_form, VenueRole::Home), "home_form"),
            away_form: validate_records(with_role(raw.away_form, VenueRole::Away), "away_form"),
            head_to_head: validate_records(raw.head_to_head, "head_to_head"),
            injuries: validate_records(raw.injuries, "injuries"),
        })
    }
}

/// Records without a venue role take the role of the list they arrived in.
fn with_role(mut records: Vec<RawFormRecord>, role: VenueRole) -> Vec<RawFormRecord> {
    for r in &mut records {
        r.venue.get_or_insert(role);
    }
    records
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
