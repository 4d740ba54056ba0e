//! Injury/suspension extractor.
//!
//! "Key player" is a weak name-based heuristic: a name shorter than `max_name_len`
//! characters, or one containing `key_marker`. Absences that don't qualify never produce
//! an insight but still count towards the total cited in the description.

use tracing::debug;

use crate::config::InjuryConfig;
use crate::insight::{Insight, InsightCategory};
use crate::model::{Fixture, InjuryRecord, Side};

pub fn is_key_player(player: &str, cfg: &InjuryConfig) -> bool {
    if player.chars().count() < cfg.max_name_len {
        return true;
    }
    !cfg.key_marker.is_empty() && player.to_lowercase().contains(&cfg.key_marker)
}

pub fn injury_insights(
    injuries: &[InjuryRecord],
    fixture: &Fixture,
    cfg: &InjuryConfig,
) -> Vec<Insight> {
    // (absences, any key player) per side
    let mut tally = [(0usize, false); 2];
    for i in injuries {
        let Some(side) = fixture.side_of(&i.team_id) else {
            debug!(target: "extract", team_id = %i.team_id, "absence for a team not in this fixture");
            continue;
        };
        let entry = &mut tally[side as usize];
        entry.0 += 1;
        entry.1 |= is_key_player(&i.player, cfg);
    }

    [Side::Home, Side::Away]
        .into_iter()
        .filter_map(|side| {
            let (absent, any_key) = tally[side as usize];
            if !any_key {
                return None;
            }
            Some(Insight::negative(
                InsightCategory::Injury,
                side,
                "Key Player Injuries",
                format!("{} has {absent} player(s) injured", fixture.team(side).name),
            ))
        })
        .collect()
}
