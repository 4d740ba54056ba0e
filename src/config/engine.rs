// src/config/engine.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::sentiment::Lexicon;

pub const DEFAULT_ENGINE_CONFIG_PATH: &str = "config/engine.toml";
pub const ENV_ENGINE_CONFIG_PATH: &str = "FIXTURE_INSIGHTS_CONFIG";

/// Additive score model used by the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Both sides start here.
    pub baseline: i32,
    /// Added to the side an insight benefits.
    pub favored_delta: i32,
    /// Subtracted from the other side.
    pub opposing_delta: i32,
    /// Confidence gap (percentage points) at or below which the call is a draw.
    pub draw_band: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 50,
            favored_delta: 15,
            opposing_delta: 5,
            draw_band: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Most recent matches considered.
    pub window: usize,
    /// Win rate at or above which form counts as strong.
    pub strong_win_rate: f32,
    /// Win rate at or below which (with zero wins) form counts as poor.
    pub poor_win_rate: f32,
    /// Only count a team's home matches for home form (and away matches for away form).
    pub match_venue_role: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            window: 5,
            strong_win_rate: 0.60,
            poor_win_rate: 0.30,
            match_venue_role: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadToHeadConfig {
    pub window: usize,
}

impl Default for HeadToHeadConfig {
    fn default() -> Self {
        Self { window: 10 }
    }
}

/// Key-player heuristic: a short name, or a name containing the marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InjuryConfig {
    pub max_name_len: usize,
    pub key_marker: String,
}

impl Default for InjuryConfig {
    fn default() -> Self {
        Self {
            max_name_len: 20,
            key_marker: "key".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VenueConfig {
    /// Capacity strictly above which the home side gets a stadium insight.
    pub large_stadium_capacity: u32,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            large_stadium_capacity: 50_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub form: FormConfig,
    pub head_to_head: HeadToHeadConfig,
    pub injuries: InjuryConfig,
    pub venue: VenueConfig,
    /// Replaces the built-in sentiment keyword lists when present.
    pub lexicon: Option<Lexicon>,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading engine config from {}", path.display()))?;
        let cfg: EngineConfig = toml::from_str(&data)
            .with_context(|| format!("parsing engine config {}", path.display()))?;
        Ok(cfg.sanitized())
    }

    /// Resolve config with fallbacks:
    /// 1) $FIXTURE_INSIGHTS_CONFIG (must exist)
    /// 2) config/engine.toml
    /// 3) built-in defaults
    pub fn from_env() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_ENGINE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                anyhow::bail!("{ENV_ENGINE_CONFIG_PATH} points to non-existent path {}", pb.display());
            }
            info!(target: "config", path = %pb.display(), "loading engine config");
            return Self::load_from_file(&pb);
        }
        let default_path = PathBuf::from(DEFAULT_ENGINE_CONFIG_PATH);
        if default_path.exists() {
            info!(target: "config", path = DEFAULT_ENGINE_CONFIG_PATH, "loading engine config");
            return Self::load_from_file(&default_path);
        }
        info!(target: "config", "no engine config found, using defaults");
        Ok(Self::default())
    }

    /// Repair values that would break the scoring invariants.
    pub fn sanitized(mut self) -> Self {
        let s = &mut self.scoring;
        s.favored_delta = clamp_delta(s.favored_delta);
        s.opposing_delta = clamp_delta(s.opposing_delta);
        s.baseline = s.baseline.clamp(0, 100);
        s.draw_band = s.draw_band.min(100);

        let f = &mut self.form;
        f.strong_win_rate = f.strong_win_rate.clamp(0.0, 1.0);
        f.poor_win_rate = f.poor_win_rate.clamp(0.0, 1.0);
        if f.poor_win_rate > f.strong_win_rate {
            std::mem::swap(&mut f.poor_win_rate, &mut f.strong_win_rate);
        }
        if f.window == 0 {
            f.window = FormConfig::default().window;
        }
        if self.head_to_head.window == 0 {
            self.head_to_head.window = HeadToHeadConfig::default().window;
        }
        self.injuries.key_marker = self.injuries.key_marker.trim().to_lowercase();
        self
    }
}

/// Magnitude of a score delta, capped at the width of the score range.
fn clamp_delta(d: i32) -> i32 {
    d.unsigned_abs().min(100) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn defaults_match_documented_values() {
        let c = EngineConfig::default();
        assert_eq!(c.scoring.baseline, 50);
        assert_eq!(c.scoring.favored_delta, 15);
        assert_eq!(c.scoring.opposing_delta, 5);
        assert_eq!(c.scoring.draw_band, 10);
        assert_eq!(c.venue.large_stadium_capacity, 50_000);
        assert_eq!(c.injuries.max_name_len, 20);
        assert!(c.lexicon.is_none());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("engine.toml");
        fs::write(
            &p,
            r#"
            [scoring]
            favored_delta = 20

            [venue]
            large_stadium_capacity = 60000
            "#,
        )
        .unwrap();
        let c = EngineConfig::load_from_file(&p).unwrap();
        assert_eq!(c.scoring.favored_delta, 20);
        assert_eq!(c.scoring.opposing_delta, 5);
        assert_eq!(c.venue.large_stadium_capacity, 60_000);
        assert_eq!(c.form, FormConfig::default());
    }

    #[test]
    fn sanitize_repairs_bad_values() {
        let mut c = EngineConfig::default();
        c.scoring.opposing_delta = -5;
        c.form.strong_win_rate = 0.2;
        c.form.poor_win_rate = 0.7;
        c.form.window = 0;
        c.injuries.key_marker = " KEY ".into();
        let c = c.sanitized();
        assert_eq!(c.scoring.opposing_delta, 5);
        assert!((c.form.strong_win_rate - 0.7).abs() < 1e-6);
        assert!((c.form.poor_win_rate - 0.2).abs() < 1e-6);
        assert_eq!(c.form.window, 5);
        assert_eq!(c.injuries.key_marker, "key");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("engine.toml");
        fs::write(&p, "[scoring\nbaseline = ").unwrap();
        assert!(EngineConfig::load_from_file(&p).is_err());
    }

    #[serial_test::serial]
    #[test]
    fn env_path_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("custom.toml");
        fs::write(&p, "[scoring]\ndraw_band = 4\n").unwrap();

        env::set_var(ENV_ENGINE_CONFIG_PATH, p.display().to_string());
        let c = EngineConfig::from_env().unwrap();
        assert_eq!(c.scoring.draw_band, 4);

        env::set_var(ENV_ENGINE_CONFIG_PATH, dir.path().join("missing.toml"));
        assert!(EngineConfig::from_env().is_err());
        env::remove_var(ENV_ENGINE_CONFIG_PATH);
    }

    #[test]
    fn sanitize_bounds_extreme_deltas() {
        let mut c = EngineConfig::default();
        c.scoring.favored_delta = 2_000_000_000;
        c.scoring.opposing_delta = i32::MIN;
        let c = c.sanitized();
        assert_eq!(c.scoring.favored_delta, 100);
        assert_eq!(c.scoring.opposing_delta, 100);

        let mut c = EngineConfig::default();
        c.scoring.opposing_delta = -7;
        assert_eq!(c.sanitized().scoring.opposing_delta, 7);
    }
}
