// src/config/mod.rs
//! Runtime configuration. Everything tunable in the engine lives in [`EngineConfig`].

pub mod engine;

pub use engine::{
    EngineConfig, FormConfig, HeadToHeadConfig, InjuryConfig, ScoringConfig, VenueConfig,
    DEFAULT_ENGINE_CONFIG_PATH, ENV_ENGINE_CONFIG_PATH,
};
