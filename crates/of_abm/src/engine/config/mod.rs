//! # Simulation Configuration
//!
//! Everything the engine reads at setup: formations, clock and seed.
//!
//! ## Usage
//! ```rust
//! use of_abm::engine::config::SimulationConfig;
//!
//! let config = SimulationConfig::minutes(2).with_seed(7);
//! assert_eq!(config.match_duration_ms, 120_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::tactics::DEFAULT_FORMATION;

pub const DEFAULT_MATCH_DURATION_MS: u64 = 90 * 60 * 1000;
pub const DEFAULT_TIMESTEP_MS: u64 = 100;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub home_formation: String,
    pub away_formation: String,
    pub match_duration_ms: u64,
    /// Fixed tick length
    pub timestep_ms: u64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            home_formation: DEFAULT_FORMATION.to_string(),
            away_formation: DEFAULT_FORMATION.to_string(),
            match_duration_ms: DEFAULT_MATCH_DURATION_MS,
            timestep_ms: DEFAULT_TIMESTEP_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    /// Default config with a match length in minutes.
    pub fn minutes(minutes: u64) -> Self {
        Self { match_duration_ms: minutes * 60 * 1000, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_formations(mut self, home: &str, away: &str) -> Self {
        self.home_formation = home.to_string();
        self.away_formation = away.to_string();
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timestep_ms == 0 {
            return Err(SimError::InvalidConfig("timestep_ms must be positive".to_string()));
        }
        if self.match_duration_ms == 0 {
            return Err(SimError::InvalidConfig("match_duration_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Physics step in seconds.
    pub fn timestep_secs(&self) -> f64 {
        self.timestep_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.home_formation, "4-4-2");
        assert_eq!(config.match_duration_ms, 5_400_000);
        assert_eq!(config.timestep_ms, 100);
        assert!((config.timestep_secs() - 0.1).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SimulationConfig::from_json(r#"{"seed": 7, "match_duration_ms": 120000}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.match_duration_ms, 120_000);
        assert_eq!(config.away_formation, "4-4-2");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SimulationConfig::from_json(r#"{"timestep_ms": 0}"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));

        let zero = SimulationConfig { match_duration_ms: 0, ..SimulationConfig::default() };
        assert!(zero.validate().is_err());
    }
}
