//! JSON entry points
//!
//! Request in, event log out. Extra formation templates can ride along with
//! the request and are registered before the teams are built.

use serde::{Deserialize, Serialize};

use crate::engine::config::SimulationConfig;
use crate::engine::context::Score;
use crate::engine::match_sim::MatchEngine;
use crate::engine::stats::MatchStats;
use crate::error::{Result, SimError};
use crate::models::{EventRecord, MatchResult};
use crate::tactics::{FormationRegistry, FormationTemplate};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub config: SimulationConfig,
    #[serde(default)]
    pub formations: Vec<FormationTemplate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub score: Score,
    pub event_count: usize,
    pub case_count: usize,
    pub statistics: MatchStats,
    pub events: Vec<EventRecord>,
}

impl From<MatchResult> for MatchResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed: result.seed,
            score: result.score,
            event_count: result.event_count(),
            case_count: result.case_count(),
            statistics: result.stats,
            events: result.events,
        }
    }
}

/// Run a full match with the default formations.
pub fn simulate_match(config: SimulationConfig) -> Result<MatchResult> {
    Ok(MatchEngine::new(config)?.run())
}

pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::InvalidConfig(format!(
            "unsupported schema version: {}",
            request.schema_version
        )));
    }

    let mut registry = FormationRegistry::default();
    for template in request.formations {
        registry.register(template);
    }

    let result = MatchEngine::with_registry(request.config, &registry)?.run();
    Ok(serde_json::to_string(&MatchResponse::from(result))?)
}
