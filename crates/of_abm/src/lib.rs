//! # of_abm - Agent-Based Football Match Simulation
//!
//! Twenty-two autonomous agents on a continuous 100x100 pitch, each with
//! role-specific beliefs and a decision policy, driven by a fixed-timestep
//! loop. The product is a case-grouped event log: one row per action,
//! segmented into possessions for downstream process analysis.
//!
//! ## Features
//! - Deterministic simulation (same seed = same log)
//! - Role policies for goalkeeper, centre-back, midfielder and striker
//! - Formation templates as data (built-in 4-4-2, JSON-loadable)
//! - JSON API for batch runs
//!
//! ```rust
//! use of_abm::{MatchEngine, SimulationConfig};
//!
//! let engine = MatchEngine::new(SimulationConfig::minutes(1).with_seed(7))?;
//! let result = engine.run();
//! assert_eq!(result.events[0].activity.as_str(), "kickoff");
//! # Ok::<(), of_abm::SimError>(())
//! ```

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod tactics;

pub use api::{simulate_match, simulate_match_json, MatchRequest, MatchResponse};
pub use engine::{MatchEngine, SimulationConfig};
pub use error::{Result, SimError};
pub use models::{group_by_case, CaseTrace, EventRecord, MatchResult};
pub use tactics::{FormationRegistry, FormationTemplate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
