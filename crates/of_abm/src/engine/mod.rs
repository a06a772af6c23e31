pub mod actions;
pub mod agent;
pub mod ball;
pub mod behaviors;
pub mod config;
pub mod context;
pub mod match_sim;
pub mod pitch;
pub mod probability;
pub mod stats;
pub mod types;

pub use actions::{Action, ActionKind, ActionResult};
pub use agent::{Agent, AgentView, PressureLevel, Role};
pub use ball::Ball;
pub use config::SimulationConfig;
pub use context::{GameContext, GamePhase, Score};
pub use match_sim::MatchEngine;
pub use pitch::{Pitch, PitchZone, SubZone};
pub use stats::{MatchStats, TeamStats};
pub use types::{AgentId, Position, TeamSide};
