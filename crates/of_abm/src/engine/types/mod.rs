//! Engine Types
//!
//! Spatial primitives shared by the pitch, the agents and the event log.

pub mod position;
pub use position::{Position, TeamSide, PITCH_SIZE};

/// Agent identifier, e.g. `home_CB_L_1`.
pub type AgentId = String;
