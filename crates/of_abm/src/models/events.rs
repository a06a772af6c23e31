//! Event record schema
//!
//! One [`EventRecord`] per logged action. The field names and their order
//! are the contract with downstream process-mining and reporting tools.

use serde::{Deserialize, Serialize};

use crate::engine::actions::{Action, ActionResult};
use crate::engine::agent::PressureLevel;
use crate::engine::pitch::{PitchZone, SubZone};
use crate::engine::types::TeamSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    Possession,
    Pressing,
}

/// Score situation of the acting team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    Winning,
    Losing,
    Drawing,
}

impl GameState {
    pub fn from_differential(diff: i64) -> Self {
        match diff {
            d if d > 0 => GameState::Winning,
            d if d < 0 => GameState::Losing,
            _ => GameState::Drawing,
        }
    }
}

/// Always `equal`; player counts never change during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericalSituation {
    #[default]
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    // Case identification
    pub case_id: String,
    pub process_type: ProcessType,

    // Event identification
    pub event_id: String,
    /// Match clock in ms
    pub timestamp: u64,
    pub sequence_number: u32,

    pub activity: Action,
    pub activity_result: ActionResult,

    pub player_id: String,
    /// Formation slot tag of the actor
    pub player_role: String,
    pub team: TeamSide,

    // Spatial context: start is the actor, end is the ball after the action
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub pitch_zone: PitchZone,
    pub sub_zone: SubZone,

    // Tactical context
    pub pressure_level: PressureLevel,
    pub numerical_situation: NumericalSituation,
    pub team_formation: String,
    pub game_state: GameState,
    /// Seconds
    pub time_remaining: u64,

    // Performance attributes
    /// ms
    pub action_duration: u64,
    pub distance_covered: f64,
    pub opponents_beaten: u32,
    pub xg_added: f64,
}

impl EventRecord {
    /// Column order of the flat event table.
    pub const FIELD_NAMES: [&'static str; 25] = [
        "case_id",
        "process_type",
        "event_id",
        "timestamp",
        "sequence_number",
        "activity",
        "activity_result",
        "player_id",
        "player_role",
        "team",
        "start_x",
        "start_y",
        "end_x",
        "end_y",
        "pitch_zone",
        "sub_zone",
        "pressure_level",
        "numerical_situation",
        "team_formation",
        "game_state",
        "time_remaining",
        "action_duration",
        "distance_covered",
        "opponents_beaten",
        "xg_added",
    ];
}
