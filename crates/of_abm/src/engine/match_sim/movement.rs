//! Off-ball movement
//!
//! Deterministic relocation; no draws.

use rand::Rng;

use super::MatchEngine;
use crate::engine::actions::{Action, ActionResult};
use crate::engine::types::{Position, TeamSide};

/// Fraction of the remaining gap covered per tick
const MOVE_FRACTION: f64 = 0.1;
/// Track-back drifts toward the centre line more slowly than it drops
const TRACK_BACK_LATERAL_FRACTION: f64 = 0.05;

/// x a tracking-back player drops toward.
fn defensive_depth(team: TeamSide) -> f64 {
    match team {
        TeamSide::Home => 25.0,
        TeamSide::Away => 75.0,
    }
}

impl<R: Rng> MatchEngine<R> {
    pub(crate) fn execute_movement(&mut self, idx: usize, action: Action) -> ActionResult {
        let ball = self.pitch.ball.position;
        let agent = &mut self.agents[idx];
        let pos = agent.position;

        let next = match action {
            Action::SupportRun => pos.step_toward(&ball, MOVE_FRACTION),
            Action::TrackBack => Position::new(
                pos.x + (defensive_depth(agent.team) - pos.x) * MOVE_FRACTION,
                pos.y + (50.0 - pos.y) * TRACK_BACK_LATERAL_FRACTION,
            ),
            Action::MoveToPosition => pos.step_toward(&agent.home_position, MOVE_FRACTION),
            _ => pos,
        };

        agent.position = next.clamped();
        ActionResult::Success
    }
}
