//! Dribbling
//!
//! A carry moves the holder 2-5 units toward the attacked goal with a small
//! lateral jitter. The ball travels with them.

use rand::Rng;

use super::MatchEngine;
use crate::engine::actions::ActionResult;
use crate::engine::types::Position;

const CARRY_MIN: f64 = 2.0;
const CARRY_MAX: f64 = 5.0;
const LATERAL_JITTER: f64 = 2.0;

impl<R: Rng> MatchEngine<R> {
    pub(crate) fn execute_dribble(&mut self, idx: usize) -> ActionResult {
        if !self.agents[idx].has_ball {
            return ActionResult::Failure;
        }

        let direction = self.agents[idx].team.attack_direction();
        let forward = self.rng.gen_range(CARRY_MIN..CARRY_MAX);
        let lateral = self.rng.gen_range(-LATERAL_JITTER..LATERAL_JITTER);

        let start = self.agents[idx].position;
        let end = Position::new(start.x + direction * forward, start.y + lateral).clamped();

        self.agents[idx].position = end;
        self.pitch.ball.set_position(end);
        ActionResult::Success
    }
}
