//! Defensive actions
//!
//! Intercept attempts within range roll once for the steal. Everything else
//! (and a failed steal) closes 20% of the gap to the ball. Always reported as
//! success.

use rand::Rng;

use super::MatchEngine;
use crate::engine::actions::{Action, ActionResult};
use crate::engine::probability::{INTERCEPT_RANGE, INTERCEPT_SUCCESS};

const CLOSE_DOWN_FRACTION: f64 = 0.2;

impl<R: Rng> MatchEngine<R> {
    pub(crate) fn execute_defensive_action(&mut self, idx: usize, action: Action) -> ActionResult {
        let ball = self.pitch.ball.position;
        let distance = self.agents[idx].position.distance_to(&ball);

        if action == Action::Intercept
            && distance < INTERCEPT_RANGE
            && self.rng.gen::<f64>() < INTERCEPT_SUCCESS
        {
            self.steal_ball(idx);
            return ActionResult::Success;
        }

        let agent = &mut self.agents[idx];
        agent.position = agent.position.step_toward(&ball, CLOSE_DOWN_FRACTION).clamped();
        ActionResult::Success
    }

    fn steal_ball(&mut self, idx: usize) {
        for agent in &mut self.agents {
            agent.has_ball = false;
        }
        let agent = &mut self.agents[idx];
        agent.has_ball = true;
        self.pitch.ball.possessor = Some(agent.id.clone());
        self.pitch.ball.set_position(agent.position);
        tracing::debug!(agent = %agent.id, "ball won");
    }
}
