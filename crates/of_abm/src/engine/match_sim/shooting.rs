//! Shooting System
//!
//! Distance-bucketed conversion against the attacked goal. A converted shot
//! scores immediately and leaves the ball loose where it was struck; a
//! saved shot rebounds around the goal mouth.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::MatchEngine;
use crate::engine::actions::ActionResult;
use crate::engine::probability::{shot_success_probability, SHOT_SCATTER_SIGMA};

impl<R: Rng> MatchEngine<R> {
    pub(crate) fn execute_shot(&mut self, idx: usize) -> ActionResult {
        if !self.agents[idx].has_ball {
            return ActionResult::Failure;
        }

        let team = self.agents[idx].team;
        let goal = team.target_goal();
        let success_prob = shot_success_probability(self.agents[idx].position.distance_to(&goal));

        self.stats.team_mut(team).shots += 1;

        if self.rng.gen::<f64>() < success_prob {
            self.score.increment(team);
            self.release_possession(idx);
            tracing::debug!(team = %team, shooter = %self.agents[idx].id, "shot converted");
            ActionResult::Goal
        } else {
            self.release_possession(idx);
            let dx: f64 = StandardNormal.sample(&mut self.rng);
            let dy: f64 = StandardNormal.sample(&mut self.rng);
            self.pitch
                .ball
                .set_position(goal.offset(dx * SHOT_SCATTER_SIGMA, dy * SHOT_SCATTER_SIGMA));
            ActionResult::Saved
        }
    }
}
