//! Pass Execution
//!
//! Every pass-family action resolves the same way: nearest teammate,
//! distance/pressure success probability, one uniform draw.
//! A failed pass leaves the ball loose near the midpoint of the pass line.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::MatchEngine;
use crate::engine::actions::ActionResult;
use crate::engine::probability::{pass_success_probability, PASS_SCATTER_SIGMA};

impl<R: Rng> MatchEngine<R> {
    /// Nearest teammate of `idx`. Ties keep team order.
    pub(crate) fn nearest_teammate(&self, idx: usize) -> Option<usize> {
        let passer = &self.agents[idx];
        self.team_range(passer.team)
            .filter(|&i| i != idx)
            .map(|i| (i, passer.position.distance_to(&self.agents[i].position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub(crate) fn execute_pass(&mut self, idx: usize) -> ActionResult {
        if !self.agents[idx].has_ball {
            return ActionResult::Failure;
        }
        let Some(target) = self.nearest_teammate(idx) else {
            return ActionResult::Failure;
        };

        let from = self.agents[idx].position;
        let to = self.agents[target].position;
        let team = self.agents[idx].team;
        let success_prob = pass_success_probability(from.distance_to(&to), self.agents[idx].pressure_level());

        self.stats.team_mut(team).pass_attempts += 1;

        if self.rng.gen::<f64>() < success_prob {
            self.agents[idx].has_ball = false;
            self.agents[target].has_ball = true;
            self.pitch.ball.possessor = Some(self.agents[target].id.clone());
            self.pitch.ball.set_position(to);
            self.stats.team_mut(team).passes_completed += 1;
            ActionResult::Success
        } else {
            self.release_possession(idx);
            let mid = from.midpoint(&to);
            let dx: f64 = StandardNormal.sample(&mut self.rng);
            let dy: f64 = StandardNormal.sample(&mut self.rng);
            self.pitch
                .ball
                .set_position(mid.offset(dx * PASS_SCATTER_SIGMA, dy * PASS_SCATTER_SIGMA));
            ActionResult::Failure
        }
    }
}
