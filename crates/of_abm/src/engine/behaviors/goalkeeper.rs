//! Goalkeeper decision policy
//!
//! Distribution when holding the ball, a save attempt when the ball is
//! close while defending, otherwise positioning on an arc in front of goal
//! biased toward the ball.

use super::RoleSpec;
use crate::engine::actions::Action;
use crate::engine::agent::{Agent, AgentView};
use crate::engine::context::{GameContext, GamePhase};
use crate::engine::pitch::{AreaBounds, HOME_PENALTY_AREA};
use crate::engine::types::Position;

/// Nearest teammate closer than this gets a short pass.
const SHORT_DISTRIBUTION_RANGE: f64 = 20.0;
/// Ball closer than this while defending triggers a save attempt.
const SAVE_RANGE: f64 = 5.0;
/// Re-position once the keeper drifts further than this from the ideal spot.
const POSITION_TOLERANCE: f64 = 2.0;

pub static SPEC: RoleSpec = RoleSpec {
    goals: &["prevent_goals", "distribute_ball", "organize_defense"],
    plans: &[
        ("shot_saving", &["position_for_shot", "dive_to_ball"]),
        ("distribution", &["short_throw", "long_kick", "roll_out"]),
        ("positioning", &["stay_in_area", "narrow_angle"]),
    ],
    liveness: &[
        "eventually_distributes_ball_within_6_seconds",
        "always_attempts_save_when_shot_on_target",
        "continuously_communicates_with_defense",
    ],
    safety: &[
        "never_leaves_penalty_area_during_open_play",
        "must_not_handle_ball_outside_penalty_area",
        "cannot_commit_leaving_goal_undefended",
    ],
};

#[derive(Debug, Clone, PartialEq)]
pub struct GoalkeeperBeliefs {
    pub penalty_area_bounds: AreaBounds,
    pub goal_position: Position,
    pub shot_threat_level: String,
}

impl Default for GoalkeeperBeliefs {
    fn default() -> Self {
        Self {
            penalty_area_bounds: HOME_PENALTY_AREA,
            goal_position: Position::new(0.0, 50.0),
            shot_threat_level: "none".to_string(),
        }
    }
}

pub fn decide(agent: &Agent, ctx: &GameContext, visible: &[AgentView]) -> Action {
    let ball_distance = agent.position.distance_to(&ctx.ball_position);

    if agent.has_ball {
        decide_distribution(agent, visible)
    } else if ball_distance < SAVE_RANGE && ctx.game_phase == GamePhase::Defense {
        Action::SaveAttempt
    } else {
        decide_positioning(agent, ctx)
    }
}

fn decide_distribution(agent: &Agent, visible: &[AgentView]) -> Action {
    let nearest = agent
        .visible_teammates(visible)
        .map(|t| agent.position.distance_to(&t.position))
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))));

    match nearest {
        Some(d) if d < SHORT_DISTRIBUTION_RANGE => Action::ShortPass,
        _ => Action::LongKick,
    }
}

/// Ideal spot for the current ball position.
pub fn optimal_position(ball: &Position) -> Position {
    Position::new((ball.x * 0.15).clamp(2.0, 14.0), 50.0 + (ball.y - 50.0) * 0.3)
}

fn decide_positioning(agent: &Agent, ctx: &GameContext) -> Action {
    let target = optimal_position(&ctx.ball_position);
    if agent.position.distance_to(&target) > POSITION_TOLERANCE {
        Action::MoveToPosition
    } else {
        Action::MaintainPosition
    }
}
