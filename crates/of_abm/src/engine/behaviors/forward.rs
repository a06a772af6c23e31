//! Striker decision policy

use super::RoleSpec;
use crate::engine::actions::Action;
use crate::engine::agent::{Agent, AgentView, PressureLevel};
use crate::engine::context::{GameContext, GamePhase};
use crate::engine::types::Position;

const SHOOTING_RANGE: f64 = 20.0;
const SHOOTING_LINE: f64 = 80.0;
const LAY_OFF_LINE: f64 = 60.0;
const RUN_BEHIND_LINE: f64 = 70.0;

/// Strikers always judge range against the x = 100 goal.
const STRIKER_TARGET_GOAL: Position = Position::new(100.0, 50.0);

pub static SPEC: RoleSpec = RoleSpec {
    goals: &["score_goals", "create_space", "hold_up_play"],
    plans: &[
        ("scoring", &["shoot", "one_touch_finish", "header"]),
        ("creating", &["run_behind", "drop_deep", "drift_wide"]),
        ("linking", &["hold_up", "lay_off", "flick_on"]),
    ],
    liveness: &[
        "eventually_attempts_shot_when_in_scoring_position",
        "always_makes_runs_to_stretch_defense",
        "continuously_holds_up_ball_for_support",
    ],
    safety: &[
        "never_drops_too_deep_leaving_attack_without_focal_point",
        "must_not_attempt_shots_from_impossible_angles",
        "cannot_ignore_link_up_play_responsibilities",
    ],
};

#[derive(Debug, Clone, PartialEq)]
pub struct StrikerBeliefs {
    pub goal_distance: f64,
    pub shooting_angle: f64,
    pub marker_distance: f64,
}

impl Default for StrikerBeliefs {
    fn default() -> Self {
        Self { goal_distance: 100.0, shooting_angle: 0.0, marker_distance: 100.0 }
    }
}

pub fn decide(agent: &Agent, ctx: &GameContext, visible: &[AgentView]) -> Action {
    if agent.has_ball {
        decide_with_ball(agent, visible)
    } else {
        decide_without_ball(agent, ctx)
    }
}

fn decide_with_ball(agent: &Agent, visible: &[AgentView]) -> Action {
    let goal_distance = agent.position.distance_to(&STRIKER_TARGET_GOAL);

    if goal_distance < SHOOTING_RANGE && agent.position.x > SHOOTING_LINE {
        Action::Shoot
    } else if agent.pressure_level() == PressureLevel::Low {
        Action::DribbleForward
    } else if agent.visible_teammates(visible).any(|t| t.position.x > LAY_OFF_LINE) {
        Action::LayOff
    } else {
        Action::HoldUp
    }
}

fn decide_without_ball(agent: &Agent, ctx: &GameContext) -> Action {
    if ctx.game_phase == GamePhase::Attack {
        if agent.position.x < RUN_BEHIND_LINE {
            Action::RunBehind
        } else {
            Action::FindSpace
        }
    } else {
        Action::PressDefender
    }
}
