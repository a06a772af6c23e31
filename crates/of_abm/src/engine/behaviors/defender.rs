//! Centre-back decision policy (also used for full-backs)
//!
//! On the ball the choice is driven by pressure: clear under heavy
//! pressure, a short pass under medium pressure, otherwise look for a
//! teammate well ahead. Off the ball: close down a nearby ball while
//! defending, hold shape while attacking, otherwise track runners.

use super::RoleSpec;
use crate::engine::actions::Action;
use crate::engine::agent::{Agent, AgentView, PressureLevel};
use crate::engine::context::{GameContext, GamePhase};
use crate::engine::types::AgentId;

/// A teammate this far ahead (in x) is a forward-pass option.
const FORWARD_OPTION_MARGIN: f64 = 10.0;
const CLOSE_DOWN_RANGE: f64 = 15.0;

pub static SPEC: RoleSpec = RoleSpec {
    goals: &["defend_goal", "win_aerial_duels", "start_build_up"],
    plans: &[
        ("defending", &["close_down", "intercept", "clear_ball"]),
        ("build_up", &["short_pass", "long_pass", "carry_forward"]),
        ("positioning", &["hold_line", "cover_partner", "mark_opponent"]),
    ],
    liveness: &[
        "eventually_clears_ball_when_under_pressure",
        "always_tracks_opponent_runs",
        "continuously_maintains_defensive_line",
    ],
    safety: &[
        "never_both_centre_backs_commit_to_tackle",
        "must_not_leave_penalty_area_unmarked",
        "cannot_venture_beyond_halfway_when_partner_advanced",
    ],
};

#[derive(Debug, Clone, PartialEq)]
pub struct CentreBackBeliefs {
    pub defensive_line: f64,
    pub marking_assignment: Option<AgentId>,
    pub cover_partner: Option<AgentId>,
}

impl Default for CentreBackBeliefs {
    fn default() -> Self {
        Self { defensive_line: 25.0, marking_assignment: None, cover_partner: None }
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
    match agent.pressure_level() {
        PressureLevel::High | PressureLevel::Extreme => Action::ClearBall,
        PressureLevel::Medium => Action::ShortPass,
        PressureLevel::Low | PressureLevel::None => {
            let has_advanced_option = agent
                .visible_teammates(visible)
                .any(|t| t.position.x > agent.position.x + FORWARD_OPTION_MARGIN);
            if has_advanced_option {
                Action::ForwardPass
            } else {
                Action::SafePass
            }
        }
    }
}

fn decide_without_ball(agent: &Agent, ctx: &GameContext) -> Action {
    let ball_distance = agent.position.distance_to(&ctx.ball_position);

    if ball_distance < CLOSE_DOWN_RANGE && ctx.game_phase == GamePhase::Defense {
        Action::CloseDown
    } else if ctx.game_phase == GamePhase::Attack {
        Action::MaintainPosition
    } else {
        Action::TrackRunner
    }
}
