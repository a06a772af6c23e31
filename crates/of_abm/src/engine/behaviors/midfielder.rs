//! Midfielder decision policy (central and wide midfielders)

use super::RoleSpec;
use crate::engine::actions::Action;
use crate::engine::agent::{Agent, AgentView};
use crate::engine::context::{GameContext, GamePhase};
use crate::engine::types::AgentId;

const ATTACKING_LINE: f64 = 70.0;
const MIDDLE_LINE: f64 = 40.0;
const PRESS_RANGE: f64 = 20.0;

pub static SPEC: RoleSpec = RoleSpec {
    goals: &["control_tempo", "create_chances", "support_defense"],
    plans: &[
        ("attacking", &["through_pass", "support_run", "shoot"]),
        ("defending", &["intercept", "track_back", "press"]),
        ("circulation", &["switch_play", "retain_possession", "recycle_ball"]),
    ],
    liveness: &[
        "eventually_distributes_ball_within_5_seconds",
        "always_provides_passing_option",
        "continuously_adjusts_position",
    ],
    safety: &[
        "never_leaves_central_zone_unoccupied",
        "must_not_attempt_risky_passes_own_third",
        "cannot_ignore_defensive_duties",
    ],
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MidfielderBeliefs {
    pub passing_options: Vec<AgentId>,
    pub support_needed: bool,
    pub transition_opportunity: bool,
}

pub fn decide(agent: &Agent, ctx: &GameContext, visible: &[AgentView]) -> Action {
    if agent.has_ball {
        decide_with_ball(agent, visible)
    } else {
        decide_without_ball(agent, ctx)
    }
}

fn decide_with_ball(agent: &Agent, visible: &[AgentView]) -> Action {
    // "ahead" is measured toward x = 100 for both sides
    let ahead = agent.visible_teammates(visible).filter(|t| t.position.x > agent.position.x).count();

    if agent.position.x > ATTACKING_LINE {
        if ahead > 0 {
            Action::ThroughPass
        } else {
            Action::Shoot
        }
    } else if agent.position.x > MIDDLE_LINE {
        if ahead >= 2 {
            Action::ForwardPass
        } else {
            Action::RetainPossession
        }
    } else {
        Action::SafePass
    }
}

fn decide_without_ball(agent: &Agent, ctx: &GameContext) -> Action {
    match ctx.game_phase {
        GamePhase::Attack => Action::SupportRun,
        GamePhase::Defense => {
            if agent.position.distance_to(&ctx.ball_position) < PRESS_RANGE {
                Action::Press
            } else {
                Action::TrackBack
            }
        }
        GamePhase::Transition | GamePhase::Kickoff => Action::FindSpace,
    }
}
