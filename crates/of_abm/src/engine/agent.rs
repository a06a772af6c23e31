//! Football agents
//!
//! Every agent carries a belief store, a goal list, a plan catalog and the
//! liveness/safety properties its role is meant to satisfy. The property
//! lists are descriptive only: nothing in the decision logic or the engine
//! checks them.
//!
//! Perception is total. The engine hands each agent a view of every other
//! agent on the pitch; there is no occlusion or vision range.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::actions::Action;
use super::behaviors::{self, RoleBeliefs, RoleSpec};
use super::context::GameContext;
use super::types::{AgentId, Position, TeamSide};

/// Decisions kept per agent.
pub const DECISION_HISTORY_LEN: usize = 32;

/// Starting stamina. Not drained during a match.
pub const FULL_STAMINA: f64 = 100.0;

/// Nearest-opponent distance assumed when no opponent is visible.
pub const NO_OPPONENT_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    CentreBack,
    Midfielder,
    Striker,
}

impl Role {
    /// Role for a formation slot tag (`GK`, `CB_L`, `ST1`, ...).
    pub fn from_slot_tag(tag: &str) -> Option<Role> {
        match tag {
            "GK" => Some(Role::Goalkeeper),
            "CB" | "CB_L" | "CB_R" | "LB" | "RB" => Some(Role::CentreBack),
            "CM" | "CM_L" | "CM_R" | "LM" | "RM" | "LW" | "RW" | "CDM" | "CAM" => {
                Some(Role::Midfielder)
            }
            "ST" | "ST1" | "ST2" | "CF" => Some(Role::Striker),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Extreme,
}

impl PressureLevel {
    /// Bucket the nearest-opponent distance of a ball holder.
    pub fn from_distance(nearest_opponent: f64) -> Self {
        if nearest_opponent < 2.0 {
            PressureLevel::Extreme
        } else if nearest_opponent < 5.0 {
            PressureLevel::High
        } else if nearest_opponent < 10.0 {
            PressureLevel::Medium
        } else {
            PressureLevel::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PressureLevel::None => "none",
            PressureLevel::Low => "low",
            PressureLevel::Medium => "medium",
            PressureLevel::High => "high",
            PressureLevel::Extreme => "extreme",
        }
    }
}

/// What one agent sees of another.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentView {
    pub id: AgentId,
    pub team: TeamSide,
    pub role: Role,
    pub position: Position,
    pub has_ball: bool,
}

/// Beliefs every role keeps, refreshed each tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Beliefs {
    pub ball_position: Position,
    pub teammates: Vec<AgentId>,
    pub opponents: Vec<AgentId>,
    pub pressure_level: PressureLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRecord {
    pub match_time_ms: u64,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    /// Formation slot tag, e.g. `CB_L`
    pub slot: String,
    pub role: Role,
    pub team: TeamSide,
    pub position: Position,
    /// Formation position
    pub home_position: Position,
    pub has_ball: bool,
    pub stamina: f64,
    pub beliefs: Beliefs,
    pub role_beliefs: RoleBeliefs,
    pub spec: &'static RoleSpec,
    pub decision_history: VecDeque<DecisionRecord>,
}

impl Agent {
    pub fn new(
        id: impl Into<AgentId>,
        slot: impl Into<String>,
        role: Role,
        team: TeamSide,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            slot: slot.into(),
            role,
            team,
            position,
            home_position: position,
            has_ball: false,
            stamina: FULL_STAMINA,
            beliefs: Beliefs::default(),
            role_beliefs: RoleBeliefs::for_role(role),
            spec: behaviors::spec_for(role),
            decision_history: VecDeque::with_capacity(DECISION_HISTORY_LEN),
        }
    }

    pub fn goals(&self) -> &'static [&'static str] {
        self.spec.goals
    }

    pub fn plans(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.spec.plans
    }

    pub fn liveness_goals(&self) -> &'static [&'static str] {
        self.spec.liveness
    }

    pub fn safety_constraints(&self) -> &'static [&'static str] {
        self.spec.safety
    }

    pub fn view(&self) -> AgentView {
        AgentView {
            id: self.id.clone(),
            team: self.team,
            role: self.role,
            position: self.position,
            has_ball: self.has_ball,
        }
    }

    pub fn pressure_level(&self) -> PressureLevel {
        self.beliefs.pressure_level
    }

    pub fn update_beliefs(&mut self, context: &GameContext, visible: &[AgentView]) {
        self.beliefs.ball_position = context.ball_position;
        self.beliefs.teammates =
            visible.iter().filter(|a| a.team == self.team).map(|a| a.id.clone()).collect();
        self.beliefs.opponents =
            visible.iter().filter(|a| a.team != self.team).map(|a| a.id.clone()).collect();
        self.beliefs.pressure_level = self.calculate_pressure(visible);
    }

    fn calculate_pressure(&self, visible: &[AgentView]) -> PressureLevel {
        if !self.has_ball {
            return PressureLevel::None;
        }
        let nearest = visible
            .iter()
            .filter(|a| a.team != self.team)
            .map(|a| self.position.distance_to(&a.position))
            .fold(NO_OPPONENT_DISTANCE, f64::min);
        PressureLevel::from_distance(nearest)
    }

    pub fn decide_action(&self, context: &GameContext, visible: &[AgentView]) -> Action {
        match self.role {
            Role::Goalkeeper => behaviors::goalkeeper::decide(self, context, visible),
            Role::CentreBack => behaviors::defender::decide(self, context, visible),
            Role::Midfielder => behaviors::midfielder::decide(self, context, visible),
            Role::Striker => behaviors::forward::decide(self, context, visible),
        }
    }

    pub fn record_decision(&mut self, match_time_ms: u64, action: Action) {
        if self.decision_history.len() == DECISION_HISTORY_LEN {
            self.decision_history.pop_front();
        }
        self.decision_history.push_back(DecisionRecord { match_time_ms, action });
    }

    /// Teammates among the visible agents.
    pub fn visible_teammates<'a>(
        &'a self,
        visible: &'a [AgentView],
    ) -> impl Iterator<Item = &'a AgentView> + 'a {
        visible.iter().filter(move |a| a.team == self.team && a.id != self.id)
    }
}
