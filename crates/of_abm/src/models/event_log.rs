//! Possession-segmented event logger
//!
//! Every logged action becomes one [`EventRecord`]. Records are grouped
//! into cases (possessions): a new case opens when no possession exists
//! yet, when the acting team differs from the team in possession, or when
//! a pass, dribble or shot fails.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::events::{EventRecord, GameState, NumericalSituation, ProcessType};
use crate::engine::actions::{Action, ActionKind, ActionResult};
use crate::engine::agent::Agent;
use crate::engine::context::{GameContext, GamePhase};
use crate::engine::pitch::{PitchZone, SubZone};
use crate::engine::probability::shot_xg;
use crate::engine::types::{Position, TeamSide};

/// xG credited to a completed pass ending beyond this x.
const ATTACKING_PASS_LINE: f64 = 67.0;
const ATTACKING_PASS_XG: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct EventLogger {
    events: Vec<EventRecord>,
    current_case: u32,
    event_counter: u64,
    possession_team: Option<TeamSide>,
    possession_start_ms: u64,
    sequence: u32,
    action_duration_ms: u64,
}

impl EventLogger {
    /// `action_duration_ms` is stamped on every record.
    pub fn new(action_duration_ms: u64) -> Self {
        Self {
            events: Vec::new(),
            current_case: 0,
            event_counter: 0,
            possession_team: None,
            possession_start_ms: 0,
            sequence: 0,
            action_duration_ms,
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn current_case(&self) -> u32 {
        self.current_case
    }

    pub fn possession_team(&self) -> Option<TeamSide> {
        self.possession_team
    }

    /// Match time at which the current possession began.
    pub fn possession_start_ms(&self) -> u64 {
        self.possession_start_ms
    }

    fn is_possession_change(&self, team: TeamSide, action: Action, result: ActionResult) -> bool {
        match self.possession_team {
            None => true,
            Some(current) if current != team => true,
            Some(_) => {
                matches!(action.kind(), ActionKind::Pass | ActionKind::Dribble | ActionKind::Shot)
                    && result == ActionResult::Failure
            }
        }
    }

    /// Append one record. `ball` is the ball position after the action.
    pub fn log_event(
        &mut self,
        agent: &Agent,
        action: Action,
        result: ActionResult,
        ball: Position,
        ctx: &GameContext,
    ) -> &EventRecord {
        if self.is_possession_change(agent.team, action, result) {
            self.current_case += 1;
            self.possession_team = Some(agent.team);
            self.possession_start_ms = ctx.match_time_ms;
            trace!(
                case = self.current_case,
                team = %agent.team,
                start_ms = self.possession_start_ms,
                "possession change"
            );
            self.sequence = 1;
        } else {
            self.sequence += 1;
        }

        let record = EventRecord {
            case_id: format!("possession_{:03}", self.current_case),
            process_type: process_type(action, ctx.game_phase),
            event_id: format!("evt_{:06}", self.event_counter),
            timestamp: ctx.match_time_ms,
            sequence_number: self.sequence,
            activity: action,
            activity_result: result,
            player_id: agent.id.clone(),
            player_role: agent.slot.clone(),
            team: agent.team,
            start_x: agent.position.x,
            start_y: agent.position.y,
            end_x: ball.x,
            end_y: ball.y,
            pitch_zone: PitchZone::from_x(ball.x),
            sub_zone: SubZone::from_y(ball.y),
            pressure_level: agent.pressure_level(),
            numerical_situation: NumericalSituation::Equal,
            team_formation: ctx.formation.clone(),
            game_state: GameState::from_differential(ctx.score.differential(agent.team)),
            time_remaining: ctx.time_remaining_s,
            action_duration: self.action_duration_ms,
            distance_covered: agent.position.distance_to(&ball),
            opponents_beaten: 0,
            xg_added: xg_added(action, result, &ball),
        };

        self.event_counter += 1;
        self.events.push(record);
        &self.events[self.events.len() - 1]
    }
}

/// Pressing actions out of an attacking phase are pressing; everything
/// else, kickoffs included, is possession play.
pub fn process_type(action: Action, phase: GamePhase) -> ProcessType {
    if action.is_pressing() && phase != GamePhase::Attack {
        ProcessType::Pressing
    } else {
        ProcessType::Possession
    }
}

pub fn xg_added(action: Action, result: ActionResult, ball: &Position) -> f64 {
    match action.kind() {
        ActionKind::Shot if result == ActionResult::Goal => 1.0,
        ActionKind::Shot => shot_xg(ball),
        ActionKind::Pass if result == ActionResult::Success && ball.x > ATTACKING_PASS_LINE => {
            ATTACKING_PASS_XG
        }
        _ => 0.0,
    }
}

/// One possession regrouped for process-style analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseTrace {
    pub case_id: String,
    pub team: TeamSide,
    pub start_ms: u64,
    pub end_ms: u64,
    pub activities: Vec<Action>,
}

/// Regroup a row log by case id, in order of first appearance.
pub fn group_by_case(events: &[EventRecord]) -> Vec<CaseTrace> {
    let mut traces: Vec<CaseTrace> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for event in events {
        match index.get(event.case_id.as_str()) {
            Some(&i) => {
                let trace = &mut traces[i];
                trace.end_ms = trace.end_ms.max(event.timestamp);
                trace.activities.push(event.activity);
            }
            None => {
                index.insert(event.case_id.as_str(), traces.len());
                traces.push(CaseTrace {
                    case_id: event.case_id.clone(),
                    team: event.team,
                    start_ms: event.timestamp,
                    end_ms: event.timestamp,
                    activities: vec![event.activity],
                });
            }
        }
    }

    traces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::agent::{PressureLevel, Role};
    use crate::engine::context::Score;

    fn ctx(time: u64, phase: GamePhase) -> GameContext {
        GameContext {
            match_time_ms: time,
            time_remaining_s: 120 - time / 1000,
            score: Score::default(),
            ball_position: Position::CENTER,
            game_phase: phase,
            formation: "4-4-2".to_string(),
        }
    }

    fn agent(id: &str, team: TeamSide) -> Agent {
        Agent::new(id, "CM_L", Role::Midfielder, team, Position::new(50.0, 35.0))
    }

    #[test]
    fn test_first_event_opens_case_one() {
        let mut logger = EventLogger::new(100);
        let home = agent("home_CM_L_5", TeamSide::Home);
        let record = logger.log_event(&home, Action::Kickoff, ActionResult::Success, Position::CENTER, &ctx(0, GamePhase::Attack));
        assert_eq!(record.case_id, "possession_001");
        assert_eq!(record.event_id, "evt_000000");
        assert_eq!(record.sequence_number, 1);
        assert_eq!(record.action_duration, 100);
    }

    #[test]
    fn test_possession_start_follows_case_changes() {
        let mut logger = EventLogger::new(100);
        let home = agent("home_CM_L_5", TeamSide::Home);
        let away = agent("away_CM_L_5", TeamSide::Away);

        logger.log_event(&home, Action::Kickoff, ActionResult::Success, Position::CENTER, &ctx(0, GamePhase::Attack));
        logger.log_event(&home, Action::SupportRun, ActionResult::Success, Position::CENTER, &ctx(300, GamePhase::Attack));
        assert_eq!(logger.possession_start_ms(), 0);

        logger.log_event(&away, Action::Press, ActionResult::Success, Position::CENTER, &ctx(700, GamePhase::Defense));
        assert_eq!(logger.possession_start_ms(), 700);
        assert_eq!(group_by_case(logger.events())[1].start_ms, logger.possession_start_ms());
    }

    #[test]
    fn test_case_segmentation() {
        let mut logger = EventLogger::new(100);
        let home = agent("home_CM_L_5", TeamSide::Home);
        let away = agent("away_CM_L_16", TeamSide::Away);
        let c = ctx(100, GamePhase::Transition);

        logger.log_event(&home, Action::Kickoff, ActionResult::Success, Position::CENTER, &c);
        logger.log_event(&home, Action::SupportRun, ActionResult::Success, Position::CENTER, &c);
        // unsupported action failing does not split the case
        logger.log_event(&home, Action::FindSpace, ActionResult::Failure, Position::CENTER, &c);
        assert_eq!(logger.current_case(), 1);
        assert_eq!(logger.events()[2].sequence_number, 3);

        // failed pass splits even within the same team
        logger.log_event(&home, Action::ShortPass, ActionResult::Failure, Position::CENTER, &c);
        assert_eq!(logger.current_case(), 2);
        assert_eq!(logger.events()[3].sequence_number, 1);

        // a saved shot is not a failure
        logger.log_event(&home, Action::Shoot, ActionResult::Saved, Position::CENTER, &c);
        assert_eq!(logger.current_case(), 2);

        // team change
        logger.log_event(&away, Action::Press, ActionResult::Success, Position::CENTER, &c);
        assert_eq!(logger.current_case(), 3);
        assert_eq!(logger.possession_team(), Some(TeamSide::Away));
        assert_eq!(logger.events()[5].case_id, "possession_003");
        assert_eq!(logger.events()[5].event_id, "evt_000005");
    }

    #[test]
    fn test_process_type() {
        assert_eq!(process_type(Action::Press, GamePhase::Defense), ProcessType::Pressing);
        assert_eq!(process_type(Action::CloseDown, GamePhase::Transition), ProcessType::Pressing);
        assert_eq!(process_type(Action::Intercept, GamePhase::Attack), ProcessType::Possession);
        assert_eq!(process_type(Action::Kickoff, GamePhase::Defense), ProcessType::Possession);
        assert_eq!(process_type(Action::SupportRun, GamePhase::Defense), ProcessType::Possession);
    }

    #[test]
    fn test_xg_added() {
        assert_eq!(xg_added(Action::Shoot, ActionResult::Goal, &Position::CENTER), 1.0);
        assert_eq!(xg_added(Action::Shoot, ActionResult::Saved, &Position::new(90.1, 50.0)), 0.4);
        assert_eq!(xg_added(Action::Shoot, ActionResult::Saved, &Position::new(75.0, 50.0)), 0.05);
        assert_eq!(xg_added(Action::ThroughPass, ActionResult::Success, &Position::new(70.0, 50.0)), 0.01);
        assert_eq!(xg_added(Action::ThroughPass, ActionResult::Success, &Position::new(67.0, 50.0)), 0.0);
        assert_eq!(xg_added(Action::ShortPass, ActionResult::Failure, &Position::new(90.0, 50.0)), 0.0);
        assert_eq!(xg_added(Action::Press, ActionResult::Success, &Position::new(95.0, 50.0)), 0.0);
    }

    #[test]
    fn test_record_context_fields() {
        let mut logger = EventLogger::new(100);
        let mut home = agent("home_ST1_9", TeamSide::Home);
        home.beliefs.pressure_level = PressureLevel::High;
        let mut c = ctx(2_000, GamePhase::Attack);
        c.score.increment(TeamSide::Away);

        let ball = Position::new(80.0, 10.0);
        let record = logger.log_event(&home, Action::LayOff, ActionResult::Success, ball, &c).clone();
        assert_eq!(record.pressure_level, PressureLevel::High);
        assert_eq!(record.game_state, GameState::Losing);
        assert_eq!(record.pitch_zone, PitchZone::AttackingThird);
        assert_eq!(record.sub_zone, SubZone::LeftFlank);
        assert_eq!(record.time_remaining, 118);
        assert_eq!(record.player_role, "CM_L");
        assert!((record.distance_covered - home.position.distance_to(&ball)).abs() < 1e-12);
    }

    #[test]
    fn test_group_by_case() {
        let mut logger = EventLogger::new(100);
        let home = agent("home_CM_L_5", TeamSide::Home);
        let away = agent("away_CM_L_16", TeamSide::Away);

        logger.log_event(&home, Action::Kickoff, ActionResult::Success, Position::CENTER, &ctx(0, GamePhase::Attack));
        logger.log_event(&home, Action::SupportRun, ActionResult::Success, Position::CENTER, &ctx(100, GamePhase::Attack));
        logger.log_event(&away, Action::Press, ActionResult::Success, Position::CENTER, &ctx(200, GamePhase::Defense));

        let traces = group_by_case(logger.events());
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].activities, vec![Action::Kickoff, Action::SupportRun]);
        assert_eq!((traces[0].start_ms, traces[0].end_ms), (0, 100));
        assert_eq!(traces[1].team, TeamSide::Away);
    }
}
