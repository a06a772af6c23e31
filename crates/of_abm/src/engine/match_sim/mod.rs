//! Match Simulation Engine
//!
//! Owns the pitch, both teams, the clock and the event logger, and drives the
//! fixed-timestep loop:
//!
//! ```text
//! kickoff(home)
//! while match_time < duration:
//!     context = snapshot()
//!     for agent in home ++ away:
//!         update_beliefs -> decide_action -> execute_action -> log
//!     ball physics, phase, possession ticks
//!     match_time += timestep
//!     goal check -> kickoff(home)
//! ```
//!
//! Action execution is split by kind:
//! - `passing.rs` - pass family
//! - `shooting.rs` - shots on goal
//! - `dribbling.rs` - carries
//! - `movement.rs` - off-ball repositioning
//! - `interception.rs` - defensive closing and steals
//!
//! All randomness flows through the engine's single RNG, so a seed fully
//! determines the run.

mod dribbling;
mod interception;
mod movement;
mod passing;
mod shooting;
pub mod team_setup;

#[cfg(test)]
mod contract_tests;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::engine::actions::{Action, ActionKind, ActionResult};
use crate::engine::agent::{Agent, AgentView};
use crate::engine::ball::Ball;
use crate::engine::config::SimulationConfig;
use crate::engine::context::{GameContext, GamePhase, Score};
use crate::engine::pitch::Pitch;
use crate::engine::stats::MatchStats;
use crate::engine::types::{Position, TeamSide};
use crate::error::Result;
use crate::models::{EventLogger, EventRecord, MatchResult};
use crate::tactics::FormationRegistry;

pub use team_setup::build_team;

pub struct MatchEngine<R = ChaCha8Rng> {
    rng: R,
    pub(crate) config: SimulationConfig,
    pub(crate) pitch: Pitch,
    /// Home agents first, then away
    pub(crate) agents: Vec<Agent>,
    home_count: usize,
    pub(crate) logger: EventLogger,
    pub(crate) score: Score,
    pub(crate) game_phase: GamePhase,
    pub(crate) match_time_ms: u64,
    pub(crate) stats: MatchStats,
    started: bool,
}

impl MatchEngine<ChaCha8Rng> {
    /// Engine with the default formation registry, seeded from `config.seed`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_registry(config, &FormationRegistry::default())
    }

    pub fn with_registry(config: SimulationConfig, registry: &FormationRegistry) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, registry, rng)
    }
}

impl<R: Rng> MatchEngine<R> {
    /// Engine driven by a caller-supplied RNG. `config.seed` is kept for the
    /// result but not used for seeding.
    pub fn with_rng(config: SimulationConfig, registry: &FormationRegistry, rng: R) -> Result<Self> {
        config.validate()?;

        let mut agents = build_team(TeamSide::Home, &config.home_formation, registry)?;
        let home_count = agents.len();
        agents.extend(build_team(TeamSide::Away, &config.away_formation, registry)?);

        info!(
            home = %config.home_formation,
            away = %config.away_formation,
            agents = agents.len(),
            seed = config.seed,
            "match engine initialised"
        );

        Ok(Self {
            rng,
            logger: EventLogger::new(config.timestep_ms),
            config,
            pitch: Pitch::new(),
            agents,
            home_count,
            score: Score::default(),
            game_phase: GamePhase::Kickoff,
            match_time_ms: 0,
            stats: MatchStats::default(),
            started: false,
        })
    }

    /// Play the whole match and hand back the log.
    pub fn run(mut self) -> MatchResult {
        self.play_to_end();
        self.into_result()
    }

    pub fn play_to_end(&mut self) {
        self.start();
        while !self.is_finished() {
            self.tick();
        }
        info!(
            home = self.score.home,
            away = self.score.away,
            events = self.logger.len(),
            cases = self.logger.current_case(),
            "match finished"
        );
    }

    /// Opening kickoff by the home side. Idempotent.
    pub fn start(&mut self) {
        if !self.started {
            self.started = true;
            self.kickoff(TeamSide::Home);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.match_time_ms >= self.config.match_duration_ms
    }

    /// One timestep: every agent acts once, then physics, clock and goal check.
    /// Every restart after a goal goes to the home side.
    pub fn tick(&mut self) {
        self.start();
        self.simulation_step();
        self.match_time_ms += self.config.timestep_ms;

        if let Some(scorer) = self.pitch.goal_scored(&self.pitch.ball.position) {
            self.score.increment(scorer);
            debug!(
                team = %scorer,
                time_ms = self.match_time_ms,
                home = self.score.home,
                away = self.score.away,
                "goal"
            );
            self.kickoff(TeamSide::Home);
        }
    }

    fn simulation_step(&mut self) {
        let ctx = self.game_context();

        for idx in 0..self.agents.len() {
            let visible = self.visible_agents(idx);
            let action = {
                let agent = &mut self.agents[idx];
                agent.update_beliefs(&ctx, &visible);
                agent.decide_action(&ctx, &visible)
            };
            self.agents[idx].record_decision(ctx.match_time_ms, action);

            let result = self.execute_action(idx, action);
            trace!(agent = %self.agents[idx].id, %action, result = result.as_str(), "action");

            if action.is_logged() {
                let ball = self.pitch.ball.position;
                self.logger.log_event(&self.agents[idx], action, result, ball, &ctx);
            }
        }

        self.pitch.update_ball_physics(self.config.timestep_secs());
        self.update_game_phase();
        self.track_possession();
    }

    pub(crate) fn execute_action(&mut self, idx: usize, action: Action) -> ActionResult {
        match action.kind() {
            ActionKind::Pass => self.execute_pass(idx),
            ActionKind::Shot => self.execute_shot(idx),
            ActionKind::Dribble => self.execute_dribble(idx),
            ActionKind::Movement => self.execute_movement(idx, action),
            ActionKind::Defensive => self.execute_defensive_action(idx, action),
            ActionKind::Restart | ActionKind::Unsupported => ActionResult::Failure,
        }
    }

    /// Reset to the centre spot and give the ball to `side`'s first agent.
    pub(crate) fn kickoff(&mut self, side: TeamSide) {
        self.pitch.ball = Ball::new(Position::CENTER);
        for agent in &mut self.agents {
            agent.has_ball = false;
        }

        let Some(idx) = self.team_range(side).next() else {
            return;
        };
        self.agents[idx].has_ball = true;
        self.pitch.ball.possessor = Some(self.agents[idx].id.clone());
        self.game_phase = GamePhase::Attack;

        let ctx = self.game_context();
        let ball = self.pitch.ball.position;
        self.logger.log_event(&self.agents[idx], Action::Kickoff, ActionResult::Success, ball, &ctx);
        debug!(team = %side, agent = %self.agents[idx].id, time_ms = self.match_time_ms, "kickoff");
    }

    pub(crate) fn game_context(&self) -> GameContext {
        GameContext {
            match_time_ms: self.match_time_ms,
            time_remaining_s: self.config.match_duration_ms.saturating_sub(self.match_time_ms) / 1000,
            score: self.score,
            ball_position: self.pitch.ball.position,
            game_phase: self.game_phase,
            formation: self.config.home_formation.clone(),
        }
    }

    /// Everyone but `idx`. Visibility is unrestricted.
    fn visible_agents(&self, idx: usize) -> Vec<AgentView> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, a)| a.view())
            .collect()
    }

    fn update_game_phase(&mut self) {
        let home_in_possession = self.possessor_team() == Some(TeamSide::Home);
        self.game_phase = GamePhase::from_ball(self.pitch.ball.position.x, home_in_possession);
    }

    fn track_possession(&mut self) {
        if let Some(side) = self.agents.iter().find(|a| a.has_ball).map(|a| a.team) {
            self.stats.team_mut(side).possession_ticks += 1;
        }
    }

    fn possessor_team(&self) -> Option<TeamSide> {
        let id = self.pitch.ball.possessor.as_ref()?;
        self.agents.iter().find(|a| &a.id == id).map(|a| a.team)
    }

    pub(crate) fn team_range(&self, side: TeamSide) -> std::ops::Range<usize> {
        match side {
            TeamSide::Home => 0..self.home_count,
            TeamSide::Away => self.home_count..self.agents.len(),
        }
    }

    /// Drop the ball from whoever holds it.
    pub(crate) fn release_possession(&mut self, idx: usize) {
        self.agents[idx].has_ball = false;
        self.pitch.ball.possessor = None;
    }

    pub fn into_result(self) -> MatchResult {
        MatchResult {
            seed: self.config.seed,
            match_duration_ms: self.config.match_duration_ms,
            score: self.score,
            stats: self.stats,
            events: self.logger.into_events(),
        }
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn ball(&self) -> &Ball {
        &self.pitch.ball
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn events(&self) -> &[EventRecord] {
        self.logger.events()
    }

    pub fn game_phase(&self) -> GamePhase {
        self.game_phase
    }

    pub fn match_time_ms(&self) -> u64 {
        self.match_time_ms
    }
}
