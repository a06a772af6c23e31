//! Per-tick world snapshot handed to every agent.

use super::types::{Position, TeamSide};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Kickoff,
    Attack,
    Defense,
    Transition,
}

impl GamePhase {
    /// Phase from the ball's x position and whether the home side holds it.
    /// A loose ball counts as not held by home.
    pub fn from_ball(ball_x: f64, home_in_possession: bool) -> Self {
        if ball_x < 33.0 {
            if home_in_possession {
                GamePhase::Defense
            } else {
                GamePhase::Attack
            }
        } else if ball_x > 67.0 {
            if home_in_possession {
                GamePhase::Attack
            } else {
                GamePhase::Defense
            }
        } else {
            GamePhase::Transition
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::Kickoff => "kickoff",
            GamePhase::Attack => "attack",
            GamePhase::Defense => "defense",
            GamePhase::Transition => "transition",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn get(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    pub fn increment(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home += 1,
            TeamSide::Away => self.away += 1,
        }
    }

    /// Own score minus opponent score.
    pub fn differential(&self, side: TeamSide) -> i64 {
        i64::from(self.get(side)) - i64::from(self.get(side.opponent()))
    }
}

/// Immutable snapshot, rebuilt at the start of every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    pub match_time_ms: u64,
    pub time_remaining_s: u64,
    pub score: Score,
    pub ball_position: Position,
    pub game_phase: GamePhase,
    pub formation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_from_ball() {
        assert_eq!(GamePhase::from_ball(10.0, true), GamePhase::Defense);
        assert_eq!(GamePhase::from_ball(10.0, false), GamePhase::Attack);
        assert_eq!(GamePhase::from_ball(80.0, true), GamePhase::Attack);
        assert_eq!(GamePhase::from_ball(80.0, false), GamePhase::Defense);
        assert_eq!(GamePhase::from_ball(33.0, true), GamePhase::Transition);
        assert_eq!(GamePhase::from_ball(67.0, false), GamePhase::Transition);
    }

    #[test]
    fn test_score_differential() {
        let mut score = Score::default();
        score.increment(TeamSide::Away);
        score.increment(TeamSide::Away);
        score.increment(TeamSide::Home);
        assert_eq!(score.differential(TeamSide::Home), -1);
        assert_eq!(score.differential(TeamSide::Away), 1);
    }
}
