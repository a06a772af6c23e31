//! Ball state and rolling physics
//!
//! The ball carries a velocity that decays by a fixed friction factor each
//! physics step. Position is clamped to the pitch after every update.

use super::types::{AgentId, Position};
use serde::{Deserialize, Serialize};

/// Velocity multiplier applied after every physics step.
pub const BALL_FRICTION: f64 = 0.95;

/// Both velocity components below this snap the ball to rest.
pub const BALL_STOP_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Position,
    pub velocity: (f64, f64),
    /// Agent currently in possession, if any
    pub possessor: Option<AgentId>,
}

impl Ball {
    pub fn new(position: Position) -> Self {
        Self { position: position.clamped(), velocity: (0.0, 0.0), possessor: None }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != (0.0, 0.0)
    }

    /// Place the ball, clamping to the pitch.
    pub fn set_position(&mut self, position: Position) {
        self.position = position.clamped();
    }

    /// Advance the ball by `dt` seconds.
    pub fn update_physics(&mut self, dt: f64) {
        if !self.is_moving() {
            return;
        }

        let (vx, vy) = self.velocity;
        self.position = Position::new(self.position.x + vx * dt, self.position.y + vy * dt).clamped();

        let (vx, vy) = (vx * BALL_FRICTION, vy * BALL_FRICTION);
        self.velocity = if vx.abs() < BALL_STOP_THRESHOLD && vy.abs() < BALL_STOP_THRESHOLD {
            (0.0, 0.0)
        } else {
            (vx, vy)
        };
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(Position::CENTER)
    }
}
