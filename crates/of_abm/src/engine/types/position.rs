//! Pitch coordinates and team sides
//!
//! The pitch is a 100 × 100 unit square. x runs from the home goal line
//! (x = 0) to the away goal line (x = 100); y runs across the pitch.

use serde::{Deserialize, Serialize};

/// Pitch length/width in units.
pub const PITCH_SIZE: f64 = 100.0;

/// 2D point on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance
    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp both axes to the pitch rectangle.
    #[inline]
    pub fn clamped(self) -> Self {
        Self { x: self.x.clamp(0.0, PITCH_SIZE), y: self.y.clamp(0.0, PITCH_SIZE) }
    }

    pub fn is_in_bounds(&self) -> bool {
        (0.0..=PITCH_SIZE).contains(&self.x) && (0.0..=PITCH_SIZE).contains(&self.y)
    }

    /// Move `fraction` of the way toward `target` (no clamping).
    #[inline]
    pub fn step_toward(&self, target: &Position, fraction: f64) -> Self {
        Self {
            x: self.x + (target.x - self.x) * fraction,
            y: self.y + (target.y - self.y) * fraction,
        }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn midpoint(&self, other: &Position) -> Self {
        Self { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }

    /// Mirror along the halfway line (x → 100 - x).
    pub fn mirrored(self) -> Self {
        Self { x: PITCH_SIZE - self.x, y: self.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub const fn is_home(self) -> bool {
        matches!(self, TeamSide::Home)
    }

    /// +1.0 when attacking toward x = 100, -1.0 toward x = 0.
    pub const fn attack_direction(self) -> f64 {
        match self {
            TeamSide::Home => 1.0,
            TeamSide::Away => -1.0,
        }
    }

    /// Centre of the goal this side shoots at.
    pub const fn target_goal(self) -> Position {
        match self {
            TeamSide::Home => Position::new(PITCH_SIZE, 50.0),
            TeamSide::Away => Position::new(0.0, 50.0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
