//! Pitch geometry and rule checks
//!
//! Zones split the pitch into thirds along x (defensive/middle/attacking)
//! and y (left/central/right). Thirds are always measured from x = 0, so
//! zone names are absolute, not team-relative.

use super::ball::Ball;
use super::types::{Position, TeamSide};
use serde::{Deserialize, Serialize};

const THIRD_LOW: f64 = 33.33;
const THIRD_HIGH: f64 = 66.67;

/// Goal mouth spans y ∈ [45, 55] at both ends.
pub const GOAL_Y_MIN: f64 = 45.0;
pub const GOAL_Y_MAX: f64 = 55.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchZone {
    DefensiveThird,
    MiddleThird,
    AttackingThird,
}

impl PitchZone {
    pub fn from_x(x: f64) -> Self {
        if x <= THIRD_LOW {
            PitchZone::DefensiveThird
        } else if x <= THIRD_HIGH {
            PitchZone::MiddleThird
        } else {
            PitchZone::AttackingThird
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PitchZone::DefensiveThird => "defensive_third",
            PitchZone::MiddleThird => "middle_third",
            PitchZone::AttackingThird => "attacking_third",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubZone {
    LeftFlank,
    Central,
    RightFlank,
}

impl SubZone {
    pub fn from_y(y: f64) -> Self {
        if y <= THIRD_LOW {
            SubZone::LeftFlank
        } else if y <= THIRD_HIGH {
            SubZone::Central
        } else {
            SubZone::RightFlank
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SubZone::LeftFlank => "left_flank",
            SubZone::Central => "central",
            SubZone::RightFlank => "right_flank",
        }
    }
}

/// Axis-aligned rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AreaBounds {
    pub fn contains(&self, pos: &Position) -> bool {
        (self.x_min..=self.x_max).contains(&pos.x) && (self.y_min..=self.y_max).contains(&pos.y)
    }
}

pub const HOME_PENALTY_AREA: AreaBounds =
    AreaBounds { x_min: 0.0, x_max: 16.0, y_min: 37.0, y_max: 63.0 };
pub const AWAY_PENALTY_AREA: AreaBounds =
    AreaBounds { x_min: 84.0, x_max: 100.0, y_min: 37.0, y_max: 63.0 };

/// The playing surface. Owns the one ball of the match.
#[derive(Debug, Clone, Default)]
pub struct Pitch {
    pub ball: Ball,
}

impl Pitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn penalty_area(team: TeamSide) -> &'static AreaBounds {
        match team {
            TeamSide::Home => &HOME_PENALTY_AREA,
            TeamSide::Away => &AWAY_PENALTY_AREA,
        }
    }

    pub fn is_in_penalty_area(&self, pos: &Position, team: TeamSide) -> bool {
        Self::penalty_area(team).contains(pos)
    }

    /// Team credited with a goal if `pos` lies on/behind a goal line inside
    /// the goal mouth.
    pub fn goal_scored(&self, pos: &Position) -> Option<TeamSide> {
        let in_mouth = (GOAL_Y_MIN..=GOAL_Y_MAX).contains(&pos.y);
        if pos.x <= 0.0 && in_mouth {
            Some(TeamSide::Away)
        } else if pos.x >= 100.0 && in_mouth {
            Some(TeamSide::Home)
        } else {
            None
        }
    }

    pub fn update_ball_physics(&mut self, dt: f64) {
        self.ball.update_physics(dt);
    }
}
