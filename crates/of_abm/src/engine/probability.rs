//! Probability calculation utilities for match simulation
//!
//! All functions are pure. Draws happen in the executors; these only map
//! game state to a success probability or a heuristic value.

use super::agent::PressureLevel;
use super::types::Position;

const PASS_BASE_SUCCESS: f64 = 0.8;
const PASS_MAX_DISTANCE_PENALTY: f64 = 0.3;

/// Probability a fixed intercept attempt wins the ball.
pub const INTERCEPT_SUCCESS: f64 = 0.3;
/// An intercept is only attempted within this distance of the ball.
pub const INTERCEPT_RANGE: f64 = 3.0;
/// Std-dev of a failed pass landing around the pass midpoint, per axis.
pub const PASS_SCATTER_SIGMA: f64 = 5.0;
/// Std-dev of a saved shot rebounding around the goal mouth, per axis.
pub const SHOT_SCATTER_SIGMA: f64 = 10.0;

pub fn pressure_penalty(pressure: PressureLevel) -> f64 {
    match pressure {
        PressureLevel::None | PressureLevel::Low => 0.0,
        PressureLevel::Medium => 0.1,
        PressureLevel::High => 0.2,
        PressureLevel::Extreme => 0.3,
    }
}

/// `0.8 - min(0.3, d/100) - pressure penalty`
pub fn pass_success_probability(distance: f64, pressure: PressureLevel) -> f64 {
    PASS_BASE_SUCCESS - (distance / 100.0).min(PASS_MAX_DISTANCE_PENALTY) - pressure_penalty(pressure)
}

/// Distance-bucketed conversion chance of a shot.
pub fn shot_success_probability(goal_distance: f64) -> f64 {
    if goal_distance > 30.0 {
        0.05
    } else if goal_distance > 20.0 {
        0.15
    } else if goal_distance > 10.0 {
        0.25
    } else {
        0.4
    }
}

/// xG credited to a saved/missed shot, from where the ball ended up.
pub fn shot_xg(ball: &Position) -> f64 {
    let goal_distance = ball
        .distance_to(&Position::new(0.0, 50.0))
        .min(ball.distance_to(&Position::new(100.0, 50.0)));

    if goal_distance < 10.0 {
        0.4
    } else if goal_distance < 20.0 {
        0.2
    } else {
        0.05
    }
}
