use serde::{Deserialize, Serialize};

use super::types::TeamSide;

/// Per-side counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamStats {
    pub passes_completed: u32,
    pub pass_attempts: u32,
    pub shots: u32,
    /// Ticks that ended with this side holding the ball
    pub possession_ticks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchStats {
    pub home: TeamStats,
    pub away: TeamStats,
}

impl MatchStats {
    pub fn team(&self, side: TeamSide) -> &TeamStats {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamStats {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Home share of held-ball ticks (0.0 - 100.0). 50/50 when nobody held it.
    pub fn possession_home_pct(&self) -> f64 {
        let total = self.home.possession_ticks + self.away.possession_ticks;
        if total == 0 {
            50.0
        } else {
            self.home.possession_ticks as f64 / total as f64 * 100.0
        }
    }

    pub fn pass_accuracy(&self, side: TeamSide) -> f64 {
        let team = self.team(side);
        if team.pass_attempts == 0 {
            0.0
        } else {
            f64::from(team.passes_completed) / f64::from(team.pass_attempts) * 100.0
        }
    }
}
