//! Match Result Data Structures
//!
//! Output of a completed simulation. The event log is the primary product;
//! score and stats are summaries of the same run.

use serde::{Deserialize, Serialize};

use super::event_log::{group_by_case, CaseTrace};
use super::events::EventRecord;
use crate::engine::actions::Action;
use crate::engine::context::Score;
use crate::engine::stats::MatchStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub seed: u64,
    pub match_duration_ms: u64,
    pub score: Score,
    pub events: Vec<EventRecord>,
    pub stats: MatchStats,
}

impl MatchResult {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of distinct possessions in the log.
    pub fn case_count(&self) -> usize {
        self.cases().len()
    }

    pub fn cases(&self) -> Vec<CaseTrace> {
        group_by_case(&self.events)
    }

    /// First `n` logged activities, in order.
    pub fn first_activities(&self, n: usize) -> Vec<Action> {
        self.events.iter().take(n).map(|e| e.activity).collect()
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
