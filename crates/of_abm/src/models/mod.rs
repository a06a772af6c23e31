pub mod event_log;
pub mod events;
pub mod match_result;

pub use event_log::{group_by_case, CaseTrace, EventLogger};
pub use events::{EventRecord, GameState, NumericalSituation, ProcessType};
pub use match_result::MatchResult;
