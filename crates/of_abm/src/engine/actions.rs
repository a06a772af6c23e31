//! Symbolic actions returned by agent policies
//!
//! Policies speak in football vocabulary (`short_pass`, `lay_off`, ...).
//! The engine groups that vocabulary into a handful of [`ActionKind`]s that
//! have concrete execution semantics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Restart
    Kickoff,

    // Distribution / passing
    ShortPass,
    LongKick,
    ClearBall,
    ForwardPass,
    SafePass,
    ThroughPass,
    LayOff,

    // Ball carrying
    Shoot,
    DribbleForward,
    RetainPossession,
    HoldUp,

    // Off-ball movement
    MoveToPosition,
    MaintainPosition,
    SupportRun,
    TrackBack,
    TrackRunner,
    FindSpace,
    RunBehind,

    // Defending
    SaveAttempt,
    CloseDown,
    Press,
    Intercept,
    PressDefender,
}

/// Execution category of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Pass,
    Shot,
    Dribble,
    Movement,
    Defensive,
    Restart,
    /// No executor; always resolves to a failure without touching state.
    Unsupported,
}

impl Action {
    pub const fn kind(self) -> ActionKind {
        use Action::*;
        match self {
            ShortPass | LongKick | ClearBall | ForwardPass | SafePass | ThroughPass | LayOff => {
                ActionKind::Pass
            }
            Shoot => ActionKind::Shot,
            DribbleForward => ActionKind::Dribble,
            MoveToPosition | SupportRun | TrackBack => ActionKind::Movement,
            CloseDown | Press | Intercept => ActionKind::Defensive,
            Kickoff => ActionKind::Restart,
            MaintainPosition | RetainPossession | HoldUp | TrackRunner | FindSpace | RunBehind
            | SaveAttempt | PressDefender => ActionKind::Unsupported,
        }
    }

    /// Actions that count as pressing when the side is out of possession.
    pub const fn is_pressing(self) -> bool {
        matches!(self, Action::Press | Action::CloseDown | Action::Intercept)
    }

    /// Whether the engine writes this action to the event log.
    pub const fn is_logged(self) -> bool {
        !matches!(self, Action::MaintainPosition)
    }

    pub const fn as_str(self) -> &'static str {
        use Action::*;
        match self {
            Kickoff => "kickoff",
            ShortPass => "short_pass",
            LongKick => "long_kick",
            ClearBall => "clear_ball",
            ForwardPass => "forward_pass",
            SafePass => "safe_pass",
            ThroughPass => "through_pass",
            LayOff => "lay_off",
            Shoot => "shoot",
            DribbleForward => "dribble_forward",
            RetainPossession => "retain_possession",
            HoldUp => "hold_up",
            MoveToPosition => "move_to_position",
            MaintainPosition => "maintain_position",
            SupportRun => "support_run",
            TrackBack => "track_back",
            TrackRunner => "track_runner",
            FindSpace => "find_space",
            RunBehind => "run_behind",
            SaveAttempt => "save_attempt",
            CloseDown => "close_down",
            Press => "press",
            Intercept => "intercept",
            PressDefender => "press_defender",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionResult {
    Success,
    Failure,
    Goal,
    Saved,
}

impl ActionResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionResult::Success => "success",
            ActionResult::Failure => "failure",
            ActionResult::Goal => "goal",
            ActionResult::Saved => "saved",
        }
    }
}
