//! Resolution state and transition types.

use std::collections::VecDeque;

use platelog_estimate::EstimationResult;

/// Where a resolution session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionState {
    /// No pending foods and no estimation context.
    Idle,
    /// Waiting for the user to give calories for `current`.
    AwaitingValue {
        current: String,
        queue: VecDeque<String>,
    },
}

impl ResolutionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Result of a successful `submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The value was learned; the next food is now awaiting a value.
    Next(String),
    /// Every food was learned and the meals were re-estimated. The session
    /// is idle again.
    Resolved(EstimationResult),
}

/// Result of `cancel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancelled {
    /// Foods that were still waiting for a value, current one first.
    pub discarded: Vec<String>,
}
