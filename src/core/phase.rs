//! Per-invocation state machine of the assertion primitive.
//!
//! Every check starts in [`Phase::Evaluating`] and resolves to exactly one of
//! two final phases. [`Phase::Terminated`] is absorbing: once reached, no
//! further transition is possible in that process.

use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// Where a single check currently stands.
///
/// # Example
///
/// ```rust
/// use failstop::core::{Condition, Phase};
///
/// let passed = Phase::Evaluating.resolve(Condition::new(true));
/// assert_eq!(passed, Phase::Returned);
/// assert!(passed.is_final());
///
/// let failed = Phase::Evaluating.resolve(Condition::new(false));
/// assert_eq!(failed, Phase::Terminated);
/// assert!(failed.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// The condition has been handed over but not yet inspected.
    Evaluating,
    /// The condition held; control goes back to the caller.
    Returned,
    /// The condition was false; the process is being halted.
    Terminated,
}

impl Phase {
    /// Final phases accept no further transitions.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Returned | Self::Terminated)
    }

    /// The failure phase.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Apply a condition to this phase (pure).
    ///
    /// Only `Evaluating` moves; final phases are returned unchanged, so
    /// `Terminated` can never be left.
    pub fn resolve(self, condition: Condition) -> Phase {
        match self {
            Self::Evaluating if condition.is_satisfied() => Self::Returned,
            Self::Evaluating => Self::Terminated,
            done => done,
        }
    }
}
