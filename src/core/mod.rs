//! Pure core of the assertion primitive.
//!
//! This module contains everything that can be decided without touching the
//! process:
//! - `Condition`, the checked truth value
//! - `Phase`, the per-invocation state machine
//! - `AssertionFailure`, the failure record and its diagnostic text
//!
//! Nothing here performs I/O or exits; see [`crate::halt`] for the
//! imperative shell.

mod condition;
mod failure;
mod phase;

pub use condition::Condition;
pub use failure::{AssertionFailure, SourceLocation, ASSERTION_FAILED};
pub use phase::Phase;

/// Resolve a condition, building the failure record only when it is false.
pub(crate) fn evaluate<F>(condition: Condition, failure: F) -> Result<(), AssertionFailure>
where
    F: FnOnce() -> AssertionFailure,
{
    if Phase::Evaluating.resolve(condition).is_error() {
        return Err(failure());
    }
    Ok(())
}
