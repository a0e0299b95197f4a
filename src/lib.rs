//! Failstop: a fail-fast assertion primitive
//!
//! Failstop checks a condition the caller has already computed. If it holds,
//! control returns with no observable effect. If it does not, a diagnostic
//! starting with `Assertion failed` is written to stderr and the process exits
//! with status 1. Nothing after a failed check ever runs, and there is no way
//! to catch the failure in-process.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`]: `Condition`, `Phase` and `AssertionFailure`, no I/O
//! - [`halt`]: diagnostic output and process termination
//!
//! # Example
//!
//! ```rust
//! use failstop::assert_true;
//!
//! let a = 5;
//! let b = 5;
//!
//! // Function form
//! assert_true(a == b);
//!
//! // Macro form: the diagnostic also names the failing expression
//! assert_true!(a == b, "a and b diverged");
//! ```

pub mod core;
pub mod halt;
mod macros;

use crate::core::AssertionFailure;
use std::panic::Location;

// Re-export commonly used types
pub use crate::core::{Phase, SourceLocation};
pub use crate::halt::FAILURE_EXIT_CODE;

/// Halt the process unless `condition` is true.
///
/// On `true` this returns immediately. On `false` it writes
/// `Assertion failed at <file>:<line>:<column>` to stderr and exits with
/// [`FAILURE_EXIT_CODE`].
#[track_caller]
pub fn assert_true(condition: bool) {
    let location = Location::caller();
    __private::check(condition, || AssertionFailure::new().at(location.into()))
}

/// Fail unconditionally with a message.
///
/// ```no_run
/// let token = "+";
/// if token != "-" {
///     failstop::fail_assert(format!("unexpected operator {token}"));
/// }
/// ```
#[track_caller]
pub fn fail_assert(message: impl Into<String>) -> ! {
    halt::halt(AssertionFailure::here().with_detail(message))
}

#[doc(hidden)]
pub mod __private {
    use crate::core::{AssertionFailure, Condition};

    pub fn check<F>(condition: bool, failure: F)
    where
        F: FnOnce() -> AssertionFailure,
    {
        if let Err(failure) = crate::core::evaluate(Condition::new(condition), failure) {
            crate::halt::halt(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_condition_returns() {
        let a = 5;
        let b = 5;
        assert_true(a == b);
    }

    #[test]
    fn repeated_true_conditions_return() {
        assert_true(true);
        assert_true(true);
        assert_true(1 < 2);
    }
}
