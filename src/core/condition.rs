//! The truth value handed to the assertion primitive.
//!
//! A `Condition` is produced by the caller immediately before the check and
//! consumed exactly once. It carries no identity and no state beyond the
//! boolean itself.

use serde::{Deserialize, Serialize};

/// Result of a predicate the caller has already evaluated.
///
/// # Example
///
/// ```rust
/// use failstop::core::Condition;
///
/// let a = 5;
/// let b = 5;
/// let condition = Condition::from(a == b);
///
/// assert!(condition.is_satisfied());
/// assert!(!Condition::from(10 == 20).is_satisfied());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(bool);

impl Condition {
    /// Wrap an already-evaluated truth value.
    pub const fn new(value: bool) -> Self {
        Condition(value)
    }

    /// Whether the guarded invariant holds.
    pub const fn is_satisfied(self) -> bool {
        self.0
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition(value)
    }
}

impl From<Condition> for bool {
    fn from(condition: Condition) -> Self {
        condition.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_satisfy_condition() {
        let a = 5;
        let b = 5;
        let condition = Condition::from(a == b);
        assert!(condition.is_satisfied());
    }

    #[test]
    fn unequal_values_do_not_satisfy_condition() {
        let a = 10;
        let b = 20;
        let condition = Condition::new(a == b);
        assert!(!condition.is_satisfied());
    }

    #[test]
    fn condition_converts_back_to_bool() {
        let value: bool = Condition::new(false).into();
        assert!(!value);
    }

    #[test]
    fn condition_serializes_as_plain_bool() {
        let json = serde_json::to_string(&Condition::new(true)).unwrap();
        assert_eq!(json, "true");

        let parsed: Condition = serde_json::from_str("false").unwrap();
        assert_eq!(parsed, Condition::new(false));
    }
}
