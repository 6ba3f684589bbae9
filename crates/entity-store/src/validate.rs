//! Field-level constraint checking for store entities.
//!
//! Entities collect their constraint checks into a [`Violations`] accumulator
//! and finish it into a `Result`. Every violation names the offending field
//! and the rule it broke, so a caller can report exactly what was wrong
//! instead of a generic "bad request".

use std::fmt;
use thiserror::Error;

/// A single broken constraint: which field, and what rule it violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more constraint violations for a candidate record.
///
/// The write that produced this error was rejected in full; no partial state
/// was persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<ConstraintViolation>,
}

fn describe(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(ConstraintViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulator for constraint checks.
///
/// # Example
/// ```rust
/// use entity_store::Violations;
///
/// let mut violations = Violations::new();
/// violations.length("name", "Jo", 3, 50);
/// violations.at_least("level", 0, 1);
/// let err = violations.finish().unwrap_err();
/// assert_eq!(err.violations.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Violations {
    inner: Vec<ConstraintViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `value` to have between `min` and `max` characters inclusive.
    pub fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min || len > max {
            self.inner.push(ConstraintViolation {
                field,
                message: format!("length must be between {min} and {max}, was {len}"),
            });
        }
    }

    /// Require `value >= min`.
    pub fn at_least<N>(&mut self, field: &'static str, value: N, min: N)
    where
        N: PartialOrd + fmt::Display + Copy,
    {
        if value < min {
            self.inner.push(ConstraintViolation {
                field,
                message: format!("must be at least {min}, was {value}"),
            });
        }
    }

    /// Record a violation that does not fit one of the stock rules.
    pub fn violation(&mut self, field: &'static str, message: impl Into<String>) {
        self.inner.push(ConstraintViolation {
            field,
            message: message.into(),
        });
    }

    /// Finish the check: `Ok(())` when nothing was violated, otherwise a
    /// [`ValidationError`] carrying every collected violation.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.inner.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.inner,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_passes() {
        assert!(Violations::new().finish().is_ok());
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let mut violations = Violations::new();
        violations.length("name", "abc", 3, 50);
        violations.length("name", &"x".repeat(50), 3, 50);
        assert!(violations.finish().is_ok());

        let mut violations = Violations::new();
        violations.length("name", "ab", 3, 50);
        violations.length("name", &"x".repeat(51), 3, 50);
        let err = violations.finish().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.violations[0].field, "name");
    }

    #[test]
    fn at_least_reports_field_and_bound() {
        let mut violations = Violations::new();
        violations.at_least("level", -1, 1);
        let err = violations.finish().unwrap_err();
        assert_eq!(err.violations[0].field, "level");
        assert!(err.to_string().contains("level"));
        assert!(err.to_string().contains("at least 1"));
    }
}
