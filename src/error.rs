//! Error taxonomy for roster registration and schedule generation.
//!
//! Staffing shortfalls are deliberately absent here: an under-staffed slot
//! is a normal outcome reported through
//! [`ShortfallReport`](crate::models::ShortfallReport), not a failure.

use thiserror::Error;

use crate::models::{Day, Shift};

/// Errors raised by registration, validation, and schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Employee name is empty after trimming.
    #[error("Employee name must not be empty")]
    EmptyName,
    /// An employee with this name is already registered.
    #[error("Employee already registered: {0}")]
    DuplicateEmployee(String),
    /// A day's ranking is not a permutation of the shift set.
    #[error("Invalid preference for '{employee}' on {day}: {issue}")]
    InvalidPreference {
        /// Offending employee.
        employee: String,
        /// Offending day.
        day: Day,
        /// What is wrong with the ranking.
        issue: PreferenceIssue,
    },
    /// Schedule generation was requested with nobody registered.
    #[error("No employees registered")]
    NoEmployees,
    /// A staffing policy value is out of range.
    #[error("Invalid staffing policy: {0}")]
    InvalidPolicy(String),
}

/// Why a single day's ranking was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceIssue {
    /// No ranking was supplied for the day.
    #[error("no ranking supplied")]
    MissingDay,
    /// The ranking does not hold exactly three entries.
    #[error("expected 3 ranked shifts, got {0}")]
    WrongLength(usize),
    /// A label does not name a known shift.
    #[error("unknown shift '{0}'")]
    UnknownShift(String),
    /// A shift is ranked more than once.
    #[error("shift {0} ranked more than once")]
    DuplicateShift(Shift),
}

impl SchedulerError {
    /// Builds an [`SchedulerError::InvalidPreference`].
    pub fn invalid_preference(employee: impl Into<String>, day: Day, issue: PreferenceIssue) -> Self {
        Self::InvalidPreference {
            employee: employee.into(),
            day,
            issue,
        }
    }

    /// Whether the error concerns employee data rather than the policy.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::InvalidPolicy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = SchedulerError::DuplicateEmployee("Alice".into());
        assert_eq!(e.to_string(), "Employee already registered: Alice");

        let e = SchedulerError::invalid_preference(
            "Bob",
            Day::Tuesday,
            PreferenceIssue::DuplicateShift(Shift::Morning),
        );
        assert_eq!(
            e.to_string(),
            "Invalid preference for 'Bob' on Tuesday: shift Morning ranked more than once"
        );

        assert_eq!(
            PreferenceIssue::WrongLength(2).to_string(),
            "expected 3 ranked shifts, got 2"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(SchedulerError::NoEmployees.is_input_error());
        assert!(SchedulerError::EmptyName.is_input_error());
        assert!(!SchedulerError::InvalidPolicy("x".into()).is_input_error());
    }
}
