//! Staffing policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::Day;

/// Default minimum number of employees per shift.
pub const MIN_EMPLOYEES_PER_SHIFT: usize = 2;

/// Default maximum number of working days per employee per week.
pub const MAX_DAYS_PER_EMPLOYEE: usize = 5;

/// Staffing minimum and workload cap for a scheduling run.
///
/// Missing fields fall back to the defaults when deserializing, so a
/// partial policy such as `{"max_days_per_employee": 4}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingPolicy {
    /// Target head count per slot.
    pub min_employees_per_shift: usize,
    /// Maximum distinct working days per employee.
    pub max_days_per_employee: usize,
}

impl Default for StaffingPolicy {
    fn default() -> Self {
        Self {
            min_employees_per_shift: MIN_EMPLOYEES_PER_SHIFT,
            max_days_per_employee: MAX_DAYS_PER_EMPLOYEE,
        }
    }
}

impl StaffingPolicy {
    /// Creates the default policy (2 per shift, 5 days max).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-shift staffing minimum.
    pub fn with_min_employees_per_shift(mut self, min: usize) -> Self {
        self.min_employees_per_shift = min;
        self
    }

    /// Sets the weekly workload cap.
    pub fn with_max_days_per_employee(mut self, max: usize) -> Self {
        self.max_days_per_employee = max;
        self
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.min_employees_per_shift == 0 {
            return Err(SchedulerError::InvalidPolicy(
                "min_employees_per_shift must be at least 1".into(),
            ));
        }
        if !(1..=Day::COUNT).contains(&self.max_days_per_employee) {
            return Err(SchedulerError::InvalidPolicy(format!(
                "max_days_per_employee must be between 1 and {}, got {}",
                Day::COUNT,
                self.max_days_per_employee
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = StaffingPolicy::default();
        assert_eq!(p.min_employees_per_shift, 2);
        assert_eq!(p.max_days_per_employee, 5);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let p = StaffingPolicy::new()
            .with_min_employees_per_shift(3)
            .with_max_days_per_employee(6);
        assert_eq!(p.min_employees_per_shift, 3);
        assert_eq!(p.max_days_per_employee, 6);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(StaffingPolicy::new()
            .with_min_employees_per_shift(0)
            .validate()
            .is_err());
        assert!(StaffingPolicy::new()
            .with_max_days_per_employee(0)
            .validate()
            .is_err());
        assert!(matches!(
            StaffingPolicy::new().with_max_days_per_employee(8).validate(),
            Err(SchedulerError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_partial_json() {
        let p: StaffingPolicy = serde_json::from_str(r#"{"max_days_per_employee": 4}"#).unwrap();
        assert_eq!(p.max_days_per_employee, 4);
        assert_eq!(p.min_employees_per_shift, MIN_EMPLOYEES_PER_SHIFT);
    }
}
