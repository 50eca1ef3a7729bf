//! Registered employee model.
//!
//! An [`Employee`] is the validated, immutable form of a
//! [`PreferenceSheet`]. Fields are private so a scheduling run can never
//! observe a preference change half-way through.

use serde::Serialize;

use super::{Day, PreferenceSheet, Rank, Shift, ShiftRanking};
use crate::error::SchedulerError;

/// An employee with a validated ranking for every day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    name: String,
    rankings: [ShiftRanking; Day::COUNT],
}

impl Employee {
    /// Creates an employee from already-typed rankings (indexed by [`Day::index`]).
    ///
    /// The name is trimmed; a blank name is rejected.
    pub fn new(
        name: impl Into<String>,
        rankings: [ShiftRanking; Day::COUNT],
    ) -> Result<Self, SchedulerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(SchedulerError::EmptyName);
        }
        Ok(Self { name, rankings })
    }

    /// Creates an employee who ranks every day the same way.
    pub fn with_weekly_ranking(
        name: impl Into<String>,
        ranking: ShiftRanking,
    ) -> Result<Self, SchedulerError> {
        Self::new(name, [ranking; Day::COUNT])
    }

    /// Validates a sheet and copies it into an employee record.
    pub fn from_sheet(sheet: &PreferenceSheet) -> Result<Self, SchedulerError> {
        let rankings = crate::validation::validate_sheet(sheet)?;
        Self::new(sheet.name.as_str(), rankings)
    }

    /// Unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ranking for a day.
    #[inline]
    pub fn ranking(&self, day: Day) -> &ShiftRanking {
        &self.rankings[day.index()]
    }

    /// Shift chosen at `rank` on `day`.
    #[inline]
    pub fn choice(&self, day: Day, rank: Rank) -> Shift {
        self.ranking(day).choice(rank)
    }

    /// Rank given to `shift` on `day`.
    pub fn rank_of(&self, day: Day, shift: Shift) -> Rank {
        self.ranking(day).rank_of(shift)
    }
}

impl TryFrom<&PreferenceSheet> for Employee {
    type Error = SchedulerError;

    fn try_from(sheet: &PreferenceSheet) -> Result<Self, Self::Error> {
        Self::from_sheet(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_trims_name() {
        let e = Employee::with_weekly_ranking("  Dana ", ShiftRanking::default()).unwrap();
        assert_eq!(e.name(), "Dana");
    }

    #[test]
    fn test_employee_rejects_blank_name() {
        let err = Employee::with_weekly_ranking("   ", ShiftRanking::default()).unwrap_err();
        assert_eq!(err, SchedulerError::EmptyName);
    }

    #[test]
    fn test_employee_from_sheet() {
        let sheet = PreferenceSheet::new("Eve")
            .with_weekly_ranking(Shift::ALL)
            .with_ranking(Day::Saturday, [Shift::Evening, Shift::Afternoon, Shift::Morning]);
        let e = Employee::try_from(&sheet).unwrap();
        assert_eq!(e.choice(Day::Monday, Rank::First), Shift::Morning);
        assert_eq!(e.choice(Day::Saturday, Rank::First), Shift::Evening);
        assert_eq!(e.rank_of(Day::Saturday, Shift::Morning), Rank::Third);
    }

    #[test]
    fn test_employee_from_incomplete_sheet() {
        let sheet = PreferenceSheet::new("Finn").with_ranking(Day::Monday, Shift::ALL);
        assert!(matches!(
            Employee::from_sheet(&sheet),
            Err(SchedulerError::InvalidPreference { day: Day::Tuesday, .. })
        ));
    }
}
