//! Input validation for rostering problems.
//!
//! Checks structural integrity of preference input before it reaches the
//! scheduler. Detects:
//! - Blank employee names
//! - Duplicate employee names
//! - Days with no ranking
//! - Rankings that are not a permutation of {Morning, Afternoon, Evening}
//!
//! Single registrations fail on the first problem ([`validate_sheet`]);
//! batch imports collect every problem ([`validate_sheets`]).

use std::collections::HashSet;

use crate::error::{PreferenceIssue, SchedulerError};
use crate::models::{Day, Employee, PreferenceSheet, ShiftRanking};

/// Validation result for batch checks.
pub type ValidationResult = Result<(), Vec<SchedulerError>>;

/// Validates one sheet and returns its typed rankings, indexed by [`Day::index`].
///
/// # Errors
/// The first problem found, checking the name and then days in order.
pub fn validate_sheet(sheet: &PreferenceSheet) -> Result<[ShiftRanking; Day::COUNT], SchedulerError> {
    let name = sheet.name.trim();
    if name.is_empty() {
        return Err(SchedulerError::EmptyName);
    }

    let mut rankings = [ShiftRanking::default(); Day::COUNT];
    for day in Day::ALL {
        rankings[day.index()] = parse_day(sheet, day)
            .map_err(|issue| SchedulerError::invalid_preference(name, day, issue))?;
    }
    Ok(rankings)
}

/// Validates a batch of sheets.
///
/// Checks:
/// 1. No blank names
/// 2. No duplicate names (compared after trimming)
/// 3. Every day of every sheet holds a valid ranking
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sheets(sheets: &[PreferenceSheet]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for sheet in sheets {
        let name = sheet.name.trim();
        if name.is_empty() {
            errors.push(SchedulerError::EmptyName);
            continue;
        }
        if !names.insert(name) {
            errors.push(SchedulerError::DuplicateEmployee(name.to_string()));
        }
        for day in Day::ALL {
            if let Err(issue) = parse_day(sheet, day) {
                errors.push(SchedulerError::invalid_preference(name, day, issue));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a roster handed directly to the scheduler.
///
/// Rankings are valid by construction of [`Employee`]; this only guards
/// against an empty roster and repeated names.
pub fn validate_roster(employees: &[Employee]) -> Result<(), SchedulerError> {
    if employees.is_empty() {
        return Err(SchedulerError::NoEmployees);
    }
    let mut names = HashSet::new();
    for e in employees {
        if !names.insert(e.name()) {
            return Err(SchedulerError::DuplicateEmployee(e.name().to_string()));
        }
    }
    Ok(())
}

fn parse_day(sheet: &PreferenceSheet, day: Day) -> Result<ShiftRanking, PreferenceIssue> {
    let labels = sheet
        .preferences
        .get(&day)
        .ok_or(PreferenceIssue::MissingDay)?;
    ShiftRanking::parse(labels.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rank, Shift};

    fn full_sheet(name: &str) -> PreferenceSheet {
        PreferenceSheet::new(name).with_weekly_ranking(Shift::ALL)
    }

    #[test]
    fn test_valid_sheet() {
        let rankings = validate_sheet(&full_sheet("Ann")).unwrap();
        for r in rankings {
            assert_eq!(r.choice(Rank::First), Shift::Morning);
        }
    }

    #[test]
    fn test_blank_name() {
        assert_eq!(
            validate_sheet(&full_sheet("  ")),
            Err(SchedulerError::EmptyName)
        );
    }

    #[test]
    fn test_missing_day() {
        let mut sheet = full_sheet("Ann");
        sheet.preferences.remove(&Day::Thursday);
        assert_eq!(
            validate_sheet(&sheet),
            Err(SchedulerError::invalid_preference(
                "Ann",
                Day::Thursday,
                PreferenceIssue::MissingDay
            ))
        );
    }

    #[test]
    fn test_duplicate_shift_names_day() {
        let sheet = full_sheet("Ann").with_labels(Day::Friday, ["Evening", "Morning", "evening"]);
        let err = validate_sheet(&sheet).unwrap_err();
        assert_eq!(
            err,
            SchedulerError::invalid_preference(
                "Ann",
                Day::Friday,
                PreferenceIssue::DuplicateShift(Shift::Evening)
            )
        );
    }

    #[test]
    fn test_first_error_wins() {
        let sheet = full_sheet("Ann")
            .with_labels(Day::Tuesday, ["Morning"])
            .with_labels(Day::Saturday, ["Lunch", "Morning", "Evening"]);
        assert!(matches!(
            validate_sheet(&sheet),
            Err(SchedulerError::InvalidPreference { day: Day::Tuesday, .. })
        ));
    }

    #[test]
    fn test_batch_collects_all_errors() {
        let sheets = vec![
            full_sheet("Ann"),
            full_sheet(" Ann "),
            full_sheet(""),
            full_sheet("Ben")
                .with_labels(Day::Monday, ["Morning", "Morning", "Evening"])
                .with_labels(Day::Sunday, Vec::<String>::new()),
        ];
        let errors = validate_sheets(&sheets).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&SchedulerError::DuplicateEmployee("Ann".into())));
        assert!(errors.contains(&SchedulerError::EmptyName));
        assert!(errors.contains(&SchedulerError::invalid_preference(
            "Ben",
            Day::Sunday,
            PreferenceIssue::WrongLength(0)
        )));
    }

    #[test]
    fn test_batch_valid() {
        let sheets = vec![full_sheet("Ann"), full_sheet("Ben")];
        assert!(validate_sheets(&sheets).is_ok());
    }

    #[test]
    fn test_validate_roster() {
        assert_eq!(validate_roster(&[]), Err(SchedulerError::NoEmployees));

        let a = Employee::with_weekly_ranking("Ann", ShiftRanking::default()).unwrap();
        let b = Employee::with_weekly_ranking("Ben", ShiftRanking::default()).unwrap();
        assert!(validate_roster(&[a.clone(), b]).is_ok());
        assert_eq!(
            validate_roster(&[a.clone(), a]),
            Err(SchedulerError::DuplicateEmployee("Ann".into()))
        );
    }
}
