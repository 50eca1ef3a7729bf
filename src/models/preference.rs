//! Ranked shift preferences.
//!
//! An employee ranks the three shifts of each day 1st/2nd/3rd. Raw input
//! arrives as a [`PreferenceSheet`] of free-form labels; once validated it
//! becomes a [`ShiftRanking`] per day, which is a permutation of
//! [`Shift::ALL`] by construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Day, Shift};
use crate::error::PreferenceIssue;

/// Preference rank of a shift for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    First,
    Second,
    Third,
}

impl Rank {
    /// Number of ranks (one per shift).
    pub const COUNT: usize = Shift::COUNT;

    /// Ranks in the order the preference pass visits them.
    pub const ALL: [Rank; Rank::COUNT] = [Rank::First, Rank::Second, Rank::Third];

    /// Zero-based position (First = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One day's ranking: a permutation of the three shifts, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Shift; 3]", into = "[Shift; 3]")]
pub struct ShiftRanking([Shift; Shift::COUNT]);

impl ShiftRanking {
    /// Creates a ranking, rejecting repeated shifts.
    pub fn new(order: [Shift; Shift::COUNT]) -> Result<Self, PreferenceIssue> {
        for (i, shift) in order.iter().enumerate() {
            if order[..i].contains(shift) {
                return Err(PreferenceIssue::DuplicateShift(*shift));
            }
        }
        Ok(Self(order))
    }

    /// Parses a ranking from labels, best first.
    ///
    /// Labels are trimmed and matched case-insensitively.
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Result<Self, PreferenceIssue> {
        if labels.len() != Shift::COUNT {
            return Err(PreferenceIssue::WrongLength(labels.len()));
        }
        let mut order = [Shift::Morning; Shift::COUNT];
        for (slot, label) in order.iter_mut().zip(labels) {
            let label = label.as_ref();
            *slot = label
                .parse()
                .map_err(|_| PreferenceIssue::UnknownShift(label.trim().to_string()))?;
        }
        Self::new(order)
    }

    /// Shift chosen at the given rank.
    #[inline]
    pub fn choice(&self, rank: Rank) -> Shift {
        self.0[rank.index()]
    }

    /// Rank the employee gave to `shift`.
    pub fn rank_of(&self, shift: Shift) -> Rank {
        let pos = self.0.iter().position(|&s| s == shift).unwrap_or(Rank::COUNT - 1);
        Rank::ALL[pos]
    }

    /// The ranked shifts, best first.
    pub fn shifts(&self) -> [Shift; Shift::COUNT] {
        self.0
    }
}

impl Default for ShiftRanking {
    /// Morning, Afternoon, Evening.
    fn default() -> Self {
        Self(Shift::ALL)
    }
}

impl TryFrom<[Shift; Shift::COUNT]> for ShiftRanking {
    type Error = PreferenceIssue;

    fn try_from(order: [Shift; Shift::COUNT]) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<ShiftRanking> for [Shift; Shift::COUNT] {
    fn from(ranking: ShiftRanking) -> Self {
        ranking.0
    }
}

/// Unvalidated preference input for one employee.
///
/// This is what an input layer (form, JSON file) hands to the roster. It is
/// checked by [`validate_sheet`](crate::validation::validate_sheet) and
/// copied into an immutable [`Employee`](super::Employee) on registration.
///
/// # Example
///
/// ```
/// use u_shift::models::{Day, PreferenceSheet, Shift};
///
/// let sheet = PreferenceSheet::new("Alice")
///     .with_weekly_ranking([Shift::Evening, Shift::Morning, Shift::Afternoon])
///     .with_labels(Day::Sunday, ["morning", "afternoon", "evening"]);
/// assert_eq!(sheet.preferences.len(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSheet {
    /// Employee name (unique within a roster).
    pub name: String,
    /// Ranked shift labels per day, best first.
    #[serde(default)]
    pub preferences: BTreeMap<Day, Vec<String>>,
}

impl PreferenceSheet {
    /// Creates an empty sheet for the named employee.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
        }
    }

    /// Sets one day's ranking from typed shifts.
    pub fn with_ranking(mut self, day: Day, order: [Shift; Shift::COUNT]) -> Self {
        self.preferences
            .insert(day, order.iter().map(|s| s.as_str().to_string()).collect());
        self
    }

    /// Sets one day's ranking from raw labels.
    pub fn with_labels<I, S>(mut self, day: Day, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences
            .insert(day, labels.into_iter().map(Into::into).collect());
        self
    }

    /// Uses the same ranking for every day of the week.
    pub fn with_weekly_ranking(mut self, order: [Shift; Shift::COUNT]) -> Self {
        for day in Day::ALL {
            self = self.with_ranking(day, order);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_rejects_duplicates() {
        let err = ShiftRanking::new([Shift::Morning, Shift::Evening, Shift::Morning]).unwrap_err();
        assert_eq!(err, PreferenceIssue::DuplicateShift(Shift::Morning));
    }

    #[test]
    fn test_ranking_choice_and_rank_of() {
        let r = ShiftRanking::new([Shift::Evening, Shift::Morning, Shift::Afternoon]).unwrap();
        assert_eq!(r.choice(Rank::First), Shift::Evening);
        assert_eq!(r.choice(Rank::Third), Shift::Afternoon);
        assert_eq!(r.rank_of(Shift::Morning), Rank::Second);
        assert_eq!(r.rank_of(Shift::Evening), Rank::First);
    }

    #[test]
    fn test_parse_labels() {
        let r = ShiftRanking::parse(&[" afternoon", "EVENING", "Morning"]).unwrap();
        assert_eq!(r.shifts(), [Shift::Afternoon, Shift::Evening, Shift::Morning]);

        assert_eq!(
            ShiftRanking::parse(&["Morning", "Evening"]),
            Err(PreferenceIssue::WrongLength(2))
        );
        assert_eq!(
            ShiftRanking::parse(&["Morning", "Night", "Evening"]),
            Err(PreferenceIssue::UnknownShift("Night".into()))
        );
        assert_eq!(
            ShiftRanking::parse(&["Morning", "morning", "Evening"]),
            Err(PreferenceIssue::DuplicateShift(Shift::Morning))
        );
    }

    #[test]
    fn test_ranking_serde_enforces_permutation() {
        let r: ShiftRanking = serde_json::from_str(r#"["Evening","Afternoon","Morning"]"#).unwrap();
        assert_eq!(r.choice(Rank::First), Shift::Evening);
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"["Evening","Afternoon","Morning"]"#
        );

        let bad: Result<ShiftRanking, _> = serde_json::from_str(r#"["Evening","Evening","Morning"]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_sheet_builder() {
        let sheet = PreferenceSheet::new("Bob")
            .with_weekly_ranking(Shift::ALL)
            .with_labels(Day::Monday, ["evening", "morning", "afternoon"]);
        assert_eq!(sheet.preferences.len(), Day::COUNT);
        assert_eq!(sheet.preferences[&Day::Monday][0], "evening");
        assert_eq!(sheet.preferences[&Day::Friday][0], "Morning");
    }

    #[test]
    fn test_sheet_from_json() {
        let json = r#"{
            "name": "Carol",
            "preferences": {
                "Monday": ["Morning", "Afternoon", "Evening"],
                "Tuesday": ["Evening", "Morning", "Afternoon"]
            }
        }"#;
        let sheet: PreferenceSheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.name, "Carol");
        assert_eq!(sheet.preferences.len(), 2);
        assert_eq!(sheet.preferences[&Day::Tuesday][0], "Evening");
    }
}
