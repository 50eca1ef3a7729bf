//! Weekly calendar model: days, shifts, and slots.
//!
//! The planning horizon is a fixed 7-day week split into 3 shifts per day,
//! giving 21 slots. Iteration order (`Day::ALL`, `Shift::ALL`) is the
//! canonical order used by every scheduling pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A work shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

/// One (day, shift) cell of the weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day of the slot.
    pub day: Day,
    /// Shift of the slot.
    pub shift: Shift,
}

impl Day {
    /// Number of days in the planning week.
    pub const COUNT: usize = 7;

    /// All days in canonical order.
    pub const ALL: [Day; Day::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in the canonical order (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day name.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl Shift {
    /// Number of shifts per day.
    pub const COUNT: usize = 3;

    /// All shifts in canonical order.
    pub const ALL: [Shift; Shift::COUNT] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Position in the canonical order (Morning = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shift label.
    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl Slot {
    /// Total number of slots in a week.
    pub const COUNT: usize = Day::COUNT * Shift::COUNT;

    /// Creates a slot.
    pub fn new(day: Day, shift: Shift) -> Self {
        Self { day, shift }
    }

    /// All slots in canonical order (day-major).
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Shift::ALL.into_iter().map(move |shift| Slot::new(day, shift)))
    }

    /// Flat position in the canonical order.
    #[inline]
    pub fn index(self) -> usize {
        self.day.index() * Shift::COUNT + self.shift.index()
    }
}

/// Error returned when a day or shift label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError(pub String);

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized label '{}'", self.0)
    }
}

impl std::error::Error for ParseLabelError {}

/// Case-insensitive, whitespace-tolerant match against a fixed label set.
fn parse_label<T: Copy>(s: &str, all: &[T], name: impl Fn(T) -> &'static str) -> Option<T> {
    let trimmed = s.trim();
    all.iter()
        .copied()
        .find(|&v| name(v).eq_ignore_ascii_case(trimmed))
}

impl FromStr for Day {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Day::ALL, Day::as_str).ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

impl FromStr for Shift {
    type Err = ParseLabelError;

    /// Accepts any capitalization and surrounding whitespace ("  morning ").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Shift::ALL, Shift::as_str).ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}
