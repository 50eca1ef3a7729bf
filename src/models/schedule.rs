//! Weekly schedule (solution) model.
//!
//! A weekly schedule maps each of the 21 (day, shift) slots to the
//! employees working it. The shape is fixed: every slot is present even
//! when nobody is assigned. Slots that miss the staffing minimum are listed
//! in a [`ShortfallReport`] alongside the schedule.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

use super::{Day, Shift, Slot};

/// A complete weekly schedule.
///
/// Deserialization checks the fixed shape, so a loaded schedule indexes
/// the same way as one built by [`WeeklySchedule::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleData")]
pub struct WeeklySchedule {
    /// One entry per slot, in canonical (day-major) order.
    slots: Vec<SlotAssignment>,
}

/// Unchecked wire form of a [`WeeklySchedule`].
#[derive(Deserialize)]
struct ScheduleData {
    slots: Vec<SlotAssignment>,
}

/// Why a slot list does not form a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleShapeError {
    /// The list does not hold exactly one entry per slot.
    #[error("expected {expected} slots, got {0}", expected = Slot::COUNT)]
    WrongSlotCount(usize),
    /// An entry is not at its canonical position.
    #[error("slot {found} at position {position}, expected {expected}")]
    OutOfOrder {
        /// Index into the slot list.
        position: usize,
        /// Slot that belongs there.
        expected: Slot,
        /// Slot actually found.
        found: Slot,
    },
    /// An employee is listed twice in one slot.
    #[error("{employee} listed twice in {slot}")]
    DuplicateAssignment {
        /// Offending slot.
        slot: Slot,
        /// Repeated name.
        employee: String,
    },
}

/// The employees assigned to one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// The slot.
    pub slot: Slot,
    /// Assigned employee names, in assignment order.
    pub employees: Vec<String>,
}

/// A slot that ended below the staffing minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Under-staffed slot.
    pub slot: Slot,
    /// Employees actually assigned.
    pub assigned: usize,
    /// Staffing minimum in force for the run.
    pub required: usize,
}

/// All under-staffed slots of a run, in canonical slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallReport {
    /// Under-staffed slots.
    pub shortfalls: Vec<Shortfall>,
}

impl WeeklySchedule {
    /// Creates a schedule with all 21 slots empty.
    pub fn new() -> Self {
        Self {
            slots: Slot::all()
                .map(|slot| SlotAssignment {
                    slot,
                    employees: Vec::new(),
                })
                .collect(),
        }
    }

    /// Adds an employee to a slot.
    ///
    /// Returns `false` (and changes nothing) if the employee is already in
    /// that slot.
    pub fn assign(&mut self, slot: Slot, employee: impl Into<String>) -> bool {
        let employee = employee.into();
        let entry = &mut self.slots[slot.index()];
        if entry.employees.contains(&employee) {
            return false;
        }
        entry.employees.push(employee);
        true
    }

    /// Employees assigned to a slot.
    pub fn employees(&self, day: Day, shift: Shift) -> &[String] {
        &self.slots[Slot::new(day, shift).index()].employees
    }

    /// Number of employees assigned to a slot.
    #[inline]
    pub fn staff_count(&self, slot: Slot) -> usize {
        self.slots[slot.index()].employees.len()
    }

    /// All slot assignments in canonical order.
    pub fn slots(&self) -> &[SlotAssignment] {
        &self.slots
    }

    /// Shift an employee works on a day, if any.
    pub fn shift_of(&self, employee: &str, day: Day) -> Option<Shift> {
        Shift::ALL
            .into_iter()
            .find(|&shift| self.employees(day, shift).iter().any(|e| e == employee))
    }

    /// Number of distinct days an employee works across the week.
    pub fn days_worked_by(&self, employee: &str) -> usize {
        self.slots
            .iter()
            .filter(|s| s.employees.iter().any(|e| e == employee))
            .map(|s| s.slot.day)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Distinct days worked per employee (employees with no assignment are
    /// absent).
    pub fn days_worked(&self) -> BTreeMap<String, usize> {
        let mut days: BTreeMap<&str, BTreeSet<Day>> = BTreeMap::new();
        for entry in &self.slots {
            for employee in &entry.employees {
                days.entry(employee.as_str()).or_default().insert(entry.slot.day);
            }
        }
        days.into_iter()
            .map(|(name, worked)| (name.to_string(), worked.len()))
            .collect()
    }

    /// Total number of (slot, employee) assignments.
    pub fn assignment_count(&self) -> usize {
        self.slots.iter().map(|s| s.employees.len()).sum()
    }

    /// Whether every slot has at least `min_per_shift` employees.
    pub fn is_fully_staffed(&self, min_per_shift: usize) -> bool {
        self.slots.iter().all(|s| s.employees.len() >= min_per_shift)
    }
}

impl TryFrom<Vec<SlotAssignment>> for WeeklySchedule {
    type Error = ScheduleShapeError;

    fn try_from(slots: Vec<SlotAssignment>) -> Result<Self, Self::Error> {
        if slots.len() != Slot::COUNT {
            return Err(ScheduleShapeError::WrongSlotCount(slots.len()));
        }
        for (position, (entry, expected)) in slots.iter().zip(Slot::all()).enumerate() {
            if entry.slot != expected {
                return Err(ScheduleShapeError::OutOfOrder {
                    position,
                    expected,
                    found: entry.slot,
                });
            }
            let mut seen = BTreeSet::new();
            if let Some(dup) = entry.employees.iter().find(|e| !seen.insert(e.as_str())) {
                return Err(ScheduleShapeError::DuplicateAssignment {
                    slot: entry.slot,
                    employee: dup.clone(),
                });
            }
        }
        Ok(Self { slots })
    }
}

impl TryFrom<ScheduleData> for WeeklySchedule {
    type Error = ScheduleShapeError;

    fn try_from(data: ScheduleData) -> Result<Self, Self::Error> {
        Self::try_from(data.slots)
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

/// One block per day, one `Shift: a, b` line per shift.
impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in Day::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{day}:")?;
            for shift in Shift::ALL {
                writeln!(f, "  {shift}: {}", self.employees(*day, shift).join(", "))?;
            }
        }
        Ok(())
    }
}

impl Shortfall {
    /// How many employees the slot is short by.
    #[inline]
    pub fn missing(&self) -> usize {
        self.required.saturating_sub(self.assigned)
    }
}

impl ShortfallReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an under-staffed slot.
    pub fn record(&mut self, slot: Slot, assigned: usize, required: usize) {
        self.shortfalls.push(Shortfall {
            slot,
            assigned,
            required,
        });
    }

    /// Whether every slot met the minimum.
    pub fn is_empty(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Number of under-staffed slots.
    pub fn len(&self) -> usize {
        self.shortfalls.len()
    }

    /// Sum of missing employees over all slots.
    pub fn total_missing(&self) -> usize {
        self.shortfalls.iter().map(Shortfall::missing).sum()
    }

    /// Shortfall for a slot, if it was under-staffed.
    pub fn for_slot(&self, slot: Slot) -> Option<&Shortfall> {
        self.shortfalls.iter().find(|s| s.slot == slot)
    }

    /// Under-staffed slots on a day.
    pub fn for_day(&self, day: Day) -> Vec<&Shortfall> {
        self.shortfalls.iter().filter(|s| s.slot.day == day).collect()
    }
}
