//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns employees to a 7-day x 3-shift week from per-day ranked shift
//! preferences, subject to a per-shift staffing minimum and a weekly
//! workload cap.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `Shift`, `Slot`, `ShiftRanking`,
//!   `PreferenceSheet`, `Employee`, `WeeklySchedule`, `ShortfallReport`
//! - **`validation`**: Registration checks (blank names, duplicates,
//!   rankings that are not a permutation of the shift set)
//! - **`scheduler`**: `ShiftScheduler` (preference pass + fill pass) and
//!   `ScheduleKpi`
//! - **`roster`**: `Roster` / `SharedRoster`: register, reset, generate
//! - **`config`**: `StaffingPolicy`
//!
//! # Randomness
//!
//! Ties between equally eligible employees are broken uniformly at random.
//! The random source is always passed in by the caller; nothing reads
//! process-global random state, so a seeded generator reproduces a run.
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` per assignment, `info` per run, `warn`
//! per under-staffed slot). Installing a subscriber is up to the caller.

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod validation;

pub use config::{StaffingPolicy, MAX_DAYS_PER_EMPLOYEE, MIN_EMPLOYEES_PER_SHIFT};
pub use error::{PreferenceIssue, SchedulerError};
pub use roster::{Roster, SharedRoster};
pub use scheduler::{ScheduleKpi, ScheduleResult, ShiftScheduler};
