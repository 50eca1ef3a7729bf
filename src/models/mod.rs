//! Shift rostering domain models.
//!
//! Provides the core data types for a weekly rostering problem and its
//! solution.
//!
//! # Domain Mappings
//!
//! | u-shift | Retail | Healthcare | Call Center |
//! |---------|--------|------------|-------------|
//! | Employee | Sales Associate | Nurse | Agent |
//! | Slot | Store Shift | Ward Shift | Queue Shift |
//! | ShiftRanking | Availability Form | Shift Bid | Preference Survey |
//! | WeeklySchedule | Staff Rota | Duty Roster | Agent Schedule |

mod employee;
mod preference;
mod schedule;
mod week;

pub use employee::Employee;
pub use preference::{PreferenceSheet, Rank, ShiftRanking};
pub use schedule::{
    ScheduleShapeError, Shortfall, ShortfallReport, SlotAssignment, WeeklySchedule,
};
pub use week::{Day, ParseLabelError, Shift, Slot};
