//! Greedy roster scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `ShiftScheduler` runs a rank-major preference pass followed by a random
//! fill pass, with uniform random tie-breaking among equally eligible
//! employees. It is not optimal, but provides fast baseline rosters that are
//! reproducible under a seeded random source.
//!
//! # KPI
//!
//! `ScheduleKpi` computes coverage, preference satisfaction, and workload
//! balance for a finished schedule.

mod engine;
mod kpi;
mod state;

pub use engine::{ScheduleResult, ShiftScheduler};
pub use kpi::ScheduleKpi;
