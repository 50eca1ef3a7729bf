//! Roster quality metrics (KPIs).
//!
//! Computes coverage, preference satisfaction, and workload balance from a
//! completed schedule and the employees it was built for.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage Rate | Fraction of slots at or above the staffing minimum |
//! | Rank Counts | Assignments landing on each employee's 1st/2nd/3rd choice |
//! | First-Choice Rate | Fraction of assignments on a 1st choice |
//! | Avg Rank | Mean rank of assigned shifts (1.0 = all first choices) |
//! | Days per Employee | Min / max / mean assigned days |
//! | Idle Employees | Registered but never assigned |

use std::collections::{BTreeMap, HashMap};

use crate::config::StaffingPolicy;
use crate::models::{Employee, Rank, WeeklySchedule};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Fraction of slots meeting the minimum (0.0..1.0).
    pub coverage_rate: f64,
    /// Total assignments.
    pub assignments: usize,
    /// Assignments per preference rank, indexed by [`Rank::index`].
    pub rank_counts: [usize; Rank::COUNT],
    /// Fraction of assignments on a first choice (0.0..1.0).
    pub first_choice_rate: f64,
    /// Mean 1-based rank of assigned shifts.
    pub avg_rank: f64,
    /// Assigned days per employee, including idle employees.
    pub days_by_employee: BTreeMap<String, usize>,
    /// Fewest days assigned to any employee.
    pub min_days: usize,
    /// Most days assigned to any employee.
    pub max_days: usize,
    /// Mean days per employee.
    pub avg_days: f64,
    /// Employees with no assignment.
    pub idle_employees: Vec<String>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its employees.
    ///
    /// Assignments naming an employee not in `employees` count toward
    /// coverage but not toward rank metrics.
    pub fn calculate(
        schedule: &WeeklySchedule,
        employees: &[Employee],
        policy: &StaffingPolicy,
    ) -> Self {
        let by_name: HashMap<&str, &Employee> = employees.iter().map(|e| (e.name(), e)).collect();

        let slots = schedule.slots();
        let covered = slots
            .iter()
            .filter(|s| s.employees.len() >= policy.min_employees_per_shift)
            .count();
        let coverage_rate = covered as f64 / slots.len() as f64;

        let mut rank_counts = [0; Rank::COUNT];
        for entry in slots {
            for name in &entry.employees {
                if let Some(e) = by_name.get(name.as_str()) {
                    rank_counts[e.rank_of(entry.slot.day, entry.slot.shift).index()] += 1;
                }
            }
        }
        let ranked: usize = rank_counts.iter().sum();
        let (first_choice_rate, avg_rank) = if ranked == 0 {
            (1.0, 1.0)
        } else {
            let weighted: usize = rank_counts
                .iter()
                .enumerate()
                .map(|(i, &n)| (i + 1) * n)
                .sum();
            (
                rank_counts[Rank::First.index()] as f64 / ranked as f64,
                weighted as f64 / ranked as f64,
            )
        };

        let worked = schedule.days_worked();
        let days_by_employee: BTreeMap<String, usize> = employees
            .iter()
            .map(|e| (e.name().to_string(), worked.get(e.name()).copied().unwrap_or(0)))
            .collect();
        let idle_employees = days_by_employee
            .iter()
            .filter(|(_, &d)| d == 0)
            .map(|(n, _)| n.clone())
            .collect();
        let min_days = days_by_employee.values().copied().min().unwrap_or(0);
        let max_days = days_by_employee.values().copied().max().unwrap_or(0);
        let avg_days = if days_by_employee.is_empty() {
            0.0
        } else {
            days_by_employee.values().sum::<usize>() as f64 / days_by_employee.len() as f64
        };

        Self {
            coverage_rate,
            assignments: schedule.assignment_count(),
            rank_counts,
            first_choice_rate,
            avg_rank,
            days_by_employee,
            min_days,
            max_days,
            avg_days,
            idle_employees,
        }
    }

    /// Spread between the busiest and least busy employee (days).
    pub fn workload_spread(&self) -> usize {
        self.max_days - self.min_days
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_coverage: f64, min_first_choice_rate: f64) -> bool {
        self.coverage_rate >= min_coverage && self.first_choice_rate >= min_first_choice_rate
    }
}
