//! Preference-ranked greedy roster scheduler.
//!
//! # Algorithm
//!
//! 1. **Preference pass.** For each rank (1st, 2nd, 3rd), for each day, for
//!    each shift: collect eligible employees who ranked this shift at this
//!    rank, shuffle them, and assign until the slot reaches the minimum.
//! 2. **Fill pass.** For each slot still below the minimum, repeatedly pick
//!    a uniformly random eligible employee regardless of preference. When
//!    nobody is eligible the slot is recorded as a shortfall.
//!
//! Eligible means under the weekly day cap and not already working that
//! day. Rank-major ordering places every first choice in the week before
//! any second choice is considered. A slot stops taking employees once it
//! reaches the minimum, so no slot is ever staffed above it.
//!
//! # Complexity
//! O(r * s * n) where r=ranks, s=slots, n=employees.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::state::WorkloadTracker;
use crate::config::StaffingPolicy;
use crate::error::SchedulerError;
use crate::models::{Day, Employee, Rank, Shift, ShortfallReport, Slot, WeeklySchedule};
use crate::validation::validate_roster;

/// Outcome of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    /// The generated schedule (possibly partial).
    pub schedule: WeeklySchedule,
    /// Slots that did not reach the staffing minimum.
    pub shortfalls: ShortfallReport,
    /// Assignments made by the preference pass, indexed by [`Rank::index`].
    pub rank_assignments: [usize; Rank::COUNT],
    /// Assignments made by the fill pass.
    pub fallback_assignments: usize,
}

impl ScheduleResult {
    /// Whether every slot reached the minimum.
    pub fn is_fully_staffed(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Assignments made by the preference pass at `rank`.
    pub fn preference_assignments(&self, rank: Rank) -> usize {
        self.rank_assignments[rank.index()]
    }

    /// Splits into schedule and shortfall report.
    pub fn into_parts(self) -> (WeeklySchedule, ShortfallReport) {
        (self.schedule, self.shortfalls)
    }
}

/// Greedy weekly roster scheduler.
///
/// The random source is supplied per call, so a seeded generator gives
/// reproducible schedules.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_shift::models::{Day, Employee, Shift, ShiftRanking};
/// use u_shift::scheduler::ShiftScheduler;
///
/// let employees: Vec<Employee> = (0..9)
///     .map(|i| Employee::with_weekly_ranking(format!("E{i}"), ShiftRanking::default()).unwrap())
///     .collect();
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let result = ShiftScheduler::new().schedule(&employees, &mut rng).unwrap();
/// assert_eq!(result.schedule.employees(Day::Monday, Shift::Morning).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    policy: StaffingPolicy,
}

/// Mutable state threaded through both passes of one run.
struct Run<'a> {
    employees: &'a [Employee],
    min_per_shift: usize,
    schedule: WeeklySchedule,
    workload: WorkloadTracker,
}

impl<'a> Run<'a> {
    fn new(employees: &'a [Employee], policy: &StaffingPolicy) -> Self {
        Self {
            employees,
            min_per_shift: policy.min_employees_per_shift,
            schedule: WeeklySchedule::new(),
            workload: WorkloadTracker::new(employees.len(), policy.max_days_per_employee),
        }
    }

    #[inline]
    fn is_staffed(&self, slot: Slot) -> bool {
        self.schedule.staff_count(slot) >= self.min_per_shift
    }

    fn place(&mut self, slot: Slot, employee: usize) {
        self.workload.record(employee, slot.day);
        self.schedule.assign(slot, self.employees[employee].name());
    }
}

impl ShiftScheduler {
    /// Creates a scheduler with the default staffing policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the staffing policy.
    pub fn with_policy(mut self, policy: StaffingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The staffing policy in force.
    pub fn policy(&self) -> &StaffingPolicy {
        &self.policy
    }

    /// Generates a weekly schedule.
    ///
    /// Never fails for lack of staff: under-staffed slots are reported in
    /// [`ScheduleResult::shortfalls`].
    ///
    /// # Errors
    /// - [`SchedulerError::InvalidPolicy`] if the policy is out of range.
    /// - [`SchedulerError::NoEmployees`] if `employees` is empty.
    /// - [`SchedulerError::DuplicateEmployee`] if two employees share a name.
    pub fn schedule<R: Rng + ?Sized>(
        &self,
        employees: &[Employee],
        rng: &mut R,
    ) -> Result<ScheduleResult, SchedulerError> {
        self.policy.validate()?;
        validate_roster(employees)?;

        let mut run = Run::new(employees, &self.policy);
        let rank_assignments = self.assign_by_preference(&mut run, rng);
        let (fallback_assignments, shortfalls) = self.fill_shortfalls(&mut run, rng);

        info!(
            employees = employees.len(),
            assignments = run.schedule.assignment_count(),
            fallback = fallback_assignments,
            understaffed_slots = shortfalls.len(),
            missing = shortfalls.total_missing(),
            "schedule generated"
        );

        Ok(ScheduleResult {
            schedule: run.schedule,
            shortfalls,
            rank_assignments,
            fallback_assignments,
        })
    }

    /// Phase 1: rank-major preference assignment.
    fn assign_by_preference<R: Rng + ?Sized>(
        &self,
        run: &mut Run<'_>,
        rng: &mut R,
    ) -> [usize; Rank::COUNT] {
        let mut placed = [0; Rank::COUNT];

        for rank in Rank::ALL {
            for day in Day::ALL {
                for shift in Shift::ALL {
                    let slot = Slot::new(day, shift);
                    if run.is_staffed(slot) {
                        continue;
                    }

                    let mut candidates: Vec<usize> = run
                        .workload
                        .eligible(day)
                        .filter(|&e| run.employees[e].choice(day, rank) == shift)
                        .collect();
                    candidates.shuffle(rng);

                    for employee in candidates {
                        if run.is_staffed(slot) {
                            break;
                        }
                        run.place(slot, employee);
                        placed[rank.index()] += 1;
                        debug!(
                            %slot,
                            employee = %run.employees[employee].name(),
                            ?rank,
                            "assigned by preference"
                        );
                    }
                }
            }
        }

        placed
    }

    /// Phase 2: random fill of slots still below the minimum.
    fn fill_shortfalls<R: Rng + ?Sized>(
        &self,
        run: &mut Run<'_>,
        rng: &mut R,
    ) -> (usize, ShortfallReport) {
        let mut placed = 0;
        let mut shortfalls = ShortfallReport::new();

        for slot in Slot::all() {
            while !run.is_staffed(slot) {
                let available: Vec<usize> = run.workload.eligible(slot.day).collect();
                let Some(&employee) = available.choose(rng) else {
                    let assigned = run.schedule.staff_count(slot);
                    warn!(
                        %slot,
                        assigned,
                        required = run.min_per_shift,
                        "no eligible employee left, slot under-staffed"
                    );
                    shortfalls.record(slot, assigned, run.min_per_shift);
                    break;
                };
                run.place(slot, employee);
                placed += 1;
                debug!(
                    %slot,
                    employee = %run.employees[employee].name(),
                    days_worked = run.workload.days_worked(employee),
                    "assigned by fill"
                );
            }
        }

        (placed, shortfalls)
    }
}
