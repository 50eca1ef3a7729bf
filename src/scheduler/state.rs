//! Per-run workload bookkeeping.

use crate::models::Day;

/// Workload counters for one scheduling run.
///
/// Employees are addressed by their position in the roster slice. Both
/// counters are created fresh for each run and dropped with it.
#[derive(Debug, Clone)]
pub(crate) struct WorkloadTracker {
    max_days: usize,
    /// Days already assigned, per employee.
    days_worked: Vec<usize>,
    /// Whether each employee is already placed on each day.
    assigned_on: Vec<[bool; Day::COUNT]>,
}

impl WorkloadTracker {
    pub(crate) fn new(employee_count: usize, max_days: usize) -> Self {
        Self {
            max_days,
            days_worked: vec![0; employee_count],
            assigned_on: vec![[false; Day::COUNT]; employee_count],
        }
    }

    /// Under the weekly cap and not yet working on `day`.
    #[inline]
    pub(crate) fn is_eligible(&self, employee: usize, day: Day) -> bool {
        self.days_worked[employee] < self.max_days && !self.assigned_on[employee][day.index()]
    }

    /// Eligible employees for `day`, in roster order.
    pub(crate) fn eligible(&self, day: Day) -> impl Iterator<Item = usize> + '_ {
        (0..self.days_worked.len()).filter(move |&e| self.is_eligible(e, day))
    }

    /// Marks `employee` as working on `day`.
    pub(crate) fn record(&mut self, employee: usize, day: Day) {
        debug_assert!(self.is_eligible(employee, day));
        self.days_worked[employee] += 1;
        self.assigned_on[employee][day.index()] = true;
    }

    pub(crate) fn days_worked(&self, employee: usize) -> usize {
        self.days_worked[employee]
    }
}
