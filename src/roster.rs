//! Employee registry and the caller-facing operations.
//!
//! [`Roster`] owns the registered employees and the last generated
//! schedule. Registration copies each [`PreferenceSheet`] into an immutable
//! [`Employee`], and generation borrows the roster for the whole run, so a
//! registry change can never interleave with a running schedule.
//!
//! [`SharedRoster`] is the same registry behind a `parking_lot::RwLock` for
//! long-lived services. It snapshots the employees under a read lock,
//! computes the schedule without holding any lock, and only stores the
//! result if the roster did not change in the meantime.

use parking_lot::RwLock;
use rand::Rng;
use tracing::{debug, info};

use crate::config::StaffingPolicy;
use crate::error::SchedulerError;
use crate::models::{Employee, PreferenceSheet};
use crate::scheduler::{ScheduleResult, ShiftScheduler};
use crate::validation::validate_sheets;

/// Registered employees plus the most recent schedule.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_shift::models::{PreferenceSheet, Shift};
/// use u_shift::Roster;
///
/// let mut roster = Roster::new();
/// roster
///     .register(&PreferenceSheet::new("Alice").with_weekly_ranking(Shift::ALL))
///     .unwrap();
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = roster.generate(&mut rng).unwrap();
/// assert!(!result.is_fully_staffed());
///
/// roster.reset();
/// assert!(roster.is_empty());
/// assert!(roster.last_result().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    scheduler: ShiftScheduler,
    last_result: Option<ScheduleResult>,
}

impl Roster {
    /// Creates an empty roster with the default staffing policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster with a custom staffing policy.
    pub fn with_policy(policy: StaffingPolicy) -> Self {
        Self {
            scheduler: ShiftScheduler::new().with_policy(policy),
            ..Self::default()
        }
    }

    /// Builds a roster from a batch of sheets.
    ///
    /// Every sheet is checked before any is registered; on failure all
    /// problems are returned together.
    pub fn from_sheets(
        sheets: &[PreferenceSheet],
        policy: StaffingPolicy,
    ) -> Result<Self, Vec<SchedulerError>> {
        validate_sheets(sheets)?;
        let mut roster = Self::with_policy(policy);
        for sheet in sheets {
            roster.register(sheet).map_err(|e| vec![e])?;
        }
        Ok(roster)
    }

    /// Validates a sheet and registers the employee.
    ///
    /// Any previously generated schedule is discarded, since it no longer
    /// reflects the roster.
    ///
    /// # Errors
    /// - [`SchedulerError::EmptyName`] for a blank name.
    /// - [`SchedulerError::InvalidPreference`] for a bad or missing ranking.
    /// - [`SchedulerError::DuplicateEmployee`] if the name is taken.
    pub fn register(&mut self, sheet: &PreferenceSheet) -> Result<&Employee, SchedulerError> {
        let employee = Employee::from_sheet(sheet)?;
        self.register_employee(employee)
    }

    /// Registers an already-built employee.
    pub fn register_employee(&mut self, employee: Employee) -> Result<&Employee, SchedulerError> {
        if self.contains(employee.name()) {
            return Err(SchedulerError::DuplicateEmployee(employee.name().to_string()));
        }
        debug!(employee = %employee.name(), "employee registered");
        self.last_result = None;
        self.employees.push(employee);
        Ok(&self.employees[self.employees.len() - 1])
    }

    /// Removes every employee and the last schedule. Idempotent.
    pub fn reset(&mut self) {
        if !self.employees.is_empty() || self.last_result.is_some() {
            info!(employees = self.employees.len(), "roster reset");
        }
        self.employees.clear();
        self.last_result = None;
    }

    /// Generates a fresh schedule for the current roster and keeps it.
    ///
    /// # Errors
    /// [`SchedulerError::NoEmployees`] if nobody is registered.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&ScheduleResult, SchedulerError> {
        let result = self.scheduler.schedule(&self.employees, rng)?;
        Ok(&*self.last_result.insert(result))
    }

    /// Registered employees, in registration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by (trimmed) name.
    pub fn get(&self, name: &str) -> Option<&Employee> {
        let name = name.trim();
        self.employees.iter().find(|e| e.name() == name)
    }

    /// Whether an employee with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The most recent schedule, if still current.
    pub fn last_result(&self) -> Option<&ScheduleResult> {
        self.last_result.as_ref()
    }

    /// The staffing policy used for generation.
    pub fn policy(&self) -> &StaffingPolicy {
        self.scheduler.policy()
    }
}

/// Thread-safe roster for long-lived services.
#[derive(Debug, Default)]
pub struct SharedRoster {
    inner: RwLock<SharedState>,
}

#[derive(Debug, Default)]
struct SharedState {
    roster: Roster,
    /// Bumped by every mutation; a schedule computed against an older
    /// revision is not stored.
    revision: u64,
}

impl SharedRoster {
    /// Creates an empty shared roster with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing roster.
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            inner: RwLock::new(SharedState { roster, revision: 0 }),
        }
    }

    /// See [`Roster::register`].
    pub fn register(&self, sheet: &PreferenceSheet) -> Result<(), SchedulerError> {
        let employee = Employee::from_sheet(sheet)?;
        let mut state = self.inner.write();
        state.roster.register_employee(employee)?;
        state.revision += 1;
        Ok(())
    }

    /// See [`Roster::reset`].
    pub fn reset(&self) {
        let mut state = self.inner.write();
        state.roster.reset();
        state.revision += 1;
    }

    /// Generates a schedule from a snapshot of the current roster.
    ///
    /// The result is always returned; it becomes [`Self::last_result`] only
    /// if no registration or reset happened during the computation.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ScheduleResult, SchedulerError> {
        let (employees, scheduler, revision) = {
            let state = self.inner.read();
            (
                state.roster.employees.clone(),
                state.roster.scheduler.clone(),
                state.revision,
            )
        };

        let result = scheduler.schedule(&employees, rng)?;

        let mut state = self.inner.write();
        if state.revision == revision {
            state.roster.last_result = Some(result.clone());
        } else {
            debug!(
                snapshot = revision,
                current = state.revision,
                "roster changed during generation, result not stored"
            );
        }
        Ok(result)
    }

    /// Copy of the registered employees.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.inner.read().roster.employees.clone()
    }

    /// Copy of the most recent current schedule.
    pub fn last_result(&self) -> Option<ScheduleResult> {
        self.inner.read().roster.last_result.clone()
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.inner.read().roster.len()
    }

    /// Whether nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().roster.is_empty()
    }

    /// Unwraps into the plain roster.
    pub fn into_inner(self) -> Roster {
        self.inner.into_inner().roster
    }
}
