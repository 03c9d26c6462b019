//! The employee roster.
//!
//! An ordered, exclusively-owned collection of employee records with
//! add, remove, search, and bulk-report operations. All operations are
//! linear scans; insertion order is preserved.

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeReport, ProcessedPayroll};

/// An ordered collection of employee records.
///
/// The roster owns its records by value. Duplicate identifiers are
/// permitted on add; `remove` and the searches act on the first match in
/// insertion order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(
///     Employee::permanent(1, "Ana", "Eng", Decimal::from(1000), Decimal::from(200)).unwrap(),
/// );
/// let report = roster.find_by_id(1).unwrap();
/// assert_eq!(report.payroll, Decimal::from(1200));
/// ```
#[derive(Debug, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Appends an employee to the end of the roster.
    ///
    /// No identifier uniqueness check is performed; callers that need
    /// unique identifiers must enforce that themselves.
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Removes the first record whose identifier matches, returning it.
    ///
    /// Returns `None` when no record matches; an absent identifier is a
    /// no-op, not an error. Later records with the same identifier are
    /// left in place.
    pub fn remove(&mut self, id: i64) -> Option<Employee> {
        let position = self.employees.iter().position(|e| e.id() == id)?;
        Some(self.employees.remove(position))
    }

    /// Produces a report entry for every record, in insertion order.
    ///
    /// Each entry carries the record's description and computed payroll.
    pub fn display_all(&self) -> Vec<EmployeeReport> {
        self.employees.iter().map(EmployeeReport::from).collect()
    }

    /// Computes a processing entry for every record, in insertion order.
    ///
    /// Reports the same payroll figures as [`Roster::display_all`] but
    /// framed as (identifier, payroll) pairs; the two operations are
    /// invoked independently by callers.
    pub fn process_all(&self) -> Vec<ProcessedPayroll> {
        self.employees.iter().map(ProcessedPayroll::from).collect()
    }

    /// Returns the report for the first record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::NotFound`] when no record matches.
    pub fn find_by_id(&self, id: i64) -> PayrollResult<EmployeeReport> {
        self.employees
            .iter()
            .find(|e| e.id() == id)
            .map(EmployeeReport::from)
            .ok_or_else(|| PayrollError::NotFound {
                query: format!("id {}", id),
            })
    }

    /// Returns the report for the first record whose name matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::NotFound`] when no record matches.
    pub fn find_by_name(&self, name: &str) -> PayrollResult<EmployeeReport> {
        self.employees
            .iter()
            .find(|e| e.name() == name)
            .map(EmployeeReport::from)
            .ok_or_else(|| PayrollError::NotFound {
                query: format!("name '{}'", name),
            })
    }

    /// Returns the number of records in the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns a read-only view of the records in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
