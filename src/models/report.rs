//! Report models produced by roster operations.
//!
//! Two shapes exist because the roster exposes two distinct bulk
//! operations: a full display (profile plus payroll per record) and a
//! processing pass (identifier plus payroll per record).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::Employee;
use super::profile::EmployeeProfile;

/// One record's full report entry: its description and payroll figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// The record's structured description.
    pub profile: EmployeeProfile,
    /// The record's computed payroll figure.
    pub payroll: Decimal,
}

impl From<&Employee> for EmployeeReport {
    fn from(employee: &Employee) -> Self {
        Self {
            profile: employee.describe(),
            payroll: employee.calculate_payroll(),
        }
    }
}

/// One record's processing entry: its identifier and payroll figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedPayroll {
    /// The employee's identifier.
    pub employee_id: i64,
    /// The computed payroll figure.
    pub payroll: Decimal,
}

impl From<&Employee> for ProcessedPayroll {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id(),
            payroll: employee.calculate_payroll(),
        }
    }
}
