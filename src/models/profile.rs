//! Structured employee descriptions for reporting.
//!
//! This module contains the [`EmployeeProfile`] type produced by
//! [`Employee::describe`](super::Employee::describe): the record's
//! identity fields plus an ordered list of labelled compensation fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::{Compensation, Employee, EmployeeCategory};

/// A single labelled compensation field in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileField {
    /// The field label (e.g. "salary", "overtime_pay").
    pub label: String,
    /// The field value.
    pub value: Decimal,
}

impl ProfileField {
    fn new(label: &str, value: Decimal) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// A structured, human-renderable description of one employee record.
///
/// Compensation fields are listed base-category fields first, then the
/// specialization field, so a renderer can print them in order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let technician = Employee::technician(
///     2,
///     "Bo",
///     "Ops",
///     Decimal::from(20),
///     Decimal::from(10),
///     Decimal::from(15),
/// )
/// .unwrap();
/// let profile = technician.describe();
/// assert_eq!(profile.compensation[0].label, "hourly_wage");
/// assert_eq!(profile.compensation[2].label, "overtime_pay");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The employee's identifier.
    pub employee_id: i64,
    /// The employee's name.
    pub name: String,
    /// The employee's department.
    pub department: String,
    /// The employment category tag.
    pub category: EmployeeCategory,
    /// The labelled compensation fields, in reporting order.
    pub compensation: Vec<ProfileField>,
}

impl From<&Employee> for EmployeeProfile {
    fn from(employee: &Employee) -> Self {
        let compensation = match *employee.compensation() {
            Compensation::Permanent { salary, benefits } => vec![
                ProfileField::new("salary", salary),
                ProfileField::new("benefits", benefits),
            ],
            Compensation::Contract {
                hourly_wage,
                hours_worked,
            } => vec![
                ProfileField::new("hourly_wage", hourly_wage),
                ProfileField::new("hours_worked", hours_worked),
            ],
            Compensation::Manager {
                salary,
                benefits,
                bonus,
            } => vec![
                ProfileField::new("salary", salary),
                ProfileField::new("benefits", benefits),
                ProfileField::new("bonus", bonus),
            ],
            Compensation::SalesPerson {
                salary,
                benefits,
                sales_commission,
            } => vec![
                ProfileField::new("salary", salary),
                ProfileField::new("benefits", benefits),
                ProfileField::new("sales_commission", sales_commission),
            ],
            Compensation::Technician {
                hourly_wage,
                hours_worked,
                overtime_pay,
            } => vec![
                ProfileField::new("hourly_wage", hourly_wage),
                ProfileField::new("hours_worked", hours_worked),
                ProfileField::new("overtime_pay", overtime_pay),
            ],
        };

        Self {
            employee_id: employee.id(),
            name: employee.name().to_string(),
            department: employee.department().to_string(),
            category: employee.category(),
            compensation,
        }
    }
}
