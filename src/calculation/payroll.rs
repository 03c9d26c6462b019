//! Payroll figure calculation.
//!
//! This module provides the single dispatch over the closed set of
//! compensation tags, computing each category's payroll figure.

use rust_decimal::Decimal;

use crate::models::{Compensation, Employee};

/// Computes an employee's payroll figure.
///
/// One closed-form formula per category:
///
/// | Category | Formula |
/// |---|---|
/// | Permanent | salary + benefits |
/// | Contract | hourly_wage × hours_worked |
/// | Manager | salary + benefits + bonus |
/// | SalesPerson | salary + benefits + sales_commission |
/// | Technician | hourly_wage × hours_worked + overtime_pay |
///
/// Pure function of the record's fields; the result is non-negative
/// because every amount is validated non-negative at construction.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let contract = Employee::contract(
///     5,
///     "Ed",
///     "Ops",
///     Decimal::from(25),
///     Decimal::from(8),
/// )
/// .unwrap();
/// assert_eq!(calculate_payroll(&contract), Decimal::from(200));
/// ```
pub fn calculate_payroll(employee: &Employee) -> Decimal {
    match *employee.compensation() {
        Compensation::Permanent { salary, benefits } => salary + benefits,
        Compensation::Contract {
            hourly_wage,
            hours_worked,
        } => hourly_wage * hours_worked,
        Compensation::Manager {
            salary,
            benefits,
            bonus,
        } => salary + benefits + bonus,
        Compensation::SalesPerson {
            salary,
            benefits,
            sales_commission,
        } => salary + benefits + sales_commission,
        Compensation::Technician {
            hourly_wage,
            hours_worked,
            overtime_pay,
        } => hourly_wage * hours_worked + overtime_pay,
    }
}
