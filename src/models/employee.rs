//! Employee model and employment categories.
//!
//! This module defines the [`Employee`] record and the closed
//! [`Compensation`] sum type that carries each category's pay fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_payroll;
use crate::error::{PayrollError, PayrollResult};

use super::profile::EmployeeProfile;

/// The employment category of an employee.
///
/// This is a field-less tag used for reporting; the category-specific
/// pay fields live in [`Compensation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// Permanent employee paid a salary plus benefits.
    Permanent,
    /// Contract employee paid by the hour.
    Contract,
    /// Permanent employee with a managerial bonus.
    Manager,
    /// Permanent employee earning sales commission.
    SalesPerson,
    /// Contract employee with separate overtime pay.
    Technician,
}

/// Category-specific compensation for an employee.
///
/// A closed set of five tags. The permanent categories share the
/// `salary`/`benefits` base; the contract categories share the
/// `hourly_wage`/`hours_worked` base; `Manager`, `SalesPerson`, and
/// `Technician` each add one field on top of their base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Compensation {
    /// Salaried employee: pay is salary + benefits.
    Permanent {
        /// The base salary.
        salary: Decimal,
        /// The benefits amount.
        benefits: Decimal,
    },
    /// Hourly employee: pay is hourly_wage × hours_worked.
    Contract {
        /// The hourly wage.
        hourly_wage: Decimal,
        /// The number of hours worked.
        hours_worked: Decimal,
    },
    /// Salaried employee with a bonus on top of the permanent base.
    Manager {
        /// The base salary.
        salary: Decimal,
        /// The benefits amount.
        benefits: Decimal,
        /// The managerial bonus.
        bonus: Decimal,
    },
    /// Salaried employee with commission on top of the permanent base.
    SalesPerson {
        /// The base salary.
        salary: Decimal,
        /// The benefits amount.
        benefits: Decimal,
        /// The sales commission earned.
        sales_commission: Decimal,
    },
    /// Hourly employee with overtime pay on top of the contract base.
    Technician {
        /// The hourly wage.
        hourly_wage: Decimal,
        /// The number of hours worked.
        hours_worked: Decimal,
        /// The overtime pay earned.
        overtime_pay: Decimal,
    },
}

/// An employee record under roster management.
///
/// Identity fields are fixed at construction; there are no setters.
/// Identifier uniqueness is a roster-level concern and is deliberately
/// not enforced here.
///
/// `Employee` does not implement `Deserialize`: construction must go
/// through [`Employee::new`] or the per-category constructors so the
/// field validation cannot be bypassed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let manager = Employee::manager(
///     1,
///     "Ana",
///     "Eng",
///     Decimal::from(1000),
///     Decimal::from(200),
///     Decimal::from(50),
/// )
/// .unwrap();
/// assert_eq!(manager.calculate_payroll(), Decimal::from(1250));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: i64,
    name: String,
    department: String,
    #[serde(flatten)]
    compensation: Compensation,
}

impl Employee {
    /// Creates an employee from identity fields and a compensation plan.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidArgument`] if the identifier is not
    /// positive, the name or department is empty, or any compensation
    /// amount is negative. The error names the offending field.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        compensation: Compensation,
    ) -> PayrollResult<Self> {
        let name = name.into();
        let department = department.into();

        if id <= 0 {
            return Err(PayrollError::invalid_argument(
                "employee_id",
                "must be positive",
            ));
        }
        if name.is_empty() {
            return Err(PayrollError::invalid_argument("name", "cannot be empty"));
        }
        if department.is_empty() {
            return Err(PayrollError::invalid_argument(
                "department",
                "cannot be empty",
            ));
        }
        validate_compensation(&compensation)?;

        Ok(Self {
            id,
            name,
            department,
            compensation,
        })
    }

    /// Creates a permanent employee (salary + benefits).
    pub fn permanent(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: Decimal,
        benefits: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(id, name, department, Compensation::Permanent { salary, benefits })
    }

    /// Creates a contract employee (hourly wage × hours worked).
    pub fn contract(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        hourly_wage: Decimal,
        hours_worked: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            id,
            name,
            department,
            Compensation::Contract {
                hourly_wage,
                hours_worked,
            },
        )
    }

    /// Creates a manager (permanent base + bonus).
    pub fn manager(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: Decimal,
        benefits: Decimal,
        bonus: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            id,
            name,
            department,
            Compensation::Manager {
                salary,
                benefits,
                bonus,
            },
        )
    }

    /// Creates a sales person (permanent base + sales commission).
    pub fn sales_person(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: Decimal,
        benefits: Decimal,
        sales_commission: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            id,
            name,
            department,
            Compensation::SalesPerson {
                salary,
                benefits,
                sales_commission,
            },
        )
    }

    /// Creates a technician (contract base + overtime pay).
    pub fn technician(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        hourly_wage: Decimal,
        hours_worked: Decimal,
        overtime_pay: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            id,
            name,
            department,
            Compensation::Technician {
                hourly_wage,
                hours_worked,
                overtime_pay,
            },
        )
    }

    /// Returns the employee's identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the employee's compensation plan.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns the employment category tag for this employee.
    pub fn category(&self) -> EmployeeCategory {
        match self.compensation {
            Compensation::Permanent { .. } => EmployeeCategory::Permanent,
            Compensation::Contract { .. } => EmployeeCategory::Contract,
            Compensation::Manager { .. } => EmployeeCategory::Manager,
            Compensation::SalesPerson { .. } => EmployeeCategory::SalesPerson,
            Compensation::Technician { .. } => EmployeeCategory::Technician,
        }
    }

    /// Computes this employee's payroll figure.
    ///
    /// Pure and deterministic; the result is non-negative because every
    /// compensation amount is validated at construction.
    pub fn calculate_payroll(&self) -> Decimal {
        calculate_payroll(self)
    }

    /// Produces a structured description of this record for reporting.
    ///
    /// Base compensation fields appear before specialization fields.
    pub fn describe(&self) -> EmployeeProfile {
        EmployeeProfile::from(self)
    }
}

/// Rejects any negative compensation amount, naming the field.
fn validate_compensation(compensation: &Compensation) -> PayrollResult<()> {
    match compensation {
        Compensation::Permanent { salary, benefits } => {
            check_non_negative("salary", *salary)?;
            check_non_negative("benefits", *benefits)
        }
        Compensation::Contract {
            hourly_wage,
            hours_worked,
        } => {
            check_non_negative("hourly_wage", *hourly_wage)?;
            check_non_negative("hours_worked", *hours_worked)
        }
        Compensation::Manager {
            salary,
            benefits,
            bonus,
        } => {
            check_non_negative("salary", *salary)?;
            check_non_negative("benefits", *benefits)?;
            check_non_negative("bonus", *bonus)
        }
        Compensation::SalesPerson {
            salary,
            benefits,
            sales_commission,
        } => {
            check_non_negative("salary", *salary)?;
            check_non_negative("benefits", *benefits)?;
            check_non_negative("sales_commission", *sales_commission)
        }
        Compensation::Technician {
            hourly_wage,
            hours_worked,
            overtime_pay,
        } => {
            check_non_negative("hourly_wage", *hourly_wage)?;
            check_non_negative("hours_worked", *hours_worked)?;
            check_non_negative("overtime_pay", *overtime_pay)
        }
    }
}

fn check_non_negative(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::invalid_argument(field, "cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_invalid_field(result: PayrollResult<Employee>, expected_field: &str) {
        match result.unwrap_err() {
            PayrollError::InvalidArgument { field, .. } => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_manager_payroll_sums_salary_benefits_bonus() {
        let employee =
            Employee::manager(1, "Ana", "Eng", dec("1000"), dec("200"), dec("50")).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("1250"));
    }

    #[test]
    fn test_technician_payroll_multiplies_wage_and_adds_overtime() {
        let employee =
            Employee::technician(2, "Bo", "Ops", dec("20"), dec("10"), dec("15")).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("215"));
    }

    #[test]
    fn test_sales_person_payroll_with_zero_benefits() {
        let employee =
            Employee::sales_person(1, "Cy", "Sales", dec("500"), dec("0"), dec("300")).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("800"));
    }

    #[test]
    fn test_permanent_payroll_sums_salary_and_benefits() {
        let employee = Employee::permanent(3, "Di", "HR", dec("900.50"), dec("99.50")).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("1000.00"));
    }

    #[test]
    fn test_contract_payroll_multiplies_wage_by_hours() {
        let employee = Employee::contract(4, "Ed", "Ops", dec("25.50"), dec("8")).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("204.00"));
    }

    #[test]
    fn test_accessors_return_identity_fields() {
        let employee =
            Employee::manager(7, "Ana", "Eng", dec("1000"), dec("200"), dec("50")).unwrap();
        assert_eq!(employee.id(), 7);
        assert_eq!(employee.name(), "Ana");
        assert_eq!(employee.department(), "Eng");
        assert_eq!(employee.category(), EmployeeCategory::Manager);
    }

    #[test]
    fn test_zero_identifier_is_rejected() {
        assert_invalid_field(
            Employee::permanent(0, "Ana", "Eng", dec("1"), dec("1")),
            "employee_id",
        );
    }

    #[test]
    fn test_negative_identifier_is_rejected() {
        assert_invalid_field(
            Employee::contract(-1, "Ana", "Eng", dec("1"), dec("1")),
            "employee_id",
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert_invalid_field(
            Employee::manager(1, "", "Eng", dec("1"), dec("1"), dec("1")),
            "name",
        );
    }

    #[test]
    fn test_empty_department_is_rejected() {
        assert_invalid_field(
            Employee::sales_person(1, "Ana", "", dec("1"), dec("1"), dec("1")),
            "department",
        );
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        assert_invalid_field(
            Employee::permanent(1, "Ana", "Eng", dec("-0.01"), dec("1")),
            "salary",
        );
    }

    #[test]
    fn test_negative_benefits_is_rejected() {
        assert_invalid_field(
            Employee::permanent(1, "Ana", "Eng", dec("1"), dec("-1")),
            "benefits",
        );
    }

    #[test]
    fn test_negative_hourly_wage_is_rejected() {
        assert_invalid_field(
            Employee::contract(1, "Ana", "Eng", dec("-20"), dec("10")),
            "hourly_wage",
        );
    }

    #[test]
    fn test_negative_hours_worked_is_rejected() {
        assert_invalid_field(
            Employee::contract(1, "Ana", "Eng", dec("20"), dec("-10")),
            "hours_worked",
        );
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        assert_invalid_field(
            Employee::manager(1, "Ana", "Eng", dec("1"), dec("1"), dec("-1")),
            "bonus",
        );
    }

    #[test]
    fn test_negative_sales_commission_is_rejected() {
        assert_invalid_field(
            Employee::sales_person(1, "Ana", "Eng", dec("1"), dec("1"), dec("-1")),
            "sales_commission",
        );
    }

    #[test]
    fn test_negative_overtime_pay_is_rejected() {
        assert_invalid_field(
            Employee::technician(1, "Ana", "Eng", dec("1"), dec("1"), dec("-1")),
            "overtime_pay",
        );
    }

    #[test]
    fn test_zero_compensation_fields_are_accepted() {
        let employee = Employee::technician(1, "Ana", "Eng", dec("0"), dec("0"), dec("0")).unwrap();
        assert_eq!(employee.calculate_payroll(), Decimal::ZERO);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&EmployeeCategory::SalesPerson).unwrap(),
            "\"sales_person\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeCategory::Permanent).unwrap(),
            "\"permanent\""
        );
    }

    #[test]
    fn test_employee_serializes_with_category_tag() {
        let employee =
            Employee::technician(2, "Bo", "Ops", dec("20"), dec("10"), dec("15")).unwrap();
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Bo");
        assert_eq!(json["category"], "technician");
        assert_eq!(json["hourly_wage"], "20");
    }
}
