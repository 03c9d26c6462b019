//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the employee and
//! payroll endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::Employee;

/// Request body for the `POST /employees` endpoint.
///
/// Internally tagged by `category`; one variant per employment
/// category, each carrying that category's compensation fields.
/// Decimal amounts are transported as strings (e.g. `"1000.50"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum AddEmployeeRequest {
    /// Add a permanent employee.
    Permanent {
        /// The employee's identifier (positive, caller-assigned).
        id: i64,
        /// The employee's name.
        name: String,
        /// The employee's department.
        department: String,
        /// The base salary.
        salary: Decimal,
        /// The benefits amount.
        benefits: Decimal,
    },
    /// Add a contract employee.
    Contract {
        /// The employee's identifier (positive, caller-assigned).
        id: i64,
        /// The employee's name.
        name: String,
        /// The employee's department.
        department: String,
        /// The hourly wage.
        hourly_wage: Decimal,
        /// The number of hours worked.
        hours_worked: Decimal,
    },
    /// Add a manager.
    Manager {
        /// The employee's identifier (positive, caller-assigned).
        id: i64,
        /// The employee's name.
        name: String,
        /// The employee's department.
        department: String,
        /// The base salary.
        salary: Decimal,
        /// The benefits amount.
        benefits: Decimal,
        /// The managerial bonus.
        bonus: Decimal,
    },
    /// Add a sales person.
    SalesPerson {
        /// The employee's identifier (positive, caller-assigned).
        id: i64,
        /// The employee's name.
        name: String,
        /// The employee's department.
        department: String,
        /// The base salary.
        salary: Decimal,
        /// The benefits amount.
        benefits: Decimal,
        /// The sales commission earned.
        sales_commission: Decimal,
    },
    /// Add a technician.
    Technician {
        /// The employee's identifier (positive, caller-assigned).
        id: i64,
        /// The employee's name.
        name: String,
        /// The employee's department.
        department: String,
        /// The hourly wage.
        hourly_wage: Decimal,
        /// The number of hours worked.
        hours_worked: Decimal,
        /// The overtime pay earned.
        overtime_pay: Decimal,
    },
}

impl TryFrom<AddEmployeeRequest> for Employee {
    type Error = PayrollError;

    fn try_from(request: AddEmployeeRequest) -> Result<Self, Self::Error> {
        match request {
            AddEmployeeRequest::Permanent {
                id,
                name,
                department,
                salary,
                benefits,
            } => Employee::permanent(id, name, department, salary, benefits),
            AddEmployeeRequest::Contract {
                id,
                name,
                department,
                hourly_wage,
                hours_worked,
            } => Employee::contract(id, name, department, hourly_wage, hours_worked),
            AddEmployeeRequest::Manager {
                id,
                name,
                department,
                salary,
                benefits,
                bonus,
            } => Employee::manager(id, name, department, salary, benefits, bonus),
            AddEmployeeRequest::SalesPerson {
                id,
                name,
                department,
                salary,
                benefits,
                sales_commission,
            } => Employee::sales_person(id, name, department, salary, benefits, sales_commission),
            AddEmployeeRequest::Technician {
                id,
                name,
                department,
                hourly_wage,
                hours_worked,
                overtime_pay,
            } => Employee::technician(
                id,
                name,
                department,
                hourly_wage,
                hours_worked,
                overtime_pay,
            ),
        }
    }
}

/// Query parameters for the `GET /employees` name search.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    /// The exact employee name to search for.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_manager_request() {
        let json = r#"{
            "category": "manager",
            "id": 1,
            "name": "Ana",
            "department": "Eng",
            "salary": "1000",
            "benefits": "200",
            "bonus": "50"
        }"#;

        let request: AddEmployeeRequest = serde_json::from_str(json).unwrap();
        let employee = Employee::try_from(request).unwrap();
        assert_eq!(employee.id(), 1);
        assert_eq!(employee.calculate_payroll(), dec("1250"));
    }

    #[test]
    fn test_deserialize_technician_request() {
        let json = r#"{
            "category": "technician",
            "id": 2,
            "name": "Bo",
            "department": "Ops",
            "hourly_wage": "20",
            "hours_worked": "10",
            "overtime_pay": "15"
        }"#;

        let request: AddEmployeeRequest = serde_json::from_str(json).unwrap();
        let employee = Employee::try_from(request).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("215"));
    }

    #[test]
    fn test_unknown_category_fails_to_deserialize() {
        let json = r#"{
            "category": "intern",
            "id": 3,
            "name": "Fi",
            "department": "Eng"
        }"#;

        assert!(serde_json::from_str::<AddEmployeeRequest>(json).is_err());
    }

    #[test]
    fn test_conversion_rejects_invalid_fields() {
        let json = r#"{
            "category": "permanent",
            "id": 0,
            "name": "Ana",
            "department": "Eng",
            "salary": "1000",
            "benefits": "200"
        }"#;

        let request: AddEmployeeRequest = serde_json::from_str(json).unwrap();
        match Employee::try_from(request).unwrap_err() {
            PayrollError::InvalidArgument { field, .. } => assert_eq!(field, "employee_id"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_request_round_trips_through_serde() {
        let request = AddEmployeeRequest::SalesPerson {
            id: 4,
            name: "Cy".to_string(),
            department: "Sales".to_string(),
            salary: dec("500"),
            benefits: dec("0"),
            sales_commission: dec("300"),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"category\":\"sales_person\""));
        let back: AddEmployeeRequest = serde_json::from_str(&json).unwrap();
        let employee = Employee::try_from(back).unwrap();
        assert_eq!(employee.calculate_payroll(), dec("800"));
    }
}
