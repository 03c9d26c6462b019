//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints through which an external
//! caller manages the roster and retrieves payroll reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddEmployeeRequest, NameQuery};
pub use response::{
    ApiError, PayrollRunResponse, RemoveEmployeeResponse, RosterReportResponse,
};
pub use state::AppState;
