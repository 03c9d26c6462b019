//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions the core can produce.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Only two failure kinds exist in the core: rejected construction input
/// and a failed roster search. Both are recoverable by the caller.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::NotFound {
///     query: "id 42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: id 42");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A construction argument was rejected.
    #[error("Invalid argument for field '{field}': {message}")]
    InvalidArgument {
        /// The field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// No employee matched a roster search.
    #[error("Employee not found: {query}")]
    NotFound {
        /// A description of the lookup that failed (e.g. "id 42").
        query: String,
    },
}

impl PayrollError {
    /// Creates an `InvalidArgument` error for the given field.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
