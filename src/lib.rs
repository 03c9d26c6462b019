//! Payroll computation engine for an in-memory employee roster.
//!
//! This crate manages a roster of employees across five employment
//! categories and computes each employee's payroll figure according to
//! that category's pay formula.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod roster;
