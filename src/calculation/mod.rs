//! Calculation logic for the payroll engine.
//!
//! This module contains the payroll dispatch: one closed-form formula
//! per employment category, selected by compensation tag.

mod payroll;

pub use payroll::calculate_payroll;
