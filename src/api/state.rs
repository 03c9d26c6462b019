//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::roster::Roster;

/// Shared application state.
///
/// The roster is not designed for interleaved mutation, so the whole
/// structure sits behind a single mutex and every handler takes the
/// lock for the duration of its roster operation.
#[derive(Clone, Default)]
pub struct AppState {
    roster: Arc<Mutex<Roster>>,
}

impl AppState {
    /// Creates application state with an empty roster.
    pub fn new() -> Self {
        Self::with_roster(Roster::new())
    }

    /// Creates application state wrapping an existing roster.
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: Arc::new(Mutex::new(roster)),
        }
    }

    /// Returns the mutex guarding the roster.
    pub fn roster(&self) -> &Mutex<Roster> {
        &self.roster
    }
}
