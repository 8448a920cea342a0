//! Application state for the HTTP server.

use crate::services::Calculator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pipelines and their lookup collaborators
    pub calculator: Calculator,
}

impl AppState {
    /// Create a new application state around a calculator.
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }
}
