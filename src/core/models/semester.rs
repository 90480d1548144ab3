//! Semester model

use serde::{Deserialize, Serialize};

/// Name used when nothing has been stored yet
pub const DEFAULT_SEMESTER_NAME: &str = "Fall 2024";

/// The term the planner is currently tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Display name (e.g., "Spring 2025")
    pub name: String,
    /// Whether this is the active term
    pub active: bool,
}

impl Semester {
    /// Create an active semester with the given name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self { name, active: true }
    }
}

impl Default for Semester {
    fn default() -> Self {
        Self::new(DEFAULT_SEMESTER_NAME.to_string())
    }
}
