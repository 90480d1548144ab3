//! Persistence boundary
//!
//! The calculation modules never touch storage. Callers load a snapshot
//! through a [`Store`], hand it to the pure functions, and write changes back
//! through the [`Repository`].

pub mod json;
pub mod memory;
pub mod remote;
pub mod repository;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::{
    AssignmentDraft, AssignmentUpdate, CourseDraft, CourseUpdate, ImportSummary, Repository,
};

use crate::core::models::{Assignment, Course, Semester};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the persistence boundary
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a data file failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A data file holds malformed JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// A record failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong
        message: String,
    },

    /// No course with this id
    #[error("Course {0} not found")]
    CourseNotFound(u32),

    /// No assignment with this id
    #[error("Assignment {0} not found")]
    AssignmentNotFound(u32),

    /// A remote record could not be mapped to the canonical shape
    #[error("Cannot map remote record {id}: {message}")]
    Mapping {
        /// Remote record id
        id: u32,
        /// What was wrong
        message: String,
    },
}

impl StoreError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Whole-collection persistence for the canonical records.
///
/// Implementations replace a collection wholesale on save; the repository
/// layers id allocation and validation on top.
pub trait Store {
    /// All stored courses
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read
    fn load_courses(&self) -> Result<Vec<Course>>;

    /// Replace the stored courses
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written
    fn save_courses(&mut self, courses: &[Course]) -> Result<()>;

    /// All stored assignments
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read
    fn load_assignments(&self) -> Result<Vec<Assignment>>;

    /// Replace the stored assignments
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written
    fn save_assignments(&mut self, assignments: &[Assignment]) -> Result<()>;

    /// The stored semester, or the default when none was saved
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read
    fn load_semester(&self) -> Result<Semester>;

    /// Replace the stored semester
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written
    fn save_semester(&mut self, semester: &Semester) -> Result<()>;
}
