//! In-memory store

use super::{Result, Store};
use crate::core::models::{Assignment, Course, Semester};

/// Store that keeps everything in memory; used by tests and embedders
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    courses: Vec<Course>,
    assignments: Vec<Assignment>,
    semester: Option<Semester>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a snapshot
    #[must_use]
    pub const fn with_data(courses: Vec<Course>, assignments: Vec<Assignment>) -> Self {
        Self {
            courses,
            assignments,
            semester: None,
        }
    }
}

impl Store for MemoryStore {
    fn load_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.clone())
    }

    fn save_courses(&mut self, courses: &[Course]) -> Result<()> {
        self.courses = courses.to_vec();
        Ok(())
    }

    fn load_assignments(&self) -> Result<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }

    fn save_assignments(&mut self, assignments: &[Assignment]) -> Result<()> {
        self.assignments = assignments.to_vec();
        Ok(())
    }

    fn load_semester(&self) -> Result<Semester> {
        Ok(self.semester.clone().unwrap_or_default())
    }

    fn save_semester(&mut self, semester: &Semester) -> Result<()> {
        self.semester = Some(semester.clone());
        Ok(())
    }
}
