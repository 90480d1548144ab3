//! Course model

use serde::{Deserialize, Serialize};

/// Colors offered for new courses; assigned round-robin by id
pub const COURSE_COLORS: [&str; 10] = [
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
    "#f97316", "#6366f1",
];

/// Smallest credit load a course may carry
pub const MIN_CREDITS: u32 = 1;

/// Largest credit load a course may carry
pub const MAX_CREDITS: u32 = 6;

/// Represents a course the student is enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier
    pub id: u32,

    /// Course code (e.g., "CS 2510")
    pub code: String,

    /// Course title (e.g., "Data Structures")
    pub name: String,

    /// Instructor name
    #[serde(default)]
    pub instructor: String,

    /// Credit hours, used as the GPA weight
    pub credits: u32,

    /// Display color as a hex string
    #[serde(default)]
    pub color: String,

    /// Semester the course belongs to
    #[serde(default)]
    pub semester: String,

    /// Archived courses are kept but hidden from active listings
    #[serde(default)]
    pub archived: bool,
}

impl Course {
    /// Create a new course with the palette color for its id
    ///
    /// # Arguments
    /// * `id` - Store identifier
    /// * `code` - Course code
    /// * `name` - Course title
    /// * `credits` - Credit hours
    #[must_use]
    pub fn new(id: u32, code: String, name: String, credits: u32) -> Self {
        Self {
            id,
            code,
            name,
            instructor: String::new(),
            credits,
            color: Self::palette_color(id).to_string(),
            semester: String::new(),
            archived: false,
        }
    }

    /// Palette entry for an id
    #[must_use]
    pub const fn palette_color(id: u32) -> &'static str {
        COURSE_COLORS[(id as usize) % COURSE_COLORS.len()]
    }

    /// Builder-style instructor setter
    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Builder-style semester setter
    #[must_use]
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Label used in listings, e.g. "CS 2510 - Data Structures"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}
