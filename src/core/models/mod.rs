//! Canonical records for `StudyHub`

pub mod assignment;
pub mod course;
pub mod semester;

pub use assignment::{Assignment, Priority};
pub use course::Course;
pub use semester::Semester;
