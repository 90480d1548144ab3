//! Mapping from the hosted backend's record shape
//!
//! The hosted backend stores records with `_c`-suffixed custom fields and a
//! capitalised `Id`. These types mirror that shape exactly and convert into
//! the canonical [`Course`] and [`Assignment`] records, so nothing past this
//! module ever sees the suffixed names.

use super::StoreError;
use crate::core::models::{Assignment, Course, Priority};
use chrono::NaiveDate;
use serde::Deserialize;

/// Course as exported by the hosted backend
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCourse {
    /// Record id
    #[serde(rename = "Id")]
    pub id: u32,
    /// Display name the backend keeps alongside the custom fields
    #[serde(rename = "Name", default)]
    pub display_name: Option<String>,
    /// Course code
    #[serde(default)]
    pub code_c: Option<String>,
    /// Course title
    #[serde(default)]
    pub name_c: Option<String>,
    /// Instructor
    #[serde(default)]
    pub instructor_c: Option<String>,
    /// Credit hours
    #[serde(default)]
    pub credits_c: Option<u32>,
    /// Hex color
    #[serde(default)]
    pub color_c: Option<String>,
    /// Semester name
    #[serde(default)]
    pub semester_c: Option<String>,
    /// Archived flag
    #[serde(default)]
    pub archived_c: Option<bool>,
}

/// A reference to another record: either a bare id or a lookup object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RemoteRef {
    /// `{ "Id": 3, "Name": "CS 2510" }`
    Lookup {
        /// Referenced record id
        #[serde(rename = "Id")]
        id: u32,
    },
    /// `3`
    Id(u32),
    /// `"3"`
    Text(String),
}

impl RemoteRef {
    /// Referenced id, if it can be read as one
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        match self {
            Self::Lookup { id } | Self::Id(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Assignment as exported by the hosted backend
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAssignment {
    /// Record id
    #[serde(rename = "Id")]
    pub id: u32,
    /// Display name the backend keeps alongside the custom fields
    #[serde(rename = "Name", default)]
    pub display_name: Option<String>,
    /// Owning course
    #[serde(default)]
    pub course_id_c: Option<RemoteRef>,
    /// Title
    #[serde(default)]
    pub title_c: Option<String>,
    /// Notes
    #[serde(default)]
    pub description_c: Option<String>,
    /// Due date, `YYYY-MM-DD` optionally followed by a time
    #[serde(default)]
    pub due_date_c: Option<String>,
    /// `low`, `medium` or `high`
    #[serde(default)]
    pub priority_c: Option<String>,
    /// Points available
    #[serde(default)]
    pub total_points_c: Option<f64>,
    /// Points earned
    #[serde(default)]
    pub earned_points_c: Option<f64>,
    /// Completion flag
    #[serde(default)]
    pub completed_c: Option<bool>,
}

/// A batch exported by the hosted backend: `{"courses": [..], "assignments": [..]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteExport {
    /// Course records
    #[serde(default)]
    pub courses: Vec<RemoteCourse>,
    /// Assignment records
    #[serde(default)]
    pub assignments: Vec<RemoteAssignment>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn mapping_error(id: u32, message: impl Into<String>) -> StoreError {
    StoreError::Mapping {
        id,
        message: message.into(),
    }
}

/// Parse the calendar day from a date or date-time string
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

impl TryFrom<RemoteCourse> for Course {
    type Error = StoreError;

    fn try_from(remote: RemoteCourse) -> Result<Self, Self::Error> {
        let id = remote.id;
        let display_name = non_empty(remote.display_name);
        let code = non_empty(remote.code_c)
            .or_else(|| display_name.clone())
            .ok_or_else(|| mapping_error(id, "missing code_c"))?;
        let name = non_empty(remote.name_c)
            .or(display_name)
            .unwrap_or_else(|| code.clone());
        let credits = remote
            .credits_c
            .filter(|c| *c > 0)
            .ok_or_else(|| mapping_error(id, "credits_c must be a positive integer"))?;

        let mut course = Self::new(id, code, name, credits)
            .with_instructor(remote.instructor_c.unwrap_or_default())
            .with_semester(remote.semester_c.unwrap_or_default());
        if let Some(color) = non_empty(remote.color_c) {
            course.color = color;
        }
        course.archived = remote.archived_c.unwrap_or(false);
        Ok(course)
    }
}

impl TryFrom<RemoteAssignment> for Assignment {
    type Error = StoreError;

    fn try_from(remote: RemoteAssignment) -> Result<Self, Self::Error> {
        let id = remote.id;
        let course_id = remote
            .course_id_c
            .as_ref()
            .and_then(RemoteRef::id)
            .ok_or_else(|| mapping_error(id, "missing or unreadable course_id_c"))?;
        let title = non_empty(remote.title_c)
            .or_else(|| non_empty(remote.display_name))
            .ok_or_else(|| mapping_error(id, "missing title_c"))?;
        let raw_due = remote
            .due_date_c
            .ok_or_else(|| mapping_error(id, "missing due_date_c"))?;
        let due_date = parse_due_date(&raw_due)
            .ok_or_else(|| mapping_error(id, format!("unreadable due_date_c '{raw_due}'")))?;
        let priority = remote
            .priority_c
            .as_deref()
            .and_then(|p| p.parse::<Priority>().ok())
            .unwrap_or_default();

        let mut assignment = Self::new(id, course_id, title, due_date)
            .with_priority(priority)
            .with_points(remote.earned_points_c, remote.total_points_c)
            .with_completed(remote.completed_c.unwrap_or(false));
        assignment.description = remote.description_c.unwrap_or_default();
        Ok(assignment)
    }
}
