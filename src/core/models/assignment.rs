//! Assignment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How urgent an assignment is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Default priority
    #[default]
    Medium,
    /// Needs attention first
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown priority: {s}")),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A piece of coursework belonging to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Store-assigned identifier
    pub id: u32,

    /// Id of the owning course
    pub course_id: u32,

    /// Short title
    pub title: String,

    /// Free-form notes
    #[serde(default)]
    pub description: String,

    /// Calendar day the work is due
    pub due_date: NaiveDate,

    /// Urgency
    #[serde(default)]
    pub priority: Priority,

    /// Points received, once graded
    #[serde(default)]
    pub earned_points: Option<f64>,

    /// Points available
    #[serde(default)]
    pub total_points: Option<f64>,

    /// Whether the student has finished it
    #[serde(default)]
    pub completed: bool,
}

impl Assignment {
    /// Create an ungraded, incomplete assignment with medium priority
    #[must_use]
    pub const fn new(id: u32, course_id: u32, title: String, due_date: NaiveDate) -> Self {
        Self {
            id,
            course_id,
            title,
            description: String::new(),
            due_date,
            priority: Priority::Medium,
            earned_points: None,
            total_points: None,
            completed: false,
        }
    }

    /// Builder-style points setter
    #[must_use]
    pub const fn with_points(mut self, earned: Option<f64>, total: Option<f64>) -> Self {
        self.earned_points = earned;
        self.total_points = total;
        self
    }

    /// Builder-style priority setter
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder-style completion setter
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Earned and total points, present only when the assignment counts
    /// toward a grade (both set and total above zero)
    #[must_use]
    pub fn graded_points(&self) -> Option<(f64, f64)> {
        match (self.earned_points, self.total_points) {
            (Some(earned), Some(total)) if total > 0.0 => Some((earned, total)),
            _ => None,
        }
    }

    /// Whether this assignment counts toward the course grade
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.graded_points().is_some()
    }

    /// Percentage score for this assignment alone
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        self.graded_points()
            .map(|(earned, total)| earned / total * 100.0)
    }
}
