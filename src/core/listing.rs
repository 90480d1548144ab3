//! Assignment filtering and display order

use crate::core::dates::DateClassifier;
use crate::core::models::{Assignment, Priority};
use std::fmt;
use std::str::FromStr;

/// Completion filter for assignment listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No filtering
    #[default]
    All,
    /// Completed only
    Completed,
    /// Not yet completed
    Pending,
    /// Not completed and past due
    Overdue,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" | "done" => Ok(Self::Completed),
            "pending" | "todo" => Ok(Self::Pending),
            "overdue" => Ok(Self::Overdue),
            _ => Err(format!("Unknown status filter: {s}")),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Completed => write!(f, "completed"),
            Self::Pending => write!(f, "pending"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// Criteria for narrowing an assignment list. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    /// Keep only this course's assignments
    pub course_id: Option<u32>,
    /// Completion filter
    pub status: StatusFilter,
    /// Keep only this priority
    pub priority: Option<Priority>,
}

impl AssignmentFilter {
    /// Whether `assignment` passes every criterion
    #[must_use]
    pub fn matches(&self, assignment: &Assignment, dates: &DateClassifier) -> bool {
        if self.course_id.is_some_and(|id| id != assignment.course_id) {
            return false;
        }
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => assignment.completed,
            StatusFilter::Pending => !assignment.completed,
            StatusFilter::Overdue => !assignment.completed && dates.is_overdue(assignment.due_date),
        };
        status_ok && self.priority.map_or(true, |p| p == assignment.priority)
    }

    /// Matching assignments in display order
    #[must_use]
    pub fn apply<'a>(
        &self,
        assignments: &'a [Assignment],
        dates: &DateClassifier,
    ) -> Vec<&'a Assignment> {
        let mut matched: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| self.matches(a, dates))
            .collect();
        sort_for_display(&mut matched);
        matched
    }
}

/// Incomplete work first, then earliest due date. The sort is stable, so
/// ties keep their original order.
pub fn sort_for_display(assignments: &mut [&Assignment]) {
    assignments.sort_by_key(|a| (a.completed, a.due_date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new(1, 1, "Old essay".to_string(), day(1)).with_completed(true),
            Assignment::new(2, 1, "Late lab".to_string(), day(5)).with_priority(Priority::High),
            Assignment::new(3, 2, "Reading".to_string(), day(20)).with_priority(Priority::Low),
            Assignment::new(4, 2, "Project".to_string(), day(18)),
        ]
    }

    fn ids(list: &[&Assignment]) -> Vec<u32> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_display_order() {
        let work = sample();
        let dates = DateClassifier::new(day(10));
        let listed = AssignmentFilter::default().apply(&work, &dates);
        assert_eq!(ids(&listed), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_overdue_filter_skips_completed() {
        let work = sample();
        let dates = DateClassifier::new(day(10));
        let filter = AssignmentFilter {
            status: StatusFilter::Overdue,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&work, &dates)), vec![2]);
    }

    #[test]
    fn test_combines_course_and_priority() {
        let work = sample();
        let dates = DateClassifier::new(day(10));
        let filter = AssignmentFilter {
            course_id: Some(2),
            status: StatusFilter::Pending,
            priority: Some(Priority::Low),
        };
        assert_eq!(ids(&filter.apply(&work, &dates)), vec![3]);
    }

    #[test]
    fn test_parses_status_names() {
        assert_eq!("Done".parse::<StatusFilter>(), Ok(StatusFilter::Completed));
        assert_eq!("todo".parse::<StatusFilter>(), Ok(StatusFilter::Pending));
        assert!("later".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Overdue.to_string(), "overdue");
    }
}
