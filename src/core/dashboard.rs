//! Dashboard summary: GPA, credit load, upcoming and overdue work

use crate::core::dates::DateClassifier;
use crate::core::grades::{calculate_gpa, course_standings, format_gpa, CourseStanding};
use crate::core::listing::sort_for_display;
use crate::core::models::{Assignment, Course};

/// Everything the dashboard shows, computed from one snapshot
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    /// Credit-weighted GPA over graded courses
    pub gpa: Option<f64>,
    /// Number of active (non-archived) courses
    pub course_count: usize,
    /// Credits across active courses
    pub total_credits: u64,
    /// Lookahead used for `upcoming`
    pub upcoming_days: u64,
    /// Incomplete work due today
    pub due_today: Vec<&'a Assignment>,
    /// Work due within the lookahead, earliest first
    pub upcoming: Vec<&'a Assignment>,
    /// Incomplete work past its due date, earliest first
    pub overdue: Vec<&'a Assignment>,
    /// Per-course grades for active courses
    pub standings: Vec<CourseStanding<'a>>,
}

impl<'a> Dashboard<'a> {
    /// Build the dashboard for a snapshot.
    ///
    /// Archived courses and their assignments are left out of every figure.
    #[must_use]
    pub fn build(
        courses: &'a [Course],
        assignments: &'a [Assignment],
        dates: &DateClassifier,
        upcoming_days: u64,
    ) -> Self {
        let active: Vec<&Course> = courses.iter().filter(|c| !c.archived).collect();
        let is_active = |a: &&Assignment| active.iter().any(|c| c.id == a.course_id);

        let mut upcoming: Vec<&Assignment> = dates
            .upcoming_assignments(assignments, upcoming_days)
            .into_iter()
            .filter(is_active)
            .collect();
        sort_for_display(&mut upcoming);

        let due_today: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| !a.completed && dates.is_due_today(a.due_date))
            .filter(is_active)
            .collect();

        let mut overdue: Vec<&Assignment> = dates
            .overdue_assignments(assignments)
            .into_iter()
            .filter(is_active)
            .collect();
        overdue.sort_by_key(|a| a.due_date);

        let gpa = calculate_gpa(active.iter().copied(), assignments);

        let standings = course_standings(courses, assignments)
            .into_iter()
            .filter(|s| !s.course.archived)
            .collect();

        Self {
            gpa,
            course_count: active.len(),
            total_credits: active.iter().map(|c| u64::from(c.credits)).sum(),
            upcoming_days,
            due_today,
            upcoming,
            overdue,
            standings,
        }
    }

    /// GPA for display
    #[must_use]
    pub fn gpa_label(&self) -> String {
        format_gpa(self.gpa)
    }

    /// Whether nothing is overdue
    #[must_use]
    pub fn caught_up(&self) -> bool {
        self.overdue.is_empty()
    }
}
