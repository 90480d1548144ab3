//! Grade report generation
//!
//! A report is built in two steps: [`ReportContext`] gathers a snapshot and
//! formats every value once, then a [`ReportGenerator`] renders it through
//! one of the templates in `report/templates/`.

pub mod formats;

use crate::core::dashboard::Dashboard;
use crate::core::dates::{format_date, format_date_short, DateClassifier};
use crate::core::grades::{grade_to_letter, CourseStanding};
use crate::core::models::{Assignment, Course, Semester};
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One graded assignment line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    /// Assignment title
    pub title: String,
    /// Short due date
    pub due: String,
    /// "earned / total"
    pub score: String,
    /// Percentage with one decimal
    pub percentage: String,
    /// Letter grade
    pub letter: String,
}

/// One course section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSection {
    /// Course code
    pub code: String,
    /// Course title
    pub name: String,
    /// Instructor
    pub instructor: String,
    /// Credit hours
    pub credits: u32,
    /// Percentage label ("No grades" when ungraded)
    pub percentage: String,
    /// Letter label ("N/A" when ungraded)
    pub letter: String,
    /// Graded assignments
    pub graded_count: usize,
    /// All assignments
    pub assignment_count: usize,
    /// Graded assignment lines
    pub rows: Vec<AssignmentRow>,
}

/// One overdue assignment line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueRow {
    /// Assignment title
    pub title: String,
    /// Course code
    pub course: String,
    /// Long due date
    pub due: String,
}

/// Display-ready data for a grade report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Semester name
    pub semester: String,
    /// Day the report was generated
    pub generated: String,
    /// GPA label
    pub gpa: String,
    /// Active course count
    pub course_count: usize,
    /// Credits across active courses
    pub total_credits: u64,
    /// Per-course sections
    pub courses: Vec<CourseSection>,
    /// Overdue work
    pub overdue: Vec<OverdueRow>,
}

fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}

fn assignment_row(assignment: &Assignment) -> Option<AssignmentRow> {
    let (earned, total) = assignment.graded_points()?;
    let percentage = assignment.percentage()?;
    Some(AssignmentRow {
        title: assignment.title.clone(),
        due: format_date_short(assignment.due_date),
        score: format!("{} / {}", format_points(earned), format_points(total)),
        percentage: format!("{percentage:.1}%"),
        letter: grade_to_letter(percentage).to_string(),
    })
}

fn course_section(standing: &CourseStanding<'_>) -> CourseSection {
    CourseSection {
        code: standing.course.code.clone(),
        name: standing.course.name.clone(),
        instructor: standing.course.instructor.clone(),
        credits: standing.course.credits,
        percentage: standing.percentage_label(),
        letter: standing.letter_label().to_string(),
        graded_count: standing.graded.len(),
        assignment_count: standing.assignment_count,
        rows: standing
            .graded
            .iter()
            .filter_map(|a| assignment_row(a))
            .collect(),
    }
}

impl ReportContext {
    /// Build a report for the active courses of a snapshot
    #[must_use]
    pub fn build(
        semester: &Semester,
        courses: &[Course],
        assignments: &[Assignment],
        dates: &DateClassifier,
    ) -> Self {
        let dashboard = Dashboard::build(courses, assignments, dates, 0);
        let code_of = |course_id: u32| {
            courses
                .iter()
                .find(|c| c.id == course_id)
                .map_or_else(|| format!("#{course_id}"), |c| c.code.clone())
        };

        Self {
            semester: semester.name.clone(),
            generated: format_date(dates.today()),
            gpa: dashboard.gpa_label(),
            course_count: dashboard.course_count,
            total_credits: dashboard.total_credits,
            courses: dashboard.standings.iter().map(course_section).collect(),
            overdue: dashboard
                .overdue
                .iter()
                .map(|a| OverdueRow {
                    title: a.title.clone(),
                    course: code_of(a.course_id),
                    due: format_date(a.due_date),
                })
                .collect(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report to a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Render the report and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
