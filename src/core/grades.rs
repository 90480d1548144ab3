//! Course grades and credit-weighted GPA
//!
//! Everything here is a pure function of the records passed in. A course
//! without graded work has no grade (`None`), which is different from a
//! grade of zero, and such courses are left out of the GPA entirely.

use crate::core::models::{Assignment, Course};
use std::fmt;

/// Letter grades, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    /// 93 and above
    A,
    /// 90 to below 93
    AMinus,
    /// 87 to below 90
    BPlus,
    /// 83 to below 87
    B,
    /// 80 to below 83
    BMinus,
    /// 77 to below 80
    CPlus,
    /// 73 to below 77
    C,
    /// 70 to below 73
    CMinus,
    /// 67 to below 70
    DPlus,
    /// 65 to below 67
    D,
    /// Below 65
    F,
}

impl LetterGrade {
    /// Display form, e.g. `"A-"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the percentage scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Inclusive lower bound, in percent
    pub min_percentage: f64,
    /// Letter for the band
    pub letter: LetterGrade,
    /// Value on the 4.0 scale
    pub grade_point: f64,
}

const fn band(min_percentage: f64, letter: LetterGrade, grade_point: f64) -> GradeBand {
    GradeBand {
        min_percentage,
        letter,
        grade_point,
    }
}

/// Percentage bands from highest to lowest. Anything below the last band is
/// an F worth 0.0.
pub const GRADE_BANDS: [GradeBand; 10] = [
    band(93.0, LetterGrade::A, 4.0),
    band(90.0, LetterGrade::AMinus, 3.7),
    band(87.0, LetterGrade::BPlus, 3.3),
    band(83.0, LetterGrade::B, 3.0),
    band(80.0, LetterGrade::BMinus, 2.7),
    band(77.0, LetterGrade::CPlus, 2.3),
    band(73.0, LetterGrade::C, 2.0),
    band(70.0, LetterGrade::CMinus, 1.7),
    band(67.0, LetterGrade::DPlus, 1.3),
    band(65.0, LetterGrade::D, 1.0),
];

const FAILING_BAND: GradeBand = band(f64::NEG_INFINITY, LetterGrade::F, 0.0);

/// Band containing `percentage`. Bands are not interpolated.
#[must_use]
pub fn band_for(percentage: f64) -> GradeBand {
    GRADE_BANDS
        .iter()
        .copied()
        .find(|band| percentage >= band.min_percentage)
        .unwrap_or(FAILING_BAND)
}

/// Map a percentage onto the 0.0–4.0 scale
#[must_use]
pub fn grade_point(percentage: f64) -> f64 {
    band_for(percentage).grade_point
}

/// Map a percentage onto a letter grade
#[must_use]
pub fn grade_to_letter(percentage: f64) -> LetterGrade {
    band_for(percentage).letter
}

/// Percentage grade over the graded subset of `assignments`.
///
/// Returns `None` when nothing is graded. Earned points above the total are
/// not clamped, so the result can exceed 100.
pub fn calculate_course_grade<'a, I>(assignments: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let (earned, total) = assignments
        .into_iter()
        .filter_map(Assignment::graded_points)
        .fold((0.0, 0.0), |(earned, total), (e, t)| (earned + e, total + t));

    (total > 0.0).then(|| earned / total * 100.0)
}

/// Grade for one course, considering only assignments that reference it
pub fn course_grade(course: &Course, assignments: &[Assignment]) -> Option<f64> {
    calculate_course_grade(assignments.iter().filter(|a| a.course_id == course.id))
}

/// Credit-weighted GPA over every course that has a grade.
///
/// Ungraded courses contribute neither credits nor points. Returns `None`
/// when no course is graded.
pub fn calculate_gpa<'a, I>(courses: I, assignments: &[Assignment]) -> Option<f64>
where
    I: IntoIterator<Item = &'a Course>,
{
    let (points, credits) = courses
        .into_iter()
        .filter_map(|course| {
            course_grade(course, assignments).map(|grade| (grade_point(grade), course.credits))
        })
        .fold((0.0, 0.0), |(points, credits), (gp, cr)| {
            let cr = f64::from(cr);
            (gp.mul_add(cr, points), credits + cr)
        });

    (credits > 0.0).then(|| points / credits)
}

/// Grade summary for a single course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStanding<'a> {
    /// The course
    pub course: &'a Course,
    /// Percentage grade, if any work is graded
    pub percentage: Option<f64>,
    /// Letter for `percentage`
    pub letter: Option<LetterGrade>,
    /// Graded assignments of this course, in input order
    pub graded: Vec<&'a Assignment>,
    /// All assignments of this course
    pub assignment_count: usize,
}

impl CourseStanding<'_> {
    /// Percentage formatted to one decimal, or "No grades"
    #[must_use]
    pub fn percentage_label(&self) -> String {
        self.percentage
            .map_or_else(|| "No grades".to_string(), |p| format!("{p:.1}%"))
    }

    /// Letter grade, or "N/A"
    #[must_use]
    pub fn letter_label(&self) -> &'static str {
        self.letter.map_or("N/A", LetterGrade::as_str)
    }
}

/// Build a standing for every course, in course order
#[must_use]
pub fn course_standings<'a>(
    courses: &'a [Course],
    assignments: &'a [Assignment],
) -> Vec<CourseStanding<'a>> {
    courses
        .iter()
        .map(|course| {
            let own: Vec<&Assignment> = assignments
                .iter()
                .filter(|a| a.course_id == course.id)
                .collect();
            let percentage = calculate_course_grade(own.iter().copied());
            CourseStanding {
                course,
                percentage,
                letter: percentage.map(grade_to_letter),
                graded: own.iter().copied().filter(|a| a.is_graded()).collect(),
                assignment_count: own.len(),
            }
        })
        .collect()
}

/// GPA formatted to two decimals, or "N/A"
#[must_use]
pub fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map_or_else(|| "N/A".to_string(), |g| format!("{g:.2}"))
}
