//! Grades command handler

use super::{store_failure, CommandResult};
use studyhub::core::dashboard::Dashboard;
use studyhub::core::dates::DateClassifier;
use studyhub::core::grades::CourseStanding;
use studyhub::core::store::{JsonFileStore, Repository};

/// Print per-course grades and the credit-weighted GPA
pub fn run(repo: &Repository<JsonFileStore>, dates: &DateClassifier) -> CommandResult {
    let courses = repo.courses().map_err(|e| store_failure(&e))?;
    let assignments = repo.assignments().map_err(|e| store_failure(&e))?;
    let dashboard = Dashboard::build(&courses, &assignments, dates, 0);

    if dashboard.standings.is_empty() {
        println!("No active courses.");
        return Ok(());
    }

    for standing in &dashboard.standings {
        println!(
            "{:<12} {:>10} {:>4}  {}/{} graded  {} cr",
            standing.course.code,
            standing.percentage_label(),
            standing.letter_label(),
            standing.graded.len(),
            standing.assignment_count,
            standing.course.credits
        );
    }
    println!(
        "\nGPA {} over {} graded credit(s) of {}",
        dashboard.gpa_label(),
        graded_credits(&dashboard.standings),
        dashboard.total_credits
    );
    Ok(())
}

/// Credits of the courses that count toward the GPA
fn graded_credits(standings: &[CourseStanding<'_>]) -> u64 {
    standings
        .iter()
        .filter(|s| s.percentage.is_some())
        .map(|s| u64::from(s.course.credits))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use studyhub::core::grades::course_standings;
    use studyhub::core::models::{Assignment, Course};

    #[test]
    fn test_graded_credits_skip_ungraded_courses() {
        let due = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let courses = vec![
            Course::new(1, "CS 2510".to_string(), "Data Structures".to_string(), 4),
            Course::new(2, "ART 1000".to_string(), "Drawing".to_string(), 2),
        ];
        let assignments = vec![
            Assignment::new(1, 1, "Lab".to_string(), due).with_points(Some(9.0), Some(10.0)),
            Assignment::new(2, 2, "Sketch".to_string(), due),
        ];

        let standings = course_standings(&courses, &assignments);
        assert_eq!(graded_credits(&standings), 4);
    }
}
