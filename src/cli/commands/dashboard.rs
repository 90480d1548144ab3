//! Dashboard command handler

use super::{store_failure, CommandResult};
use studyhub::core::dashboard::Dashboard;
use studyhub::core::dates::{format_date, format_date_short, DateClassifier};
use studyhub::core::models::{Assignment, Course};
use studyhub::core::store::{JsonFileStore, Repository};

fn code_for(courses: &[Course], assignment: &Assignment) -> String {
    courses
        .iter()
        .find(|c| c.id == assignment.course_id)
        .map_or_else(String::new, |c| c.code.clone())
}

/// Print the dashboard for the current snapshot
pub fn run(
    repo: &Repository<JsonFileStore>,
    dates: &DateClassifier,
    upcoming_days: u32,
) -> CommandResult {
    let semester = repo.semester().map_err(|e| store_failure(&e))?;
    let courses = repo.courses().map_err(|e| store_failure(&e))?;
    let assignments = repo.assignments().map_err(|e| store_failure(&e))?;
    let dashboard = Dashboard::build(&courses, &assignments, dates, u64::from(upcoming_days));

    println!("\n=== {} ===", semester.name);
    println!("Today: {}\n", format_date(dates.today()));
    println!("GPA:      {}", dashboard.gpa_label());
    println!("Courses:  {}", dashboard.course_count);
    println!("Credits:  {}", dashboard.total_credits);

    if !dashboard.due_today.is_empty() {
        println!("\nDue today:");
        for assignment in &dashboard.due_today {
            println!(
                "  {:<10} {}",
                code_for(&courses, assignment),
                assignment.title
            );
        }
    }

    println!("\nDue in the next {} day(s):", dashboard.upcoming_days);
    if dashboard.upcoming.is_empty() {
        println!("  nothing due");
    }
    for assignment in &dashboard.upcoming {
        println!(
            "  {:<10} {:<10} {} ({})",
            format_date_short(assignment.due_date),
            code_for(&courses, assignment),
            assignment.title,
            dates.classify(assignment.due_date).label()
        );
    }

    println!("\nOverdue:");
    if dashboard.caught_up() {
        println!("  ✓ all caught up");
    }
    for assignment in &dashboard.overdue {
        println!(
            "  {:<10} {:<10} {}",
            format_date_short(assignment.due_date),
            code_for(&courses, assignment),
            assignment.title
        );
    }
    Ok(())
}
