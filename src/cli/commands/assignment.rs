//! Assignment command handlers

use super::{store_failure, CommandResult};
use crate::args::{AssignmentCommand, PointsArgs};
use studyhub::core::dates::{format_date_short, DateClassifier};
use studyhub::core::listing::AssignmentFilter;
use studyhub::core::models::{Assignment, Course};
use studyhub::core::store::{AssignmentDraft, AssignmentUpdate, JsonFileStore, Repository};
use studyhub::verbose;

/// Dispatch assignment subcommands
pub fn run(
    action: AssignmentCommand,
    repo: &mut Repository<JsonFileStore>,
    dates: &DateClassifier,
) -> CommandResult {
    match action {
        AssignmentCommand::Add {
            title,
            course,
            due,
            priority,
            description,
            points,
        } => {
            let draft = AssignmentDraft {
                course_id: course,
                title,
                description,
                due_date: due,
                priority,
                earned_points: points.earned,
                total_points: points.total,
            };
            let assignment = repo.add_assignment(draft).map_err(|e| store_failure(&e))?;
            println!(
                "✓ Added assignment {} ({}), due {}",
                assignment.title,
                assignment.id,
                format_date_short(assignment.due_date)
            );
            Ok(())
        }
        AssignmentCommand::List {
            course,
            status,
            priority,
        } => {
            let filter = AssignmentFilter {
                course_id: course,
                status,
                priority,
            };
            list(repo, &filter, dates)
        }
        AssignmentCommand::Edit {
            id,
            course,
            title,
            description,
            due,
            priority,
            points,
            clear_points,
        } => {
            let update = AssignmentUpdate {
                course_id: course,
                title,
                description,
                due_date: due,
                priority,
                completed: None,
                ..points_update(points, clear_points)
            };
            let assignment = repo
                .update_assignment(id, update)
                .map_err(|e| store_failure(&e))?;
            println!("✓ Updated assignment {}", assignment.title);
            Ok(())
        }
        AssignmentCommand::Complete { id } => {
            let assignment = repo.toggle_completed(id).map_err(|e| store_failure(&e))?;
            if assignment.completed {
                println!("✓ Marked {} as done", assignment.title);
            } else {
                println!("✓ Marked {} as not done", assignment.title);
            }
            Ok(())
        }
        AssignmentCommand::Remove { id } => {
            let assignment = repo.delete_assignment(id).map_err(|e| store_failure(&e))?;
            println!("✓ Deleted assignment {}", assignment.title);
            Ok(())
        }
    }
}

/// Point fields of an update: explicit values win, `--clear-points` empties both
fn points_update(points: PointsArgs, clear: bool) -> AssignmentUpdate {
    if clear {
        return AssignmentUpdate {
            earned_points: Some(None),
            total_points: Some(None),
            ..AssignmentUpdate::default()
        };
    }
    AssignmentUpdate {
        earned_points: points.earned.map(Some),
        total_points: points.total.map(Some),
        ..AssignmentUpdate::default()
    }
}

fn course_code(courses: &[Course], course_id: u32) -> String {
    courses
        .iter()
        .find(|c| c.id == course_id)
        .map_or_else(|| format!("#{course_id}"), |c| c.code.clone())
}

fn score_label(assignment: &Assignment) -> String {
    assignment
        .percentage()
        .map_or_else(|| "-".to_string(), |p| format!("{p:.1}%"))
}

fn list(
    repo: &Repository<JsonFileStore>,
    filter: &AssignmentFilter,
    dates: &DateClassifier,
) -> CommandResult {
    let courses = repo.courses().map_err(|e| store_failure(&e))?;
    let assignments = repo.assignments().map_err(|e| store_failure(&e))?;
    let matched = filter.apply(&assignments, dates);
    verbose!(
        "{} of {} assignment(s) match status={}",
        matched.len(),
        assignments.len(),
        filter.status
    );

    if matched.is_empty() {
        println!("No assignments match.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<3} {:<10} {:<28} {:<8} {:<10} {:>7}  {}",
        "ID", "", "COURSE", "TITLE", "PRIORITY", "DUE", "SCORE", "STATUS"
    );
    for assignment in matched {
        let check = if assignment.completed { "[x]" } else { "[ ]" };
        let status = if assignment.completed {
            "done"
        } else {
            dates.classify(assignment.due_date).label()
        };
        println!(
            "{:>4}  {check} {:<10} {:<28} {:<8} {:<10} {:>7}  {status}",
            assignment.id,
            course_code(&courses, assignment.course_id),
            assignment.title,
            assignment.priority.to_string(),
            format_date_short(assignment.due_date),
            score_label(assignment),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_points_empties_both_fields() {
        let update = points_update(
            PointsArgs {
                earned: None,
                total: None,
            },
            true,
        );
        assert_eq!(update.earned_points, Some(None));
        assert_eq!(update.total_points, Some(None));
    }

    #[test]
    fn test_only_given_points_are_updated() {
        let update = points_update(
            PointsArgs {
                earned: Some(8.0),
                total: None,
            },
            false,
        );
        assert_eq!(update.earned_points, Some(Some(8.0)));
        assert_eq!(update.total_points, None);
    }
}
