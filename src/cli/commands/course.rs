//! Course command handlers

use super::{confirm, store_failure, CommandResult};
use crate::args::CourseCommand;
use studyhub::core::grades::course_standings;
use studyhub::core::store::{CourseDraft, CourseUpdate, JsonFileStore, Repository};
use studyhub::info;

/// Dispatch course subcommands
pub fn run(action: CourseCommand, repo: &mut Repository<JsonFileStore>) -> CommandResult {
    match action {
        CourseCommand::Add {
            code,
            name,
            instructor,
            credits,
            color,
            semester,
        } => {
            let draft = CourseDraft {
                code,
                name,
                instructor,
                credits,
                color,
                semester,
            };
            let course = repo.add_course(draft).map_err(|e| store_failure(&e))?;
            println!("✓ Added course {} ({})", course.label(), course.id);
            Ok(())
        }
        CourseCommand::List { all } => list(repo, all),
        CourseCommand::Edit {
            id,
            code,
            name,
            instructor,
            credits,
            color,
            archive,
            restore,
        } => {
            let archived = if archive {
                Some(true)
            } else if restore {
                Some(false)
            } else {
                None
            };
            let update = CourseUpdate {
                code,
                name,
                instructor,
                credits,
                color,
                archived,
            };
            let course = repo
                .update_course(id, update)
                .map_err(|e| store_failure(&e))?;
            println!("✓ Updated course {}", course.label());
            Ok(())
        }
        CourseCommand::Remove { id, yes } => remove(repo, id, yes),
    }
}

fn list(repo: &Repository<JsonFileStore>, include_archived: bool) -> CommandResult {
    let courses = repo.courses().map_err(|e| store_failure(&e))?;
    let assignments = repo.assignments().map_err(|e| store_failure(&e))?;

    let standings: Vec<_> = course_standings(&courses, &assignments)
        .into_iter()
        .filter(|s| include_archived || !s.course.archived)
        .collect();

    if standings.is_empty() {
        println!("No courses yet. Add one with `studyhub course add`.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<12} {:<32} {:>3}  {:>10} {:>5}",
        "ID", "CODE", "NAME", "CR", "GRADE", ""
    );
    for standing in &standings {
        let course = standing.course;
        let marker = if course.archived { " (archived)" } else { "" };
        println!(
            "{:>4}  {:<12} {:<32} {:>3}  {:>10} {:>5}{marker}",
            course.id,
            course.code,
            course.name,
            course.credits,
            standing.percentage_label(),
            standing.letter_label(),
        );
    }
    Ok(())
}

fn remove(repo: &mut Repository<JsonFileStore>, id: u32, yes: bool) -> CommandResult {
    let course = repo.course(id).map_err(|e| store_failure(&e))?;
    let question = format!("Delete {} and all of its assignments?", course.label());
    if !yes && !confirm(&question) {
        println!("✗ Delete cancelled");
        return Ok(());
    }

    let removed = repo.delete_course(id).map_err(|e| store_failure(&e))?;
    info!("Deleted course {id} with {removed} assignment(s)");
    println!("✓ Deleted {} and {removed} assignment(s)", course.label());
    Ok(())
}
