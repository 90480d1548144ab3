//! Semester command handler

use super::{store_failure, CommandResult};
use crate::args::SemesterCommand;
use studyhub::core::store::{JsonFileStore, Repository};

/// Show or rename the current semester
pub fn run(action: Option<SemesterCommand>, repo: &mut Repository<JsonFileStore>) -> CommandResult {
    match action.unwrap_or(SemesterCommand::Show) {
        SemesterCommand::Show => {
            let semester = repo.semester().map_err(|e| store_failure(&e))?;
            println!("{}", semester.name);
        }
        SemesterCommand::Set { name } => {
            let semester = repo.set_semester(&name).map_err(|e| store_failure(&e))?;
            println!("✓ Semester set to {}", semester.name);
        }
    }
    Ok(())
}
