//! Import command handler

use super::{store_failure, CommandResult};
use std::fs;
use std::path::Path;
use studyhub::core::store::remote::RemoteExport;
use studyhub::core::store::{JsonFileStore, Repository};
use studyhub::{error, verbose};

/// Import a backend export file into the local store
pub fn run(file: &Path, repo: &mut Repository<JsonFileStore>) -> CommandResult {
    let content = fs::read_to_string(file).map_err(|e| {
        error!("Failed to read {}: {e}", file.display());
        format!("✗ Failed to read {}: {e}", file.display())
    })?;
    let batch: RemoteExport = serde_json::from_str(&content).map_err(|e| {
        error!("Failed to parse {}: {e}", file.display());
        format!("✗ {} is not a valid export: {e}", file.display())
    })?;
    verbose!(
        "Read {} course(s) and {} assignment(s) from {}",
        batch.courses.len(),
        batch.assignments.len(),
        file.display()
    );

    let summary = repo
        .import_remote(batch.courses, batch.assignments)
        .map_err(|e| store_failure(&e))?;

    println!(
        "✓ Imported {} course(s) and {} assignment(s)",
        summary.courses, summary.assignments
    );
    if summary.skipped > 0 {
        println!(
            "  {} assignment(s) skipped: their course is unknown",
            summary.skipped
        );
    }
    Ok(())
}
