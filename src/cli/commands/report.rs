//! Report command handler
//!
//! Writes a grade report in Markdown or HTML.

use super::{store_failure, CommandResult};
use studyhub::config::Config;
use studyhub::core::dates::DateClassifier;
use studyhub::core::report::{ReportContext, ReportFormat};
use studyhub::core::store::{JsonFileStore, Repository};
use studyhub::{error, info};
use std::path::{Path, PathBuf};

/// File name for a report: `grades-<semester>.<ext>` with the semester slugged
fn default_file_name(semester: &str, format: ReportFormat) -> String {
    let slug: String = semester
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        format!("grades.{}", format.extension())
    } else {
        format!("grades-{slug}.{}", format.extension())
    }
}

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path; defaults to the config `reports_dir`
/// * `format` - Report format
pub fn run(
    repo: &Repository<JsonFileStore>,
    dates: &DateClassifier,
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> CommandResult {
    let semester = repo.semester().map_err(|e| store_failure(&e))?;
    let courses = repo.courses().map_err(|e| store_failure(&e))?;
    let assignments = repo.assignments().map_err(|e| store_failure(&e))?;
    let ctx = ReportContext::build(&semester, &courses, &assignments, dates);

    let output_path = output_file.map_or_else(
        || PathBuf::from(&config.paths.reports_dir).join(default_file_name(&semester.name, format)),
        Path::to_path_buf,
    );

    format.reporter().generate(&ctx, &output_path).map_err(|e| {
        error!("Report generation failed for {}: {e}", output_path.display());
        format!("✗ Failed to write report {}: {e}", output_path.display())
    })?;

    info!("Wrote {format} report to {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_slugs_semester() {
        assert_eq!(
            default_file_name("Fall 2024", ReportFormat::Html),
            "grades-fall-2024.html"
        );
        assert_eq!(
            default_file_name("  Spring / 2025 ", ReportFormat::Markdown),
            "grades-spring-2025.md"
        );
        assert_eq!(default_file_name("", ReportFormat::Markdown), "grades.md");
    }
}
