//! Integration tests for grade report rendering

use chrono::NaiveDate;
use studyhub::core::dates::DateClassifier;
use studyhub::core::models::{Assignment, Course, Semester};
use studyhub::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

fn sample_context() -> ReportContext {
    let courses = vec![
        Course::new(1, "CS 2510".to_string(), "Data Structures".to_string(), 4)
            .with_instructor("Dr. Hopper"),
        Course::new(2, "ENGW 1111".to_string(), "Writing".to_string(), 4)
            .with_instructor("Prof. Woolf"),
    ];
    let assignments = vec![
        Assignment::new(1, 1, "Lab 1".to_string(), day(2)).with_points(Some(45.0), Some(50.0)),
        Assignment::new(2, 1, "Lab 2".to_string(), day(20)),
        Assignment::new(3, 2, "<Essay> & draft".to_string(), day(5)),
    ];
    ReportContext::build(
        &Semester::new("Fall 2024".to_string()),
        &courses,
        &assignments,
        &DateClassifier::new(day(10)),
    )
}

#[test]
fn test_markdown_report_lists_courses_and_overdue_work() {
    let out = MarkdownReporter::new().render(&sample_context()).unwrap();

    assert!(out.contains("# Grade Report: Fall 2024"));
    assert!(out.contains("Generated Oct 10, 2024"));
    assert!(out.contains("| 3.70 | 2 | 8 |"));
    assert!(out.contains("### CS 2510: Data Structures"));
    assert!(out.contains("- Grade: 90.0% (A-)"));
    assert!(out.contains("| Lab 1 | Oct 2 | 45 / 50 | 90.0% | A- |"));
    assert!(out.contains("- Grade: No grades (N/A)"));
    assert!(out.contains("| <Essay> & draft | ENGW 1111 | Oct 5, 2024 |"));
    assert!(!out.contains("All caught up."));
}

#[test]
fn test_html_report_escapes_record_text() {
    let out = HtmlReporter::new().render(&sample_context()).unwrap();

    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("Data Structures"));
    assert!(out.contains("&lt;Essay&gt; &amp; draft"));
    assert!(!out.contains("<Essay>"));
}

#[test]
fn test_empty_snapshot_renders_placeholders() {
    let ctx = ReportContext::build(
        &Semester::default(),
        &[],
        &[],
        &DateClassifier::new(day(10)),
    );
    let out = MarkdownReporter::new().render(&ctx).unwrap();

    assert!(out.contains("| N/A | 0 | 0 |"));
    assert!(out.contains("No active courses."));
    assert!(out.contains("All caught up."));
}

#[test]
fn test_generate_writes_file_in_new_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp
        .path()
        .join("reports")
        .join(format!("grades.{}", ReportFormat::Html.extension()));

    ReportFormat::Html
        .reporter()
        .generate(&sample_context(), &path)
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Grade Report: Fall 2024"));
}
