//! End-to-end tests: records go through a file-backed repository and come
//! back out as grades, a GPA and a dashboard.

use chrono::NaiveDate;
use studyhub::core::dashboard::Dashboard;
use studyhub::core::dates::DateClassifier;
use studyhub::core::grades::{calculate_gpa, course_grade, grade_to_letter, LetterGrade};
use studyhub::core::listing::{AssignmentFilter, StatusFilter};
use studyhub::core::models::Priority;
use studyhub::core::store::remote::RemoteExport;
use studyhub::core::store::{
    AssignmentDraft, CourseDraft, CourseUpdate, JsonFileStore, Repository, StoreError,
};
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
}

fn course(code: &str, credits: u32) -> CourseDraft {
    CourseDraft {
        code: code.to_string(),
        name: format!("{code} lecture"),
        instructor: "Dr. Lovelace".to_string(),
        credits,
        ..CourseDraft::default()
    }
}

fn graded(course_id: u32, title: &str, due: NaiveDate, earned: f64, total: f64) -> AssignmentDraft {
    AssignmentDraft {
        course_id,
        title: title.to_string(),
        description: String::new(),
        due_date: due,
        priority: Priority::Medium,
        earned_points: Some(earned),
        total_points: Some(total),
    }
}

fn ungraded(course_id: u32, title: &str, due: NaiveDate) -> AssignmentDraft {
    AssignmentDraft {
        earned_points: None,
        total_points: None,
        ..graded(course_id, title, due, 0.0, 0.0)
    }
}

#[test]
fn test_records_survive_reopening_the_store() {
    let temp = TempDir::new().unwrap();
    {
        let mut repo = Repository::new(JsonFileStore::new(temp.path()));
        let cs = repo.add_course(course("CS 2510", 4)).unwrap();
        repo.add_assignment(graded(cs.id, "Lab 1", day(3), 18.0, 20.0))
            .unwrap();
        repo.set_semester("Spring 2025").unwrap();
    }

    let repo = Repository::new(JsonFileStore::new(temp.path()));
    let courses = repo.courses().unwrap();
    let assignments = repo.assignments().unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].code, "CS 2510");
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].earned_points, Some(18.0));
    assert_eq!(repo.semester().unwrap().name, "Spring 2025");
}

#[test]
fn test_new_courses_take_the_stored_semester() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path()).with_fallback_semester("Winter 2025");
    let mut repo = Repository::new(store);

    let first = repo.add_course(course("HIST 1100", 3)).unwrap();
    repo.set_semester("Spring 2026").unwrap();
    let second = repo.add_course(course("HIST 1200", 3)).unwrap();

    assert_eq!(first.semester, "Winter 2025");
    assert_eq!(second.semester, "Spring 2026");
}

#[test]
fn test_gpa_weights_by_credits_and_skips_ungraded_courses() {
    let temp = TempDir::new().unwrap();
    let mut repo = Repository::new(JsonFileStore::new(temp.path()));

    let cs = repo.add_course(course("CS 2510", 4)).unwrap();
    let math = repo.add_course(course("MATH 1341", 3)).unwrap();
    let art = repo.add_course(course("ART 1000", 2)).unwrap();

    // CS: 95% (A, 4.0); MATH: 80% (B-, 2.7); ART: nothing graded
    repo.add_assignment(graded(cs.id, "Project", day(1), 95.0, 100.0))
        .unwrap();
    repo.add_assignment(graded(math.id, "Midterm", day(2), 40.0, 50.0))
        .unwrap();
    repo.add_assignment(ungraded(art.id, "Sketchbook", day(30)))
        .unwrap();

    let courses = repo.courses().unwrap();
    let assignments = repo.assignments().unwrap();

    let math_grade = course_grade(&courses[1], &assignments).unwrap();
    assert!((math_grade - 80.0).abs() < 1e-9);
    assert_eq!(grade_to_letter(math_grade), LetterGrade::BMinus);
    assert_eq!(course_grade(&courses[2], &assignments), None);

    let gpa = calculate_gpa(&courses, &assignments).unwrap();
    let expected = 4.0f64.mul_add(4.0, 2.7 * 3.0) / 7.0;
    assert!((gpa - expected).abs() < 1e-9);
}

#[test]
fn test_deleting_a_course_removes_its_assignments_from_disk() {
    let temp = TempDir::new().unwrap();
    let mut repo = Repository::new(JsonFileStore::new(temp.path()));

    let keep = repo.add_course(course("BIO 1100", 4)).unwrap();
    let dropped = repo.add_course(course("CHEM 1210", 4)).unwrap();
    repo.add_assignment(ungraded(keep.id, "Lab report", day(5)))
        .unwrap();
    repo.add_assignment(ungraded(dropped.id, "Problem set", day(6)))
        .unwrap();
    repo.add_assignment(ungraded(dropped.id, "Quiz", day(7)))
        .unwrap();

    assert_eq!(repo.delete_course(dropped.id).unwrap(), 2);

    let reopened = Repository::new(JsonFileStore::new(temp.path()));
    let remaining = reopened.assignments().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].course_id, keep.id);
    assert!(matches!(
        reopened.course(dropped.id),
        Err(StoreError::CourseNotFound(_))
    ));
}

#[test]
fn test_dashboard_reflects_today_and_archiving() {
    let temp = TempDir::new().unwrap();
    let mut repo = Repository::new(JsonFileStore::new(temp.path()));

    let cs = repo.add_course(course("CS 3500", 4)).unwrap();
    let old = repo.add_course(course("CS 1800", 4)).unwrap();
    repo.add_assignment(ungraded(cs.id, "Late essay", day(8)))
        .unwrap();
    repo.add_assignment(ungraded(cs.id, "Due today", day(10)))
        .unwrap();
    repo.add_assignment(ungraded(cs.id, "Next week", day(16)))
        .unwrap();
    repo.add_assignment(ungraded(cs.id, "Far away", day(30)))
        .unwrap();
    repo.add_assignment(ungraded(old.id, "Forgotten", day(1)))
        .unwrap();
    repo.update_course(
        old.id,
        CourseUpdate {
            archived: Some(true),
            ..CourseUpdate::default()
        },
    )
    .unwrap();

    let courses = repo.courses().unwrap();
    let assignments = repo.assignments().unwrap();
    let dates = DateClassifier::new(day(10));
    let dashboard = Dashboard::build(&courses, &assignments, &dates, 7);

    let upcoming: Vec<&str> = dashboard.upcoming.iter().map(|a| a.title.as_str()).collect();
    let overdue: Vec<&str> = dashboard.overdue.iter().map(|a| a.title.as_str()).collect();

    // The upcoming window starts after today
    assert_eq!(upcoming, vec!["Next week"]);
    assert_eq!(overdue, vec!["Late essay"]);
    assert_eq!(dashboard.due_today.len(), 1);
    assert_eq!(dashboard.due_today[0].title, "Due today");
    assert_eq!(dashboard.course_count, 1);
    assert_eq!(dashboard.total_credits, 4);
    assert_eq!(dashboard.gpa_label(), "N/A");
}

#[test]
fn test_completing_work_moves_it_out_of_overdue() {
    let temp = TempDir::new().unwrap();
    let mut repo = Repository::new(JsonFileStore::new(temp.path()));
    let cs = repo.add_course(course("CS 2500", 4)).unwrap();
    let late = repo
        .add_assignment(ungraded(cs.id, "Homework 2", day(4)))
        .unwrap();

    let dates = DateClassifier::new(day(10));
    let overdue = AssignmentFilter {
        status: StatusFilter::Overdue,
        ..AssignmentFilter::default()
    };

    let before = repo.assignments().unwrap();
    assert_eq!(overdue.apply(&before, &dates).len(), 1);

    assert!(repo.toggle_completed(late.id).unwrap().completed);
    let after = repo.assignments().unwrap();
    assert!(overdue.apply(&after, &dates).is_empty());
}

#[test]
fn test_remote_export_imports_into_file_store() {
    let temp = TempDir::new().unwrap();
    let mut repo = Repository::new(JsonFileStore::new(temp.path()));

    let batch: RemoteExport = serde_json::from_str(
        r#"{
            "courses": [
                {"Id": 3, "Name": "PHYS 1151", "code_c": "PHYS 1151", "name_c": "Physics",
                 "instructor_c": "Dr. Meitner", "credits_c": 4, "semester_c": "Fall 2024"}
            ],
            "assignments": [
                {"Id": 10, "course_id_c": {"Id": 3, "Name": "PHYS 1151"}, "title_c": "Lab 1",
                 "due_date_c": "2024-10-12T23:59:00Z", "total_points_c": 10, "earned_points_c": 9},
                {"Id": 11, "course_id_c": 99, "title_c": "Orphan", "due_date_c": "2024-10-12"}
            ]
        }"#,
    )
    .unwrap();

    let summary = repo
        .import_remote(batch.courses, batch.assignments)
        .unwrap();
    assert_eq!(summary.courses, 1);
    assert_eq!(summary.assignments, 1);
    assert_eq!(summary.skipped, 1);

    let courses = repo.courses().unwrap();
    let assignments = repo.assignments().unwrap();
    assert_eq!(courses[0].id, 3);
    let grade = course_grade(&courses[0], &assignments).unwrap();
    assert!((grade - 90.0).abs() < 1e-9);

    // Next locally created course continues after the imported id
    let next = repo.add_course(course("PHYS 1155", 1)).unwrap();
    assert_eq!(next.id, 4);
}

#[test]
fn test_invalid_records_are_rejected_before_saving() {
    let temp = TempDir::new().unwrap();
    let mut repo = Repository::new(JsonFileStore::new(temp.path()));

    let err = repo.add_course(course("CS 9999", 7)).unwrap_err();
    assert!(matches!(err, StoreError::Validation { .. }));

    let err = repo
        .add_assignment(ungraded(42, "No course", day(1)))
        .unwrap_err();
    assert!(matches!(err, StoreError::CourseNotFound(42)));

    assert!(repo.courses().unwrap().is_empty());
    assert!(!temp.path().join("assignments.json").exists());
}
