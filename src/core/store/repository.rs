//! CRUD operations over a [`Store`]
//!
//! The repository owns id allocation, validation and the cascade from a
//! course to its assignments. Every mutating call loads the affected
//! collection, changes it, and saves it back in one go.

use super::remote::{RemoteAssignment, RemoteCourse};
use super::{Result, Store, StoreError};
use crate::core::models::course::{MAX_CREDITS, MIN_CREDITS};
use crate::core::models::{Assignment, Course, Priority, Semester};
use crate::{debug, info, warn};
use chrono::NaiveDate;

/// Fields for a new course
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    /// Course code
    pub code: String,
    /// Course title
    pub name: String,
    /// Instructor
    pub instructor: String,
    /// Credit hours
    pub credits: u32,
    /// Hex color; the palette color for the new id when absent
    pub color: Option<String>,
    /// Semester; the stored semester when absent
    pub semester: Option<String>,
}

/// Partial course update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    /// New code
    pub code: Option<String>,
    /// New title
    pub name: Option<String>,
    /// New instructor
    pub instructor: Option<String>,
    /// New credit hours
    pub credits: Option<u32>,
    /// New color
    pub color: Option<String>,
    /// Archive or restore
    pub archived: Option<bool>,
}

/// Fields for a new assignment
#[derive(Debug, Clone)]
pub struct AssignmentDraft {
    /// Owning course
    pub course_id: u32,
    /// Title
    pub title: String,
    /// Notes
    pub description: String,
    /// Due day
    pub due_date: NaiveDate,
    /// Urgency
    pub priority: Priority,
    /// Points earned, if graded
    pub earned_points: Option<f64>,
    /// Points available
    pub total_points: Option<f64>,
}

/// Partial assignment update. `None` leaves a field unchanged; for the
/// point fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct AssignmentUpdate {
    /// Move to another course
    pub course_id: Option<u32>,
    /// New title
    pub title: Option<String>,
    /// New notes
    pub description: Option<String>,
    /// New due day
    pub due_date: Option<NaiveDate>,
    /// New urgency
    pub priority: Option<Priority>,
    /// New earned points
    pub earned_points: Option<Option<f64>>,
    /// New available points
    pub total_points: Option<Option<f64>>,
    /// New completion state
    pub completed: Option<bool>,
}

/// Outcome of a remote import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Courses inserted or replaced
    pub courses: usize,
    /// Assignments inserted or replaced
    pub assignments: usize,
    /// Assignments dropped because their course is unknown
    pub skipped: usize,
}

/// CRUD service over a store
#[derive(Debug)]
pub struct Repository<S: Store> {
    store: S,
}

fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> u32) -> Result<u32> {
    items
        .iter()
        .map(id_of)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| StoreError::validation("Id space exhausted"))
}

fn validate_course(course: &Course) -> Result<()> {
    if course.code.trim().is_empty() {
        return Err(StoreError::validation("Course code is required"));
    }
    if course.name.trim().is_empty() {
        return Err(StoreError::validation("Course name is required"));
    }
    if course.instructor.trim().is_empty() {
        return Err(StoreError::validation("Instructor name is required"));
    }
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&course.credits) {
        return Err(StoreError::validation(format!(
            "Credits must be between {MIN_CREDITS} and {MAX_CREDITS}"
        )));
    }
    Ok(())
}

fn validate_points(label: &str, points: Option<f64>) -> Result<()> {
    match points {
        Some(p) if !p.is_finite() || p < 0.0 => Err(StoreError::validation(format!(
            "{label} must be a non-negative number"
        ))),
        _ => Ok(()),
    }
}

/// Report a failed check on an imported record against its remote id
fn imported(id: u32, checked: Result<()>) -> Result<()> {
    checked.map_err(|e| match e {
        StoreError::Validation { message } => StoreError::Mapping { id, message },
        other => other,
    })
}

fn validate_assignment(assignment: &Assignment, courses: &[Course]) -> Result<()> {
    if assignment.title.trim().is_empty() {
        return Err(StoreError::validation("Assignment title is required"));
    }
    if !courses.iter().any(|c| c.id == assignment.course_id) {
        return Err(StoreError::CourseNotFound(assignment.course_id));
    }
    validate_points("Earned points", assignment.earned_points)?;
    validate_points("Total points", assignment.total_points)
}

impl<S: Store> Repository<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// All courses in id order
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn courses(&self) -> Result<Vec<Course>> {
        let mut courses = self.store.load_courses()?;
        courses.sort_by_key(|c| c.id);
        Ok(courses)
    }

    /// One course
    ///
    /// # Errors
    /// Returns [`StoreError::CourseNotFound`] for an unknown id
    pub fn course(&self, id: u32) -> Result<Course> {
        self.store
            .load_courses()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::CourseNotFound(id))
    }

    /// Create a course
    ///
    /// # Errors
    /// Returns a validation error for missing fields or out-of-range credits
    pub fn add_course(&mut self, draft: CourseDraft) -> Result<Course> {
        let mut courses = self.store.load_courses()?;
        let id = next_id(&courses, |c| c.id)?;
        let semester = match draft.semester {
            Some(name) => name,
            None => self.store.load_semester()?.name,
        };

        let mut course = Course::new(
            id,
            draft.code.trim().to_string(),
            draft.name.trim().to_string(),
            draft.credits,
        )
        .with_instructor(draft.instructor.trim())
        .with_semester(semester);
        if let Some(color) = draft.color {
            course.color = color;
        }
        validate_course(&course)?;

        courses.push(course.clone());
        self.store.save_courses(&courses)?;
        info!("Added course {} ({})", course.id, course.code);
        Ok(course)
    }

    /// Apply a partial update to a course
    ///
    /// # Errors
    /// Returns an error for an unknown id or if the result fails validation
    pub fn update_course(&mut self, id: u32, update: CourseUpdate) -> Result<Course> {
        let mut courses = self.store.load_courses()?;
        let course = courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::CourseNotFound(id))?;

        let mut updated = course.clone();
        if let Some(code) = update.code {
            updated.code = code.trim().to_string();
        }
        if let Some(name) = update.name {
            updated.name = name.trim().to_string();
        }
        if let Some(instructor) = update.instructor {
            updated.instructor = instructor.trim().to_string();
        }
        if let Some(credits) = update.credits {
            updated.credits = credits;
        }
        if let Some(color) = update.color {
            updated.color = color;
        }
        if let Some(archived) = update.archived {
            updated.archived = archived;
        }
        validate_course(&updated)?;

        *course = updated.clone();
        self.store.save_courses(&courses)?;
        info!("Updated course {id}");
        Ok(updated)
    }

    /// Delete a course together with its assignments.
    ///
    /// Returns the number of assignments removed with it.
    ///
    /// # Errors
    /// Returns [`StoreError::CourseNotFound`] for an unknown id
    pub fn delete_course(&mut self, id: u32) -> Result<usize> {
        let mut courses = self.store.load_courses()?;
        let before = courses.len();
        courses.retain(|c| c.id != id);
        if courses.len() == before {
            return Err(StoreError::CourseNotFound(id));
        }

        let mut assignments = self.store.load_assignments()?;
        let owned = assignments.len();
        assignments.retain(|a| a.course_id != id);
        let removed = owned - assignments.len();

        self.store.save_assignments(&assignments)?;
        self.store.save_courses(&courses)?;
        info!("Deleted course {id} and {removed} assignment(s)");
        Ok(removed)
    }

    /// All assignments ordered by due date, then id
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn assignments(&self) -> Result<Vec<Assignment>> {
        let mut assignments = self.store.load_assignments()?;
        assignments.sort_by_key(|a| (a.due_date, a.id));
        Ok(assignments)
    }

    /// One assignment
    ///
    /// # Errors
    /// Returns [`StoreError::AssignmentNotFound`] for an unknown id
    pub fn assignment(&self, id: u32) -> Result<Assignment> {
        self.store
            .load_assignments()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(StoreError::AssignmentNotFound(id))
    }

    /// Create an assignment
    ///
    /// # Errors
    /// Returns an error if the title is blank, the course does not exist or
    /// the points are negative
    pub fn add_assignment(&mut self, draft: AssignmentDraft) -> Result<Assignment> {
        let courses = self.store.load_courses()?;
        let mut assignments = self.store.load_assignments()?;
        let id = next_id(&assignments, |a| a.id)?;

        let mut assignment = Assignment::new(
            id,
            draft.course_id,
            draft.title.trim().to_string(),
            draft.due_date,
        )
        .with_priority(draft.priority)
        .with_points(draft.earned_points, draft.total_points);
        assignment.description = draft.description;
        validate_assignment(&assignment, &courses)?;

        assignments.push(assignment.clone());
        self.store.save_assignments(&assignments)?;
        info!(
            "Added assignment {} to course {}",
            assignment.id, assignment.course_id
        );
        Ok(assignment)
    }

    /// Apply a partial update to an assignment
    ///
    /// # Errors
    /// Returns an error for an unknown id or if the result fails validation
    pub fn update_assignment(&mut self, id: u32, update: AssignmentUpdate) -> Result<Assignment> {
        let courses = self.store.load_courses()?;
        let mut assignments = self.store.load_assignments()?;
        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::AssignmentNotFound(id))?;

        let mut updated = assignment.clone();
        if let Some(course_id) = update.course_id {
            updated.course_id = course_id;
        }
        if let Some(title) = update.title {
            updated.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            updated.description = description;
        }
        if let Some(due_date) = update.due_date {
            updated.due_date = due_date;
        }
        if let Some(priority) = update.priority {
            updated.priority = priority;
        }
        if let Some(earned) = update.earned_points {
            updated.earned_points = earned;
        }
        if let Some(total) = update.total_points {
            updated.total_points = total;
        }
        if let Some(completed) = update.completed {
            updated.completed = completed;
        }
        validate_assignment(&updated, &courses)?;

        *assignment = updated.clone();
        self.store.save_assignments(&assignments)?;
        info!("Updated assignment {id}");
        Ok(updated)
    }

    /// Flip an assignment's completion state
    ///
    /// # Errors
    /// Returns [`StoreError::AssignmentNotFound`] for an unknown id
    pub fn toggle_completed(&mut self, id: u32) -> Result<Assignment> {
        let mut assignments = self.store.load_assignments()?;
        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::AssignmentNotFound(id))?;
        assignment.completed = !assignment.completed;
        let toggled = assignment.clone();

        self.store.save_assignments(&assignments)?;
        debug!("Assignment {id} completed = {}", toggled.completed);
        Ok(toggled)
    }

    /// Delete an assignment, returning it
    ///
    /// # Errors
    /// Returns [`StoreError::AssignmentNotFound`] for an unknown id
    pub fn delete_assignment(&mut self, id: u32) -> Result<Assignment> {
        let mut assignments = self.store.load_assignments()?;
        let index = assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::AssignmentNotFound(id))?;
        let removed = assignments.remove(index);

        self.store.save_assignments(&assignments)?;
        info!("Deleted assignment {id}");
        Ok(removed)
    }

    /// The tracked semester
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn semester(&self) -> Result<Semester> {
        self.store.load_semester()
    }

    /// Rename the tracked semester
    ///
    /// # Errors
    /// Returns a validation error for a blank name
    pub fn set_semester(&mut self, name: &str) -> Result<Semester> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("Semester name is required"));
        }
        let semester = Semester::new(name.to_string());
        self.store.save_semester(&semester)?;
        Ok(semester)
    }

    /// Merge records exported by the hosted backend.
    ///
    /// Records replace stored ones with the same id. Assignments whose course
    /// is in neither the store nor the batch are skipped with a warning; any
    /// record that cannot be mapped aborts the import before anything is saved.
    ///
    /// # Errors
    /// Returns [`StoreError::Mapping`] for a record that cannot be mapped or
    /// fails the checks applied to local records, or a store error
    pub fn import_remote(
        &mut self,
        remote_courses: Vec<RemoteCourse>,
        remote_assignments: Vec<RemoteAssignment>,
    ) -> Result<ImportSummary> {
        let incoming_courses = remote_courses
            .into_iter()
            .map(|remote| -> Result<Course> {
                let course = Course::try_from(remote)?;
                imported(course.id, validate_course(&course))?;
                Ok(course)
            })
            .collect::<Result<Vec<_>>>()?;
        let incoming_assignments = remote_assignments
            .into_iter()
            .map(|remote| -> Result<Assignment> {
                let assignment = Assignment::try_from(remote)?;
                imported(
                    assignment.id,
                    validate_points("Earned points", assignment.earned_points),
                )?;
                imported(
                    assignment.id,
                    validate_points("Total points", assignment.total_points),
                )?;
                Ok(assignment)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut summary = ImportSummary::default();

        let mut courses = self.store.load_courses()?;
        for course in incoming_courses {
            courses.retain(|c| c.id != course.id);
            courses.push(course);
            summary.courses += 1;
        }
        courses.sort_by_key(|c| c.id);

        let mut assignments = self.store.load_assignments()?;
        for assignment in incoming_assignments {
            if !courses.iter().any(|c| c.id == assignment.course_id) {
                warn!(
                    "Skipping assignment {} ({}): course {} is unknown",
                    assignment.id, assignment.title, assignment.course_id
                );
                summary.skipped += 1;
                continue;
            }
            assignments.retain(|a| a.id != assignment.id);
            assignments.push(assignment);
            summary.assignments += 1;
        }
        assignments.sort_by_key(|a| a.id);

        self.store.save_courses(&courses)?;
        self.store.save_assignments(&assignments)?;
        info!(
            "Imported {} course(s) and {} assignment(s), skipped {}",
            summary.courses, summary.assignments, summary.skipped
        );
        Ok(summary)
    }
}
