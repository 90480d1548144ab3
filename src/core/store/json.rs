//! JSON file store
//!
//! One pretty-printed JSON document per collection inside a data directory.
//! A missing file reads as an empty collection (or the default semester).

use super::{Result, Store, StoreError};
use crate::core::models::{Assignment, Course, Semester};
use crate::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const COURSES_FILE: &str = "courses.json";
const ASSIGNMENTS_FILE: &str = "assignments.json";
const SEMESTER_FILE: &str = "semester.json";

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    fallback_semester: Semester,
}

impl JsonFileStore {
    /// Store rooted at `data_dir`. Nothing is touched until the first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            fallback_semester: Semester::default(),
        }
    }

    /// Semester reported until one is saved. Blank names are ignored.
    #[must_use]
    pub fn with_fallback_semester(mut self, name: &str) -> Self {
        if !name.trim().is_empty() {
            self.fallback_semester = Semester::new(name.trim().to_string());
        }
        self
    }

    /// Directory holding the data files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.data_dir.join(name);
        if !path.exists() {
            debug!("No data file at {}, starting empty", path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    fn write<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;
        let path = self.data_dir.join(name);
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn load_courses(&self) -> Result<Vec<Course>> {
        Ok(self.read(COURSES_FILE)?.unwrap_or_default())
    }

    fn save_courses(&mut self, courses: &[Course]) -> Result<()> {
        self.write(COURSES_FILE, courses)
    }

    fn load_assignments(&self) -> Result<Vec<Assignment>> {
        Ok(self.read(ASSIGNMENTS_FILE)?.unwrap_or_default())
    }

    fn save_assignments(&mut self, assignments: &[Assignment]) -> Result<()> {
        self.write(ASSIGNMENTS_FILE, assignments)
    }

    fn load_semester(&self) -> Result<Semester> {
        Ok(self
            .read(SEMESTER_FILE)?
            .unwrap_or_else(|| self.fallback_semester.clone()))
    }

    fn save_semester(&mut self, semester: &Semester) -> Result<()> {
        self.write(SEMESTER_FILE, semester)
    }
}
