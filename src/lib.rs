//! Library for `StudyHub`, a student academic planner.
//!
//! Contains the grade and GPA calculations, due-date classification, the
//! persistence layer and report rendering used by the `studyhub` CLI.

pub mod config;
pub mod core;
pub mod logger;

/// Returns the current version of the `StudyHub` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
