//! Core planner functionality: records, calculations, persistence and reports

pub mod dashboard;
pub mod dates;
pub mod grades;
pub mod listing;
pub mod models;
pub mod report;
pub mod store;
