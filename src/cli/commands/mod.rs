//! CLI command handlers for `StudyHub`.
//!
//! Each command is implemented in its own submodule. Handlers return
//! `Err` with a ready-to-print `✗ ...` message; `main` prints it and exits.

pub mod assignment;
pub mod config;
pub mod course;
pub mod dashboard;
pub mod grades;
pub mod import;
pub mod report;
pub mod semester;

use std::io::{self, Write};
use studyhub::core::store::StoreError;
use studyhub::error;

/// Result type shared by command handlers
pub type CommandResult = Result<(), String>;

/// Log a store failure and turn it into a user-facing message
pub fn store_failure(err: &StoreError) -> String {
    error!("{err}");
    format!("✗ {err}")
}

/// Ask a yes/no question on stdout; anything but `y`/`yes` is a no
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
