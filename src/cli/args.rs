//! CLI argument definitions for `StudyHub`

use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use studyhub::config::ConfigOverrides;
use studyhub::core::listing::StatusFilter;
use studyhub::core::models::Priority;
use studyhub::core::report::ReportFormat;
use studyhub::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a `YYYY-MM-DD` date argument
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("expected a date as YYYY-MM-DD, got '{value}'"))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`, `upcoming_days`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// Add a course
    Add {
        /// Course code, e.g. "CS 2510"
        #[arg(value_name = "CODE")]
        code: String,
        /// Course title
        #[arg(long)]
        name: String,
        /// Instructor name
        #[arg(long)]
        instructor: String,
        /// Credit hours (1-6)
        #[arg(long, default_value_t = 3)]
        credits: u32,
        /// Hex color; picked from the palette when omitted
        #[arg(long)]
        color: Option<String>,
        /// Semester; the current semester when omitted
        #[arg(long)]
        semester: Option<String>,
    },
    /// List courses with their current grade
    List {
        /// Include archived courses
        #[arg(long)]
        all: bool,
    },
    /// Change fields of a course
    Edit {
        /// Course id
        #[arg(value_name = "ID")]
        id: u32,
        /// New code
        #[arg(long)]
        code: Option<String>,
        /// New title
        #[arg(long)]
        name: Option<String>,
        /// New instructor
        #[arg(long)]
        instructor: Option<String>,
        /// New credit hours
        #[arg(long)]
        credits: Option<u32>,
        /// New color
        #[arg(long)]
        color: Option<String>,
        /// Archive the course
        #[arg(long, conflicts_with = "restore")]
        archive: bool,
        /// Restore an archived course
        #[arg(long)]
        restore: bool,
    },
    /// Delete a course and all of its assignments
    Remove {
        /// Course id
        #[arg(value_name = "ID")]
        id: u32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Point values shared by `assignment add` and `assignment edit`
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PointsArgs {
    /// Points earned
    #[arg(long, value_name = "POINTS")]
    pub earned: Option<f64>,
    /// Points available
    #[arg(long, value_name = "POINTS")]
    pub total: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum AssignmentCommand {
    /// Add an assignment
    Add {
        /// Assignment title
        #[arg(value_name = "TITLE")]
        title: String,
        /// Owning course id
        #[arg(long, value_name = "ID")]
        course: u32,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: NaiveDate,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Notes
        #[arg(long, default_value = "")]
        description: String,
        #[command(flatten)]
        points: PointsArgs,
    },
    /// List assignments, incomplete first
    List {
        /// Only this course
        #[arg(long, value_name = "ID")]
        course: Option<u32>,
        /// all, completed, pending or overdue
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Only this priority
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Change fields of an assignment
    Edit {
        /// Assignment id
        #[arg(value_name = "ID")]
        id: u32,
        /// Move to another course
        #[arg(long, value_name = "ID")]
        course: Option<u32>,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New notes
        #[arg(long)]
        description: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
        /// New priority
        #[arg(long)]
        priority: Option<Priority>,
        #[command(flatten)]
        points: PointsArgs,
        /// Remove both point values
        #[arg(long, conflicts_with_all = ["earned", "total"])]
        clear_points: bool,
    },
    /// Toggle an assignment between done and not done
    Complete {
        /// Assignment id
        #[arg(value_name = "ID")]
        id: u32,
    },
    /// Delete an assignment
    Remove {
        /// Assignment id
        #[arg(value_name = "ID")]
        id: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum SemesterCommand {
    /// Show the current semester
    Show,
    /// Rename the current semester
    Set {
        /// New name, e.g. "Spring 2025"
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommand,
    },
    /// Manage assignments
    Assignment {
        #[command(subcommand)]
        action: AssignmentCommand,
    },
    /// Show GPA, upcoming and overdue work
    Dashboard,
    /// Show per-course grades and the GPA
    Grades,
    /// Show or change the current semester.
    ///
    /// If no subcommand is provided, shows the current semester.
    Semester {
        #[command(subcommand)]
        action: Option<SemesterCommand>,
    },
    /// Write a grade report.
    ///
    /// Creates a formatted report with per-course grades and overdue work.
    Report {
        /// Output file path (optional; defaults to the config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: ReportFormat,
    },
    /// Import courses and assignments exported by the hosted backend
    Import {
        /// JSON file with `courses` and `assignments` arrays
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studyhub",
    about = "StudyHub student planner",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the dashboard lookahead in days
    #[arg(long = "upcoming-days", value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    pub upcoming_days: Option<u32>,

    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            upcoming_days: self.upcoming_days,
        }
    }
}
