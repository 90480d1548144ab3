//! Command-line interface entry point for `StudyHub`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use studyhub::config::Config;
use studyhub::core::dates::DateClassifier;
use studyhub::core::store::{JsonFileStore, Repository};
use studyhub::info;
use studyhub::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let dates = args
        .today
        .map_or_else(DateClassifier::from_local_clock, DateClassifier::new);
    let store = JsonFileStore::new(&config.storage.data_dir)
        .with_fallback_semester(&config.planner.semester);
    let mut repo = Repository::new(store);

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Course { action } => commands::course::run(action, &mut repo),
        Command::Assignment { action } => commands::assignment::run(action, &mut repo, &dates),
        Command::Dashboard => commands::dashboard::run(&repo, &dates, config.upcoming_days()),
        Command::Grades => commands::grades::run(&repo, &dates),
        Command::Semester { action } => commands::semester::run(action, &mut repo),
        Command::Report { output, format } => {
            commands::report::run(&repo, &dates, output.as_deref(), format, &config)
        }
        Command::Import { file } => commands::import::run(&file, &mut repo),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
