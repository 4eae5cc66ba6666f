//! Command-line interface entry point for `gradebook`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use logger::{enable_debug, enable_verbose, error, info, init_file_logging, set_level, Level};

use gradebook::app::App;
use gradebook::config::Config;
use gradebook::store::FileStore;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
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

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Student { subcommand } => {
            let mut app = open_app(&config);
            commands::student::run(subcommand, &mut app);
        }
        Command::Course { subcommand } => {
            let mut app = open_app(&config);
            commands::course::run(subcommand, &mut app);
        }
        Command::Summary => {
            let app = open_app(&config);
            commands::summary::run(&app);
        }
        Command::Theme => {
            let mut app = open_app(&config);
            commands::theme::run(&mut app);
        }
    }
}

/// Open the record store under the configured data directory and load
/// application state from it.
fn open_app(config: &Config) -> App<FileStore> {
    let store = match FileStore::open(&config.paths.data_dir) {
        Ok(store) => store,
        Err(e) => {
            error!(
                "Failed to open record store at {}: {e}",
                config.paths.data_dir
            );
            eprintln!("✗ Failed to open record store: {e}");
            std::process::exit(1);
        }
    };

    match App::load(store) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to load records: {e}");
            eprintln!("✗ Failed to load records: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
