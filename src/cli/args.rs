//! CLI argument definitions for `gradebook`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradebook::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
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

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
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
pub enum StudentSubcommand {
    /// Register a new student and make them the active selection.
    Add {
        /// Student name
        #[arg(value_name = "NAME")]
        name: String,

        /// Quality points earned before tracking in this tool (transfer credit etc.)
        #[arg(long, value_name = "POINTS", default_value_t = 0.0)]
        quality_points: f64,

        /// Credits earned before tracking in this tool
        #[arg(long, value_name = "CREDITS", default_value_t = 0)]
        credits: u32,
    },
    /// List all registered students.
    List,
    /// Make a student the active selection.
    Select {
        /// Student id (shown by `student list`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Clear the active selection.
    Deselect,
    /// Delete a student and their entire course ledger.
    Remove {
        /// Student id (shown by `student list`)
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to the active student's ledger.
    Add {
        /// Course name
        #[arg(value_name = "NAME")]
        name: String,

        /// Credit choice: a positive integer, or `custom`
        #[arg(long, value_name = "CHOICE", default_value = "3")]
        credits: String,

        /// Credits used when `--credits custom` is given
        #[arg(long, value_name = "CREDITS", default_value = "")]
        custom_credits: String,

        /// Grade choice: a letter grade (A..F with +/-), or `custom`
        #[arg(long, value_name = "CHOICE", default_value = "")]
        grade: String,

        /// Grade points in 0.0-4.0 used when `--grade custom` is given
        #[arg(long = "custom-gpa", value_name = "POINTS", default_value = "")]
        custom_gpa: String,
    },
    /// Overwrite a course's fields, keeping its id and position.
    Edit {
        /// Course id (shown by `course list`)
        #[arg(value_name = "ID")]
        id: String,

        /// Course name
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Credit choice: a positive integer, or `custom`
        #[arg(long, value_name = "CHOICE", default_value = "3")]
        credits: String,

        /// Credits used when `--credits custom` is given
        #[arg(long, value_name = "CREDITS", default_value = "")]
        custom_credits: String,

        /// Grade choice: a letter grade (A..F with +/-), or `custom`
        #[arg(long, value_name = "CHOICE", default_value = "")]
        grade: String,

        /// Grade points in 0.0-4.0 used when `--grade custom` is given
        #[arg(long = "custom-gpa", value_name = "POINTS", default_value = "")]
        custom_gpa: String,
    },
    /// List the active student's courses.
    List,
    /// Delete a course from the active student's ledger.
    Remove {
        /// Course id (shown by `course list`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Delete every course from the active student's ledger.
    Clear,
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
    /// Manage students.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage the active student's courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Show totals and cumulative GPA for the active student.
    Summary,
    /// Toggle the light/dark theme preference.
    Theme,
}

#[derive(Parser, Debug)]
#[command(
    name = "gradebook",
    about = "gradebook command-line interface",
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

    /// Override config record store directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config record store directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-dir`) take precedence over long-form
    /// flags (e.g., `--config-data-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: None,
            data_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(Command::Summary).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut args = cli(Command::Summary);
        args.config_level = Some(LogLevelArg::Debug);
        args.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        args.config_verbose = Some(true);
        args.data_dir = Some(PathBuf::from("/records"));

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/records".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut args = cli(Command::Summary);
        args.config_data_dir = Some(PathBuf::from("/long/records"));
        args.data_dir = Some(PathBuf::from("/short/records"));

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/short/records".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut args = cli(Command::Summary);
        args.config_data_dir = Some(PathBuf::from("/long/records"));

        let overrides = args.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/long/records".to_string()));
    }
}
