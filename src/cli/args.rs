//! CLI argument definitions for `UniRecords`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use uni_records::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to a `tracing` level filter for runtime use.
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

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
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
        /// Optional configuration key to display (e.g., `level`, `data_dir`, `name`)
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
pub enum AdminSubcommand {
    /// Add a student account.
    AddStudent {
        /// Student name (single word)
        #[arg(value_name = "NAME")]
        name: String,
        /// Student id
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
        /// Initial password (prompted on stdin when omitted)
        #[arg(long, value_name = "PASSWORD")]
        account_password: Option<String>,
    },
    /// Remove a student and take them off every course roster.
    RemoveStudent {
        /// Student id
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
    },
    /// Add an instructor account.
    AddInstructor {
        /// Instructor name (single word)
        #[arg(value_name = "NAME")]
        name: String,
        /// Instructor id
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
        /// Department (single word)
        #[arg(value_name = "DEPARTMENT")]
        department: String,
        /// Initial password (prompted on stdin when omitted)
        #[arg(long, value_name = "PASSWORD")]
        account_password: Option<String>,
    },
    /// Remove an instructor and clear their course assignments.
    RemoveInstructor {
        /// Instructor id
        #[arg(value_name = "ID", allow_negative_numbers = true)]
        id: i64,
    },
    /// Add a course.
    AddCourse {
        /// Course name (single word)
        #[arg(value_name = "NAME")]
        name: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Remove a course, its enrollments, assignments, and grades.
    RemoveCourse {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Enroll a student in a course.
    Enroll {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Student id
        #[arg(value_name = "STUDENT_ID", allow_negative_numbers = true)]
        student_id: i64,
    },
    /// Assign an instructor to a course.
    Assign {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Instructor id
        #[arg(value_name = "INSTRUCTOR_ID", allow_negative_numbers = true)]
        instructor_id: i64,
    },
    /// List all students, instructors, and courses.
    List,
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// List enrolled courses.
    Courses,
    /// List recorded grades.
    Grades,
    /// Show the grade point average.
    Gpa,
    /// Change the account password.
    Passwd {
        /// New password (single word)
        #[arg(value_name = "NEW")]
        new_password: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum InstructorSubcommand {
    /// List assigned courses with their rosters.
    Courses,
    /// Record a grade for a student.
    Grade {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Student id
        #[arg(value_name = "STUDENT_ID", allow_negative_numbers = true)]
        student_id: i64,
        /// Letter grade (A, B, C, D, F)
        #[arg(value_name = "LETTER")]
        letter: String,
        /// Marks
        #[arg(value_name = "MARKS", allow_negative_numbers = true)]
        marks: i64,
    },
    /// Change the account password.
    Passwd {
        /// New password (single word)
        #[arg(value_name = "NEW")]
        new_password: String,
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
    /// Administer students, instructors, and courses.
    Admin {
        /// Admin password (read from stdin when omitted)
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,

        #[command(subcommand)]
        subcommand: AdminSubcommand,
    },
    /// Student self-service.
    Student {
        /// Student id
        #[arg(long, value_name = "ID", allow_negative_numbers = true)]
        id: i64,

        /// Student password (read from stdin when omitted)
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,

        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Instructor self-service.
    Instructor {
        /// Instructor id
        #[arg(long, value_name = "ID", allow_negative_numbers = true)]
        id: i64,

        /// Instructor password (read from stdin when omitted)
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,

        #[command(subcommand)]
        subcommand: InstructorSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "unirecords",
    about = "UniRecords university record manager",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level for this run (the config file is not changed)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path for this run
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag for this run (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
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
                .or(self.config_data_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
