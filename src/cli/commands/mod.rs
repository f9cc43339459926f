//! CLI command handlers for `UniRecords`.
//!
//! Each command is implemented in its own submodule. Record commands share
//! [`Records`]: load the data directory, authenticate, mutate, save.

pub mod admin;
pub mod config;
pub mod instructor;
pub mod student;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use uni_records::auth::{Authenticator, PlaintextAuthenticator, Principal};
use uni_records::config::Config;
use uni_records::error::{ConfigError, RecordError, RecordKind, StorageError};
use uni_records::models::{Course, University};
use uni_records::storage::{self, is_storable_token};

/// Failure of a CLI command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Store or relationship operation failed
    #[error(transparent)]
    Record(#[from] RecordError),
    /// Data directory could not be read or written
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Configuration could not be changed
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Wrong password or unknown account
    #[error("authentication failed for {0}")]
    AuthFailed(Principal),
    /// A value the data files cannot hold
    #[error("{field} '{value}' must be a single non-empty word")]
    InvalidToken {
        /// Argument name
        field: &'static str,
        /// Rejected value
        value: String,
    },
    /// Reading an interactive answer failed
    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// A loaded data directory
pub struct Records {
    data_dir: PathBuf,
    /// Lines that could not be loaded and will not be written back
    skipped: usize,
    /// Records loaded from `data_dir`
    pub university: University,
}

impl Records {
    /// Load the configured data directory
    ///
    /// Skipped lines are logged as warnings; in verbose mode they are also
    /// printed.
    ///
    /// # Errors
    /// Returns an error if a data file exists but cannot be read
    pub fn open(config: &Config, verbose: bool) -> Result<Self, CommandError> {
        let data_dir = PathBuf::from(&config.storage.data_dir);
        let outcome = storage::load_university(&data_dir, config.university.name.clone())?;

        if verbose {
            let uni = &outcome.university;
            eprintln!(
                "✓ Loaded {} student(s), {} instructor(s), {} course(s) from {}",
                uni.students().len(),
                uni.instructors().len(),
                uni.courses().len(),
                data_dir.display()
            );
            for issue in &outcome.issues {
                eprintln!("  skipped {issue}");
            }
        }

        let records = Self {
            data_dir,
            skipped: outcome.issues.len(),
            university: outcome.university,
        };
        if let Some(notice) = records.skipped_notice() {
            eprintln!("✗ {notice}");
        }
        Ok(records)
    }

    /// Warning shown when some lines were skipped on load
    ///
    /// Saving rewrites every file from the loaded records, so skipped lines
    /// are lost on the next change.
    #[must_use]
    pub fn skipped_notice(&self) -> Option<String> {
        (self.skipped > 0).then(|| {
            format!(
                "{} line(s) in {} could not be loaded; they will be discarded if \
                 this command saves changes (use --verbose for details)",
                self.skipped,
                self.data_dir.display()
            )
        })
    }

    /// Verify the principal's password, prompting on stdin when not given
    ///
    /// # Errors
    /// Returns `CommandError::AuthFailed` on a wrong password or unknown account
    pub fn authenticate(
        &self,
        principal: Principal,
        password: Option<String>,
        admin_password: &str,
    ) -> Result<(), CommandError> {
        let candidate = match password {
            Some(p) => p,
            None => read_line(&format!("Password for {principal}"))?,
        };
        let auth = PlaintextAuthenticator::new(&self.university, admin_password);
        if auth.verify(principal, &candidate) {
            debug!("Authenticated {principal}");
            Ok(())
        } else {
            Err(CommandError::AuthFailed(principal))
        }
    }

    /// Write all records back to the data directory
    ///
    /// # Errors
    /// Returns an error if a value cannot be encoded or a file cannot be written
    pub fn save(&self) -> Result<(), CommandError> {
        if self.skipped > 0 {
            warn!(
                "Saving {} without {} skipped line(s)",
                self.data_dir.display(),
                self.skipped
            );
        }
        storage::save_university(&self.data_dir, &self.university)?;
        Ok(())
    }

    /// Name of a course, or `?` if the code no longer resolves
    pub fn course_name(&self, code: &str) -> &str {
        self.university.find_course(code).map_or("?", Course::name)
    }
}

/// Prompt on stderr and read one trimmed line from stdin
///
/// # Errors
/// Returns `CommandError::Stdin` if stdin cannot be read
pub fn read_line(prompt: &str) -> Result<String, CommandError> {
    eprint!("{prompt}: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(CommandError::Stdin)?;
    Ok(line.trim().to_string())
}

/// Reject values that cannot be stored as a single token
///
/// # Errors
/// Returns `CommandError::InvalidToken` for empty values or values with whitespace
pub fn require_token(field: &'static str, value: &str) -> Result<(), CommandError> {
    if is_storable_token(value) {
        Ok(())
    } else {
        Err(CommandError::InvalidToken {
            field,
            value: value.to_string(),
        })
    }
}

/// `RecordError::NotFound` for a key the CLI looked up
pub fn not_found(kind: RecordKind, key: impl ToString) -> CommandError {
    CommandError::Record(RecordError::NotFound {
        kind,
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    pub(super) const ADMIN_PASSWORD: &str = "root";

    /// Config whose data directory is `dir`
    pub(super) fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.university.name = "KLETECH".to_string();
        config.storage.data_dir = dir.to_string_lossy().to_string();
        config.auth.admin_password = ADMIN_PASSWORD.to_string();
        config
    }

    #[test]
    fn test_open_reports_skipped_lines() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(storage::COURSES_FILE),
            "Algorithms CS101 77\nBroken\n",
        )
        .unwrap();

        let records = Records::open(&config_for(temp_dir.path()), false).unwrap();

        assert_eq!(records.university.courses().len(), 1);
        let notice = records.skipped_notice().unwrap();
        assert!(notice.starts_with("2 line(s)"));
        assert!(notice.contains("discarded"));
    }

    #[test]
    fn test_open_clean_directory_has_no_notice() {
        let temp_dir = TempDir::new().unwrap();

        let records = Records::open(&config_for(temp_dir.path()), false).unwrap();

        assert!(records.skipped_notice().is_none());
        assert!(records.university.students().is_empty());
    }

    #[test]
    fn test_authenticate_with_given_password() {
        let temp_dir = TempDir::new().unwrap();
        let records = Records::open(&config_for(temp_dir.path()), false).unwrap();

        assert!(records
            .authenticate(Principal::Admin, Some("root".to_string()), ADMIN_PASSWORD)
            .is_ok());
        assert!(matches!(
            records.authenticate(Principal::Admin, Some("guess".to_string()), ADMIN_PASSWORD),
            Err(CommandError::AuthFailed(Principal::Admin))
        ));
    }

    #[test]
    fn test_require_token() {
        assert!(require_token("name", "Ana").is_ok());
        assert!(matches!(
            require_token("name", "Ana Lopez"),
            Err(CommandError::InvalidToken { field: "name", .. })
        ));
        assert!(require_token("password", "").is_err());
    }

    #[test]
    fn test_not_found_message() {
        let err = not_found(RecordKind::Course, "CS101");
        assert_eq!(err.to_string(), "course 'CS101' not found");
    }

    #[test]
    fn test_auth_failed_message() {
        let err = CommandError::AuthFailed(Principal::Student(7));
        assert_eq!(err.to_string(), "authentication failed for student 7");
    }
}
