//! Plain-text persistence for university records
//!
//! A data directory holds one file per record kind:
//! - `instructors.txt`: `<name> <id> <department> <password>`
//! - `courses.txt`: `<name> <code> [<instructorId>]`
//! - `students.txt`: `<name> <id> <password> <gradeCount>` then one
//!   `<courseCode> <letter> <marks>` line per grade
//! - `enrollments.txt`: `<courseCode> <studentId>`
//!
//! Missing files load as empty collections. Lines that cannot be parsed or
//! resolved are skipped and reported as [`LoadIssue`]s.

mod records;

use crate::core::error::StorageError;
use crate::core::models::University;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Student records and their grades
pub const STUDENTS_FILE: &str = "students.txt";
/// Instructor records
pub const INSTRUCTORS_FILE: &str = "instructors.txt";
/// Course records and instructor assignments
pub const COURSES_FILE: &str = "courses.txt";
/// Course enrollments
pub const ENROLLMENTS_FILE: &str = "enrollments.txt";

/// Why a line was skipped during load
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadIssueReason {
    /// Wrong number of fields on the line
    #[error("expected {expected} fields, found {found}")]
    TokenCount {
        /// Accepted field counts
        expected: &'static str,
        /// Fields present
        found: usize,
    },
    /// A field that should be an integer is not
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// Letter grade outside A-F
    #[error("invalid letter grade '{0}'")]
    InvalidLetter(String),
    /// Course code that is not in `courses.txt`
    #[error("unknown course '{0}'")]
    UnknownCourse(String),
    /// Student id that is not in `students.txt`
    #[error("unknown student {0}")]
    UnknownStudent(i64),
    /// Instructor id that is not in `instructors.txt`
    #[error("unknown instructor {0}")]
    UnknownInstructor(i64),
    /// Fewer grade lines than the header announced
    #[error("expected {expected} grade line(s), found {found}")]
    Truncated {
        /// Count from the student header
        expected: usize,
        /// Grade lines actually present
        found: usize,
    },
}

/// A skipped line in one of the data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// Data file name
    pub file: &'static str,
    /// 1-based line number
    pub line: usize,
    /// What was wrong with the line
    pub reason: LoadIssueReason,
}

impl LoadIssue {
    pub(crate) const fn new(file: &'static str, line: usize, reason: LoadIssueReason) -> Self {
        Self { file, line, reason }
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.reason)
    }
}

/// Result of loading a data directory
#[derive(Debug)]
pub struct LoadOutcome {
    /// Everything that loaded successfully
    pub university: University,
    /// Lines that were skipped
    pub issues: Vec<LoadIssue>,
}

/// Whether a value can be written as a single token
#[must_use]
pub fn is_storable_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(source) if source.kind() == ErrorKind::NotFound => {
            debug!("{} not found; starting empty", path.display());
            Ok(None)
        }
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load all records from a data directory
///
/// Files are read in dependency order: instructors, courses, students,
/// enrollments.
///
/// # Arguments
/// * `dir` - Data directory
/// * `name` - University name for the returned store
///
/// # Errors
/// Returns `StorageError::Io` if a file exists but cannot be read
pub fn load_university<P: AsRef<Path>>(
    dir: P,
    name: String,
) -> Result<LoadOutcome, StorageError> {
    let dir = dir.as_ref();
    let mut university = University::new(name);
    let mut issues = Vec::new();

    let readers: [(&str, fn(&str, &mut University, &mut Vec<LoadIssue>)); 4] = [
        (INSTRUCTORS_FILE, records::read_instructors),
        (COURSES_FILE, records::read_courses),
        (STUDENTS_FILE, records::read_students),
        (ENROLLMENTS_FILE, records::read_enrollments),
    ];
    for (file, read) in readers {
        if let Some(content) = read_optional(&dir.join(file))? {
            read(&content, &mut university, &mut issues);
        }
    }

    for issue in &issues {
        warn!("Skipped {issue}");
    }
    info!(
        "Loaded {} student(s), {} instructor(s), {} course(s) from {}",
        university.students().len(),
        university.instructors().len(),
        university.courses().len(),
        dir.display()
    );

    Ok(LoadOutcome { university, issues })
}

/// Save all records to a data directory, replacing existing files
///
/// Every file is rendered before anything is written, so a value that cannot
/// be encoded leaves the directory untouched.
///
/// # Errors
/// Returns `StorageError::Encode` for values that are empty or contain
/// whitespace, and `StorageError::Io` if the directory or a file cannot be
/// written
pub fn save_university<P: AsRef<Path>>(
    dir: P,
    university: &University,
) -> Result<(), StorageError> {
    let dir = dir.as_ref();
    let rendered = [
        (INSTRUCTORS_FILE, records::write_instructors(university)?),
        (COURSES_FILE, records::write_courses(university)?),
        (STUDENTS_FILE, records::write_students(university)?),
        (ENROLLMENTS_FILE, records::write_enrollments(university)?),
    ];

    fs::create_dir_all(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for (file, content) in rendered {
        let path: PathBuf = dir.join(file);
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })?;
    }

    info!("Saved records to {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_storable_token() {
        assert!(is_storable_token("CS101"));
        assert!(is_storable_token("Algorithms"));
        assert!(!is_storable_token(""));
        assert!(!is_storable_token("Data Structures"));
        assert!(!is_storable_token("tab\there"));
    }

    #[test]
    fn test_load_issue_display() {
        let issue = LoadIssue::new(
            STUDENTS_FILE,
            4,
            LoadIssueReason::UnknownCourse("XX999".to_string()),
        );
        assert_eq!(issue.to_string(), "students.txt:4: unknown course 'XX999'");
    }
}
