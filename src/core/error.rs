//! Error types for `UniRecords`

use std::fmt;
use std::path::PathBuf;

/// The kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A student
    Student,
    /// An instructor
    Instructor,
    /// A course
    Course,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Course => "course",
        };
        write!(f, "{as_str}")
    }
}

/// Errors raised by store and relationship operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    /// No record with the given key exists
    #[error("{kind} '{key}' not found")]
    NotFound {
        /// Kind of record that was looked up
        kind: RecordKind,
        /// Key that failed to resolve
        key: String,
    },
    /// A record with the given key already exists
    #[error("{kind} '{key}' already exists")]
    Conflict {
        /// Kind of record that was added
        kind: RecordKind,
        /// Duplicate key
        key: String,
    },
    /// A letter grade outside A, B, C, D, F
    #[error("invalid letter grade '{0}' (expected one of A, B, C, D, F)")]
    InvalidLetter(String),
}

impl RecordError {
    pub(crate) fn not_found(kind: RecordKind, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn conflict(kind: RecordKind, key: impl ToString) -> Self {
        Self::Conflict {
            kind,
            key: key.to_string(),
        }
    }
}

/// Errors raised while reading or writing the data directory
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying filesystem failure
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Source I/O error
        #[source]
        source: std::io::Error,
    },
    /// A field value that the whitespace-delimited format cannot hold
    #[error("cannot write {field} '{value}' to {file}: must be non-empty without whitespace")]
    Encode {
        /// Data file being written
        file: &'static str,
        /// Field name
        field: &'static str,
        /// Offending value
        value: String,
    },
}

/// Errors raised by configuration handling
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Key not recognized by `get`/`set`/`unset`
    #[error("Unknown config key: '{0}'")]
    UnknownKey(String),
    /// Value could not be parsed for the given key
    #[error("Invalid value for '{key}': '{value}'")]
    InvalidValue {
        /// Config key
        key: String,
        /// Rejected value
        value: String,
    },
    /// Config file could not be read or written
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML serialization failed
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
