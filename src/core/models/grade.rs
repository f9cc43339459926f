//! Grade model

use crate::core::error::RecordError;
use std::fmt;
use std::str::FromStr;

/// Letter grade on the A-F scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    /// 4 grade points
    A,
    /// 3 grade points
    B,
    /// 2 grade points
    C,
    /// 1 grade point
    D,
    /// 0 grade points
    F,
}

impl Letter {
    /// All letters, best first
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Grade points used for GPA
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// Single-character form used on disk
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = RecordError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'F' => Ok(Self::F),
            other => Err(RecordError::InvalidLetter(other.to_string())),
        }
    }
}

impl FromStr for Letter {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(RecordError::InvalidLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A grade earned by a student in a course
///
/// Grades are only built once the course code has been resolved against the
/// university, so the code always named a live course at creation time.
/// There is no public constructor and no deserialization path:
///
/// ```compile_fail
/// fn deserializable<T: for<'de> serde::Deserialize<'de>>() {}
/// deserializable::<uni_records::models::Grade>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    course_code: String,
    letter: Letter,
    marks: i64,
}

impl Grade {
    pub(crate) const fn new(course_code: String, letter: Letter, marks: i64) -> Self {
        Self {
            course_code,
            letter,
            marks,
        }
    }

    /// Code of the course this grade belongs to
    #[must_use]
    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    /// Letter grade
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    /// Raw marks
    #[must_use]
    pub const fn marks(&self) -> i64 {
        self.marks
    }

    /// Grade points for this grade's letter
    #[must_use]
    pub const fn points(&self) -> f64 {
        self.letter.points()
    }
}
