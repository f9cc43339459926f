//! Course model

use super::registry::Keyed;

/// Represents a course offered by the university
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course name (e.g., "Algorithms")
    name: String,

    /// Course code, the lookup key (e.g., "CS101")
    code: String,

    /// Ids of enrolled students, in enrollment order
    students: Vec<i64>,

    /// Id of the assigned instructor, if any
    instructor: Option<i64>,
}

impl Course {
    /// Create a new course with an empty roster and no instructor
    ///
    /// # Arguments
    /// * `name` - Course name
    /// * `code` - Unique course code
    #[must_use]
    pub const fn new(name: String, code: String) -> Self {
        Self {
            name,
            code,
            students: Vec::new(),
            instructor: None,
        }
    }

    /// Course name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Ids of enrolled students
    #[must_use]
    pub fn students(&self) -> &[i64] {
        &self.students
    }

    /// Id of the assigned instructor
    #[must_use]
    pub const fn instructor(&self) -> Option<i64> {
        self.instructor
    }

    /// Whether the student is on the roster
    #[must_use]
    pub fn has_student(&self, student_id: i64) -> bool {
        self.students.contains(&student_id)
    }

    pub(crate) fn add_student(&mut self, student_id: i64) -> bool {
        if self.has_student(student_id) {
            return false;
        }
        self.students.push(student_id);
        true
    }

    pub(crate) fn remove_student(&mut self, student_id: i64) {
        self.students.retain(|id| *id != student_id);
    }

    /// Returns the previously assigned instructor
    pub(crate) fn set_instructor(&mut self, instructor_id: Option<i64>) -> Option<i64> {
        std::mem::replace(&mut self.instructor, instructor_id)
    }
}

impl Keyed for Course {
    type Key = str;

    fn key(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("Algorithms".to_string(), "CS101".to_string());

        assert_eq!(course.name(), "Algorithms");
        assert_eq!(course.code(), "CS101");
        assert!(course.students().is_empty());
        assert!(course.instructor().is_none());
    }

    #[test]
    fn test_course_key() {
        let course = Course::new("Data Structures".to_string(), "CS2510".to_string());
        assert_eq!(course.key(), "CS2510");
    }

    #[test]
    fn test_roster_has_no_duplicates() {
        let mut course = Course::new("Algorithms".to_string(), "CS101".to_string());

        assert!(course.add_student(1));
        assert!(!course.add_student(1));
        assert!(course.add_student(2));
        assert_eq!(course.students(), [1, 2]);

        course.remove_student(1);
        assert_eq!(course.students(), [2]);
    }

    #[test]
    fn test_set_instructor_returns_previous() {
        let mut course = Course::new("Physics".to_string(), "PH101".to_string());

        assert_eq!(course.set_instructor(Some(10)), None);
        assert_eq!(course.set_instructor(Some(11)), Some(10));
        assert_eq!(course.instructor(), Some(11));
        assert_eq!(course.set_instructor(None), Some(11));
    }
}
