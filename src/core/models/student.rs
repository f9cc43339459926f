//! Student model

use super::registry::Keyed;
use super::{Grade, Person};

/// A student with grades and course enrollments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,

    /// Grades in the order they were recorded
    grades: Vec<Grade>,

    /// Codes of enrolled courses, no duplicates
    enrolled_courses: Vec<String>,
}

impl Student {
    /// Create a student with no grades or enrollments
    #[must_use]
    pub const fn new(name: String, id: i64, password: String) -> Self {
        Self {
            person: Person::new(name, id, password),
            grades: Vec::new(),
            enrolled_courses: Vec::new(),
        }
    }

    /// Identity and credentials
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Mutable identity, for password changes
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Student name
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Student id
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.person.id()
    }

    /// Recorded grades
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Codes of enrolled courses
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Whether the student is enrolled in the course
    #[must_use]
    pub fn is_enrolled(&self, course_code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_code)
    }

    /// Grade point average over all grades (0.0 with no grades)
    #[must_use]
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.iter().map(Grade::points).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.grades.len() as f64;
        total / count
    }

    pub(crate) fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Returns `false` when already enrolled
    pub(crate) fn enroll(&mut self, course_code: &str) -> bool {
        if self.is_enrolled(course_code) {
            return false;
        }
        self.enrolled_courses.push(course_code.to_string());
        true
    }

    pub(crate) fn drop_course(&mut self, course_code: &str) {
        self.enrolled_courses.retain(|c| c != course_code);
    }

    /// Returns the number of grades dropped
    pub(crate) fn drop_grades_for(&mut self, course_code: &str) -> usize {
        let before = self.grades.len();
        self.grades.retain(|g| g.course_code() != course_code);
        before - self.grades.len()
    }
}

impl Keyed for Student {
    type Key = i64;

    fn key(&self) -> &i64 {
        self.person.key()
    }
}
