//! Instructor model

use super::registry::Keyed;
use super::Person;

/// An instructor belonging to a department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    person: Person,

    /// Department name (e.g., "Physics")
    department: String,

    /// Codes of courses this instructor teaches, no duplicates
    assigned_courses: Vec<String>,
}

impl Instructor {
    /// Create an instructor with no assigned courses
    #[must_use]
    pub const fn new(name: String, id: i64, department: String, password: String) -> Self {
        Self {
            person: Person::new(name, id, password),
            department,
            assigned_courses: Vec::new(),
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

    /// Instructor name
    #[must_use]
    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// Instructor id
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.person.id()
    }

    /// Department name
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Codes of assigned courses
    #[must_use]
    pub fn assigned_courses(&self) -> &[String] {
        &self.assigned_courses
    }

    /// Whether the instructor teaches the course
    #[must_use]
    pub fn teaches(&self, course_code: &str) -> bool {
        self.assigned_courses.iter().any(|c| c == course_code)
    }

    pub(crate) fn assign(&mut self, course_code: &str) {
        if !self.teaches(course_code) {
            self.assigned_courses.push(course_code.to_string());
        }
    }

    pub(crate) fn unassign(&mut self, course_code: &str) {
        self.assigned_courses.retain(|c| c != course_code);
    }
}

impl Keyed for Instructor {
    type Key = i64;

    fn key(&self) -> &i64 {
        self.person.key()
    }
}
