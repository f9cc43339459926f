//! University model: the store that owns every student, instructor, and course

use super::registry::Registry;
use super::{Course, Instructor, Student};
use crate::core::error::{RecordError, RecordKind};
use tracing::{debug, info};

/// Represents a university and all of its records
///
/// Relationships between records are stored as keys (student and instructor
/// ids, course codes) and resolved through this store.
///
/// Records enter only through the `add_*` and relationship operations or the
/// storage loader, which keep links resolvable:
///
/// ```compile_fail
/// let uni: uni_records::models::University = toml::from_str("name = \"x\"").unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct University {
    /// University name
    pub name: String,

    pub(crate) students: Registry<Student>,
    pub(crate) instructors: Registry<Instructor>,
    pub(crate) courses: Registry<Course>,
}

impl University {
    /// Create an empty university
    ///
    /// # Arguments
    /// * `name` - University name
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            students: Registry::new(),
            instructors: Registry::new(),
            courses: Registry::new(),
        }
    }

    /// All students, in insertion order
    #[must_use]
    pub const fn students(&self) -> &Registry<Student> {
        &self.students
    }

    /// All instructors, in insertion order
    #[must_use]
    pub const fn instructors(&self) -> &Registry<Instructor> {
        &self.instructors
    }

    /// All courses, in insertion order
    #[must_use]
    pub const fn courses(&self) -> &Registry<Course> {
        &self.courses
    }

    /// Add a student
    ///
    /// # Errors
    /// Returns `RecordError::Conflict` if a student with the same id exists
    pub fn add_student(&mut self, student: Student) -> Result<(), RecordError> {
        self.students
            .insert(student)
            .map_err(|s| RecordError::conflict(RecordKind::Student, s.id()))
    }

    /// Add an instructor
    ///
    /// # Errors
    /// Returns `RecordError::Conflict` if an instructor with the same id exists
    pub fn add_instructor(&mut self, instructor: Instructor) -> Result<(), RecordError> {
        self.instructors
            .insert(instructor)
            .map_err(|i| RecordError::conflict(RecordKind::Instructor, i.id()))
    }

    /// Add a course
    ///
    /// # Errors
    /// Returns `RecordError::Conflict` if a course with the same code exists
    pub fn add_course(&mut self, course: Course) -> Result<(), RecordError> {
        self.courses
            .insert(course)
            .map_err(|c| RecordError::conflict(RecordKind::Course, c.code()))
    }

    /// Get a student by id (first match)
    #[must_use]
    pub fn find_student(&self, id: i64) -> Option<&Student> {
        self.students.find(&id)
    }

    /// Get a mutable student by id (first match)
    pub fn find_student_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.find_mut(&id)
    }

    /// Get an instructor by id (first match)
    #[must_use]
    pub fn find_instructor(&self, id: i64) -> Option<&Instructor> {
        self.instructors.find(&id)
    }

    /// Get a mutable instructor by id (first match)
    pub fn find_instructor_mut(&mut self, id: i64) -> Option<&mut Instructor> {
        self.instructors.find_mut(&id)
    }

    /// Get a course by code (first match)
    #[must_use]
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.courses.find(code)
    }

    /// Remove every student with this id and take them off course rosters
    ///
    /// # Returns
    /// Number of students removed
    pub fn remove_student(&mut self, id: i64) -> usize {
        let removed = self.students.remove_by_key(&id).len();
        if removed > 0 {
            for course in self.courses.iter_mut() {
                course.remove_student(id);
            }
            info!("Removed student {id}");
        }
        removed
    }

    /// Remove every instructor with this id and clear their course assignments
    ///
    /// # Returns
    /// Number of instructors removed
    pub fn remove_instructor(&mut self, id: i64) -> usize {
        let removed = self.instructors.remove_by_key(&id).len();
        if removed > 0 {
            for course in self.courses.iter_mut() {
                if course.instructor() == Some(id) {
                    course.set_instructor(None);
                    debug!("Course {} no longer has an instructor", course.code());
                }
            }
            info!("Removed instructor {id}");
        }
        removed
    }

    /// Remove every course with this code
    ///
    /// The course is dropped from student enrollments and instructor
    /// assignments, and grades recorded for it are deleted.
    ///
    /// # Returns
    /// Number of courses removed
    pub fn remove_course(&mut self, code: &str) -> usize {
        let removed = self.courses.remove_by_key(code).len();
        if removed > 0 {
            let mut dropped_grades = 0;
            for student in self.students.iter_mut() {
                student.drop_course(code);
                dropped_grades += student.drop_grades_for(code);
            }
            for instructor in self.instructors.iter_mut() {
                instructor.unassign(code);
            }
            info!("Removed course {code} ({dropped_grades} grade(s) dropped)");
        }
        removed
    }

    /// Validate that every cross reference resolves and links are symmetric
    ///
    /// # Returns
    /// `Ok(())` if consistent, otherwise every inconsistency found
    ///
    /// # Errors
    /// Returns `Err` with one message per broken reference
    pub fn validate_links(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        for course in &self.courses {
            for &student_id in course.students() {
                match self.find_student(student_id) {
                    Some(s) if s.is_enrolled(course.code()) => {}
                    Some(_) => problems.push(format!(
                        "Course '{}': student {student_id} does not list it",
                        course.code()
                    )),
                    None => problems.push(format!(
                        "Course '{}': student {student_id} not found",
                        course.code()
                    )),
                }
            }
            if let Some(instructor_id) = course.instructor() {
                match self.find_instructor(instructor_id) {
                    Some(i) if i.teaches(course.code()) => {}
                    Some(_) => problems.push(format!(
                        "Course '{}': instructor {instructor_id} does not list it",
                        course.code()
                    )),
                    None => problems.push(format!(
                        "Course '{}': instructor {instructor_id} not found",
                        course.code()
                    )),
                }
            }
        }

        for student in &self.students {
            for code in student.enrolled_courses() {
                if !self
                    .find_course(code)
                    .is_some_and(|c| c.has_student(student.id()))
                {
                    problems.push(format!(
                        "Student {}: enrollment in '{code}' not mirrored by the course",
                        student.id()
                    ));
                }
            }
            for grade in student.grades() {
                if self.find_course(grade.course_code()).is_none() {
                    problems.push(format!(
                        "Student {}: grade for unknown course '{}'",
                        student.id(),
                        grade.course_code()
                    ));
                }
            }
        }

        for instructor in &self.instructors {
            for code in instructor.assigned_courses() {
                if self.find_course(code).and_then(Course::instructor) != Some(instructor.id()) {
                    problems.push(format!(
                        "Instructor {}: assignment to '{code}' not mirrored by the course",
                        instructor.id()
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
