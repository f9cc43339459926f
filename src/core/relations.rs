//! Relationship operations between courses, students, and instructors
//!
//! Every operation resolves all keys before mutating anything, so a failed
//! call leaves both sides of a link untouched.

use crate::core::error::{RecordError, RecordKind};
use crate::core::models::{Grade, Letter, University};
use tracing::{debug, info};

impl University {
    /// Enroll a student in a course, updating both the roster and the
    /// student's enrollments
    ///
    /// # Returns
    /// `true` if newly enrolled, `false` if the student was already enrolled
    ///
    /// # Errors
    /// Returns `RecordError::NotFound` if the course or student does not exist
    pub fn enroll(&mut self, course_code: &str, student_id: i64) -> Result<bool, RecordError> {
        if !self.courses.contains_key(course_code) {
            return Err(RecordError::not_found(RecordKind::Course, course_code));
        }
        let student = self
            .students
            .find_mut(&student_id)
            .ok_or_else(|| RecordError::not_found(RecordKind::Student, student_id))?;

        let newly_enrolled = student.enroll(course_code);
        if let Some(course) = self.courses.find_mut(course_code) {
            course.add_student(student_id);
        }

        if newly_enrolled {
            info!("Enrolled student {student_id} in {course_code}");
        } else {
            debug!("Student {student_id} already enrolled in {course_code}");
        }
        Ok(newly_enrolled)
    }

    /// Assign an instructor to a course
    ///
    /// A previous instructor loses the course from their assignments.
    ///
    /// # Returns
    /// The id of the previously assigned instructor, if any
    ///
    /// # Errors
    /// Returns `RecordError::NotFound` if the course or instructor does not exist
    pub fn assign_instructor(
        &mut self,
        course_code: &str,
        instructor_id: i64,
    ) -> Result<Option<i64>, RecordError> {
        if !self.instructors.contains_key(&instructor_id) {
            return Err(RecordError::not_found(
                RecordKind::Instructor,
                instructor_id,
            ));
        }
        let course = self
            .courses
            .find_mut(course_code)
            .ok_or_else(|| RecordError::not_found(RecordKind::Course, course_code))?;

        let previous = course.set_instructor(Some(instructor_id));
        if let Some(previous_id) = previous.filter(|id| *id != instructor_id) {
            if let Some(old) = self.instructors.find_mut(&previous_id) {
                old.unassign(course_code);
            }
        }
        if let Some(instructor) = self.instructors.find_mut(&instructor_id) {
            instructor.assign(course_code);
        }

        info!("Assigned instructor {instructor_id} to {course_code}");
        Ok(previous)
    }

    /// Record a grade given by an instructor to a student for a course
    ///
    /// # Errors
    /// Returns `RecordError::NotFound` if the instructor, student, or course
    /// does not exist; no grade is created in that case
    pub fn record_grade(
        &mut self,
        instructor_id: i64,
        student_id: i64,
        course_code: &str,
        letter: Letter,
        marks: i64,
    ) -> Result<(), RecordError> {
        if !self.instructors.contains_key(&instructor_id) {
            return Err(RecordError::not_found(
                RecordKind::Instructor,
                instructor_id,
            ));
        }
        if !self.courses.contains_key(course_code) {
            return Err(RecordError::not_found(RecordKind::Course, course_code));
        }
        let student = self
            .students
            .find_mut(&student_id)
            .ok_or_else(|| RecordError::not_found(RecordKind::Student, student_id))?;

        student.add_grade(Grade::new(course_code.to_string(), letter, marks));
        info!(
            "Instructor {instructor_id} graded student {student_id} in {course_code}: \
             {letter} ({marks})"
        );
        Ok(())
    }
}
