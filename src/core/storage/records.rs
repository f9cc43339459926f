//! Line formats for the data files
//!
//! Every record is one line of whitespace-separated tokens. Student header
//! lines are followed by that student's grade lines.

use super::{
    LoadIssue, LoadIssueReason, COURSES_FILE, ENROLLMENTS_FILE, INSTRUCTORS_FILE, STUDENTS_FILE,
};
use crate::core::error::StorageError;
use crate::core::models::{Course, Grade, Instructor, Letter, Student, University};
use std::fmt::Write;
use tracing::{debug, warn};

/// A non-blank line split into tokens, with its 1-based line number
type Tokens<'a> = (usize, Vec<&'a str>);

fn tokenize(content: &str) -> Vec<Tokens<'_>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
        .collect()
}

fn parse_int(token: &str) -> Result<i64, LoadIssueReason> {
    token
        .parse::<i64>()
        .map_err(|_| LoadIssueReason::InvalidNumber(token.to_string()))
}

fn expect_tokens(
    tokens: &[&str],
    expected: &'static str,
    allowed: &[usize],
) -> Result<(), LoadIssueReason> {
    if allowed.contains(&tokens.len()) {
        Ok(())
    } else {
        Err(LoadIssueReason::TokenCount {
            expected,
            found: tokens.len(),
        })
    }
}

/// Parse `instructors.txt`: `<name> <id> <department> <password>`
pub(super) fn read_instructors(
    content: &str,
    university: &mut University,
    issues: &mut Vec<LoadIssue>,
) {
    for (line, tokens) in tokenize(content) {
        let parsed = expect_tokens(&tokens, "4", &[4]).and_then(|()| {
            let id = parse_int(tokens[1])?;
            Ok(Instructor::new(
                tokens[0].to_string(),
                id,
                tokens[2].to_string(),
                tokens[3].to_string(),
            ))
        });

        match parsed {
            Ok(instructor) => {
                if university.instructors.contains_key(&instructor.id()) {
                    warn!(
                        "{INSTRUCTORS_FILE}:{line}: duplicate instructor id {}",
                        instructor.id()
                    );
                }
                university.instructors.push(instructor);
            }
            Err(reason) => issues.push(LoadIssue::new(INSTRUCTORS_FILE, line, reason)),
        }
    }
}

/// Parse `courses.txt`: `<name> <code> [<instructorId>]`
///
/// Instructors must already be loaded so the optional id can be resolved.
pub(super) fn read_courses(
    content: &str,
    university: &mut University,
    issues: &mut Vec<LoadIssue>,
) {
    for (line, tokens) in tokenize(content) {
        if let Err(reason) = expect_tokens(&tokens, "2 or 3", &[2, 3]) {
            issues.push(LoadIssue::new(COURSES_FILE, line, reason));
            continue;
        }

        let mut course = Course::new(tokens[0].to_string(), tokens[1].to_string());
        if let Some(token) = tokens.get(2) {
            match parse_int(token) {
                Ok(id) => match university.instructors.find_mut(&id) {
                    Some(instructor) => {
                        instructor.assign(course.code());
                        course.set_instructor(Some(id));
                    }
                    None => issues.push(LoadIssue::new(
                        COURSES_FILE,
                        line,
                        LoadIssueReason::UnknownInstructor(id),
                    )),
                },
                Err(reason) => issues.push(LoadIssue::new(COURSES_FILE, line, reason)),
            }
        }

        if university.courses.contains_key(course.code()) {
            warn!("{COURSES_FILE}:{line}: duplicate course code {}", course.code());
        }
        university.courses.push(course);
    }
}

struct StudentHeader {
    student: Student,
    grade_count: Option<usize>,
}

fn parse_student_header(tokens: &[&str]) -> Result<StudentHeader, LoadIssueReason> {
    expect_tokens(tokens, "3 or 4", &[3, 4])?;
    let id = parse_int(tokens[1])?;
    let grade_count = tokens
        .get(3)
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| LoadIssueReason::InvalidNumber((*token).to_string()))
        })
        .transpose()?;

    Ok(StudentHeader {
        student: Student::new(tokens[0].to_string(), id, tokens[2].to_string()),
        grade_count,
    })
}

/// A grade line has three tokens and no integer in the id position
fn looks_like_grade(tokens: &[&str]) -> bool {
    tokens.len() == 3 && tokens[1].parse::<i64>().is_err()
}

fn parse_grade(tokens: &[&str], university: &University) -> Result<Grade, LoadIssueReason> {
    expect_tokens(tokens, "3", &[3])?;
    let letter = tokens[1]
        .parse::<Letter>()
        .map_err(|_| LoadIssueReason::InvalidLetter(tokens[1].to_string()))?;
    let marks = parse_int(tokens[2])?;
    let course = university
        .find_course(tokens[0])
        .ok_or_else(|| LoadIssueReason::UnknownCourse(tokens[0].to_string()))?;

    Ok(Grade::new(course.code().to_string(), letter, marks))
}

/// Parse `students.txt`
///
/// A header with a fourth token is followed by exactly that many grade lines;
/// hitting another header or the end of file first is reported as truncated.
/// A three-token header is followed by every grade-shaped line up to the next
/// header; the first grade line that fails (e.g., an unknown course) ends that
/// student's grades.
///
/// Courses must already be loaded so grade lines can be resolved.
pub(super) fn read_students(
    content: &str,
    university: &mut University,
    issues: &mut Vec<LoadIssue>,
) {
    let lines = tokenize(content);
    let mut idx = 0;

    while let Some((line, tokens)) = lines.get(idx) {
        idx += 1;
        let StudentHeader {
            mut student,
            grade_count,
        } = match parse_student_header(tokens) {
            Ok(header) => header,
            Err(reason) => {
                issues.push(LoadIssue::new(STUDENTS_FILE, *line, reason));
                continue;
            }
        };

        if let Some(expected) = grade_count {
            for found in 0..expected {
                let next = lines.get(idx).filter(|(_, t)| looks_like_grade(t));
                let Some((grade_line, grade_tokens)) = next else {
                    issues.push(LoadIssue::new(
                        STUDENTS_FILE,
                        *line,
                        LoadIssueReason::Truncated { expected, found },
                    ));
                    break;
                };
                idx += 1;
                match parse_grade(grade_tokens, university) {
                    Ok(grade) => student.add_grade(grade),
                    Err(reason) => {
                        issues.push(LoadIssue::new(STUDENTS_FILE, *grade_line, reason));
                    }
                }
            }
        } else {
            while let Some((grade_line, grade_tokens)) = lines.get(idx) {
                if !looks_like_grade(grade_tokens) {
                    break;
                }
                idx += 1;
                match parse_grade(grade_tokens, university) {
                    Ok(grade) => student.add_grade(grade),
                    Err(reason) => {
                        issues.push(LoadIssue::new(STUDENTS_FILE, *grade_line, reason));
                        break;
                    }
                }
            }
        }

        if university.students.contains_key(&student.id()) {
            warn!("{STUDENTS_FILE}:{line}: duplicate student id {}", student.id());
        }
        debug!(
            "Loaded student {} with {} grade(s)",
            student.id(),
            student.grades().len()
        );
        university.students.push(student);
    }
}

/// Parse `enrollments.txt`: `<courseCode> <studentId>`
///
/// Courses and students must already be loaded.
pub(super) fn read_enrollments(
    content: &str,
    university: &mut University,
    issues: &mut Vec<LoadIssue>,
) {
    for (line, tokens) in tokenize(content) {
        let result = expect_tokens(&tokens, "2", &[2]).and_then(|()| {
            let code = tokens[0];
            let student_id = parse_int(tokens[1])?;
            if university.find_course(code).is_none() {
                return Err(LoadIssueReason::UnknownCourse(code.to_string()));
            }
            if university.find_student(student_id).is_none() {
                return Err(LoadIssueReason::UnknownStudent(student_id));
            }
            Ok((code, student_id))
        });

        match result {
            Ok((code, student_id)) => {
                // Both keys were resolved above
                let _ = university.enroll(code, student_id);
            }
            Err(reason) => issues.push(LoadIssue::new(ENROLLMENTS_FILE, line, reason)),
        }
    }
}

/// Reject values the whitespace-delimited format cannot round-trip
fn token<'a>(
    file: &'static str,
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, StorageError> {
    if super::is_storable_token(value) {
        Ok(value)
    } else {
        Err(StorageError::Encode {
            file,
            field,
            value: value.to_string(),
        })
    }
}

pub(super) fn write_students(university: &University) -> Result<String, StorageError> {
    let mut out = String::new();
    for student in university.students() {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            token(STUDENTS_FILE, "name", student.name())?,
            student.id(),
            token(STUDENTS_FILE, "password", student.person().password())?,
            student.grades().len()
        );
        for grade in student.grades() {
            let _ = writeln!(
                out,
                "{} {} {}",
                token(STUDENTS_FILE, "course code", grade.course_code())?,
                grade.letter(),
                grade.marks()
            );
        }
    }
    Ok(out)
}

pub(super) fn write_instructors(university: &University) -> Result<String, StorageError> {
    let mut out = String::new();
    for instructor in university.instructors() {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            token(INSTRUCTORS_FILE, "name", instructor.name())?,
            instructor.id(),
            token(INSTRUCTORS_FILE, "department", instructor.department())?,
            token(INSTRUCTORS_FILE, "password", instructor.person().password())?
        );
    }
    Ok(out)
}

pub(super) fn write_courses(university: &University) -> Result<String, StorageError> {
    let mut out = String::new();
    for course in university.courses() {
        let name = token(COURSES_FILE, "name", course.name())?;
        let code = token(COURSES_FILE, "code", course.code())?;
        match course.instructor() {
            Some(id) => {
                let _ = writeln!(out, "{name} {code} {id}");
            }
            None => {
                let _ = writeln!(out, "{name} {code}");
            }
        }
    }
    Ok(out)
}

pub(super) fn write_enrollments(university: &University) -> Result<String, StorageError> {
    let mut out = String::new();
    for course in university.courses() {
        let code = token(ENROLLMENTS_FILE, "course code", course.code())?;
        for student_id in course.students() {
            let _ = writeln!(out, "{code} {student_id}");
        }
    }
    Ok(out)
}
