//! Instructor command handler

use super::{not_found, require_token, CommandError, Records};
use crate::args::InstructorSubcommand;
use tracing::warn;
use uni_records::auth::Principal;
use uni_records::config::Config;
use uni_records::error::RecordKind;
use uni_records::models::{Letter, Student};

/// Authenticate as an instructor and dispatch the subcommand
///
/// # Errors
/// Returns an error on failed authentication, an invalid letter grade, an
/// unknown student or course, or a storage failure
pub fn run(
    id: i64,
    password: Option<String>,
    subcommand: InstructorSubcommand,
    config: &Config,
    verbose: bool,
) -> Result<(), CommandError> {
    let mut records = Records::open(config, verbose)?;
    records.authenticate(
        Principal::Instructor(id),
        password,
        &config.auth.admin_password,
    )?;

    match subcommand {
        InstructorSubcommand::Courses => print_courses(&records, id)?,
        InstructorSubcommand::Grade {
            code,
            student_id,
            letter,
            marks,
        } => {
            let letter: Letter = letter.parse()?;
            if !records
                .university
                .find_instructor(id)
                .is_some_and(|i| i.teaches(&code))
            {
                warn!("Instructor {id} is grading {code} without being assigned to it");
            }
            records
                .university
                .record_grade(id, student_id, &code, letter, marks)?;
            records.save()?;
            println!("✓ Recorded {letter} ({marks}) for student {student_id} in {code}");
        }
        InstructorSubcommand::Passwd { new_password } => {
            require_token("password", &new_password)?;
            let instructor = records
                .university
                .find_instructor_mut(id)
                .ok_or_else(|| not_found(RecordKind::Instructor, id))?;
            instructor.person_mut().set_password(new_password);
            records.save()?;
            println!("✓ Password updated");
        }
    }

    Ok(())
}

fn print_courses(records: &Records, id: i64) -> Result<(), CommandError> {
    let university = &records.university;
    let instructor = university
        .find_instructor(id)
        .ok_or_else(|| not_found(RecordKind::Instructor, id))?;

    if instructor.assigned_courses().is_empty() {
        println!("No assigned courses");
    }
    for code in instructor.assigned_courses() {
        println!("{code}  {}", records.course_name(code));
        let Some(course) = university.find_course(code) else {
            continue;
        };
        for &student_id in course.students() {
            let name = university
                .find_student(student_id)
                .map_or("?", Student::name);
            println!("    {student_id:>6}  {name}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::config_for;
    use super::*;
    use tempfile::TempDir;
    use uni_records::error::RecordError;
    use uni_records::models::{Course, Instructor, University};
    use uni_records::storage::{load_university, save_university};

    fn seed(dir: &std::path::Path) {
        let mut uni = University::new("KLETECH".to_string());
        uni.add_course(Course::new("Algorithms".to_string(), "CS101".to_string()))
            .unwrap();
        uni.add_instructor(Instructor::new(
            "Grace".to_string(),
            10,
            "CS".to_string(),
            "gpw".to_string(),
        ))
        .unwrap();
        uni.add_student(Student::new("Ana".to_string(), 1, "apw".to_string()))
            .unwrap();
        uni.assign_instructor("CS101", 10).unwrap();
        uni.enroll("CS101", 1).unwrap();
        save_university(dir, &uni).unwrap();
    }

    fn grade(letter: &str, marks: i64) -> InstructorSubcommand {
        InstructorSubcommand::Grade {
            code: "CS101".to_string(),
            student_id: 1,
            letter: letter.to_string(),
            marks,
        }
    }

    #[test]
    fn test_instructor_grade_persists() {
        let temp_dir = TempDir::new().unwrap();
        seed(temp_dir.path());
        let config = config_for(temp_dir.path());

        run(10, Some("gpw".to_string()), grade("B", -3), &config, false).unwrap();
        run(
            10,
            Some("gpw".to_string()),
            InstructorSubcommand::Courses,
            &config,
            false,
        )
        .unwrap();

        let uni = load_university(temp_dir.path(), "KLETECH".to_string())
            .unwrap()
            .university;
        let grades = uni.find_student(1).unwrap().grades();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].letter(), Letter::B);
        assert_eq!(grades[0].marks(), -3);
    }

    #[test]
    fn test_instructor_invalid_letter_records_nothing() {
        let temp_dir = TempDir::new().unwrap();
        seed(temp_dir.path());
        let config = config_for(temp_dir.path());

        let err = run(10, Some("gpw".to_string()), grade("E", 50), &config, false).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Record(RecordError::InvalidLetter(_))
        ));

        let uni = load_university(temp_dir.path(), "KLETECH".to_string())
            .unwrap()
            .university;
        assert!(uni.find_student(1).unwrap().grades().is_empty());
    }

    #[test]
    fn test_instructor_passwd_persists() {
        let temp_dir = TempDir::new().unwrap();
        seed(temp_dir.path());

        run(
            10,
            Some("gpw".to_string()),
            InstructorSubcommand::Passwd {
                new_password: "fresh".to_string(),
            },
            &config_for(temp_dir.path()),
            false,
        )
        .unwrap();

        let uni = load_university(temp_dir.path(), "KLETECH".to_string())
            .unwrap()
            .university;
        assert!(uni
            .find_instructor(10)
            .unwrap()
            .person()
            .check_password("fresh"));
    }
}
