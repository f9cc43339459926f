//! Admin command handler

use super::{not_found, read_line, require_token, CommandError, Records};
use crate::args::AdminSubcommand;
use uni_records::auth::Principal;
use uni_records::config::Config;
use uni_records::error::RecordKind;
use uni_records::models::{Course, Instructor, Student, University};

/// Authenticate as admin and dispatch the subcommand
///
/// Mutating subcommands save the data directory on success.
///
/// # Errors
/// Returns an error on failed authentication, a missing or duplicate record,
/// an unstorable value, or a storage failure
pub fn run(
    subcommand: AdminSubcommand,
    password: Option<String>,
    config: &Config,
    verbose: bool,
) -> Result<(), CommandError> {
    let mut records = Records::open(config, verbose)?;
    records.authenticate(Principal::Admin, password, &config.auth.admin_password)?;

    match subcommand {
        AdminSubcommand::AddStudent {
            name,
            id,
            account_password,
        } => {
            require_token("name", &name)?;
            let password = account_password_or_prompt(account_password, "student")?;
            records
                .university
                .add_student(Student::new(name.clone(), id, password))?;
            records.save()?;
            println!("✓ Added student {name} ({id})");
        }
        AdminSubcommand::RemoveStudent { id } => {
            if records.university.remove_student(id) == 0 {
                return Err(not_found(RecordKind::Student, id));
            }
            records.save()?;
            println!("✓ Removed student {id}");
        }
        AdminSubcommand::AddInstructor {
            name,
            id,
            department,
            account_password,
        } => {
            require_token("name", &name)?;
            require_token("department", &department)?;
            let password = account_password_or_prompt(account_password, "instructor")?;
            records.university.add_instructor(Instructor::new(
                name.clone(),
                id,
                department,
                password,
            ))?;
            records.save()?;
            println!("✓ Added instructor {name} ({id})");
        }
        AdminSubcommand::RemoveInstructor { id } => {
            if records.university.remove_instructor(id) == 0 {
                return Err(not_found(RecordKind::Instructor, id));
            }
            records.save()?;
            println!("✓ Removed instructor {id}");
        }
        AdminSubcommand::AddCourse { name, code } => {
            require_token("name", &name)?;
            require_token("code", &code)?;
            records
                .university
                .add_course(Course::new(name.clone(), code.clone()))?;
            records.save()?;
            println!("✓ Added course {code} ({name})");
        }
        AdminSubcommand::RemoveCourse { code } => {
            if records.university.remove_course(&code) == 0 {
                return Err(not_found(RecordKind::Course, code));
            }
            records.save()?;
            println!("✓ Removed course {code}");
        }
        AdminSubcommand::Enroll { code, student_id } => {
            if records.university.enroll(&code, student_id)? {
                records.save()?;
                println!("✓ Enrolled student {student_id} in {code}");
            } else {
                println!("✓ Student {student_id} is already enrolled in {code}");
            }
        }
        AdminSubcommand::Assign {
            code,
            instructor_id,
        } => {
            let previous = records.university.assign_instructor(&code, instructor_id)?;
            records.save()?;
            match previous {
                Some(old) if old != instructor_id => {
                    println!("✓ Assigned instructor {instructor_id} to {code} (replacing {old})");
                }
                _ => println!("✓ Assigned instructor {instructor_id} to {code}"),
            }
        }
        AdminSubcommand::List => print_listing(&records.university),
    }

    Ok(())
}

fn account_password_or_prompt(
    account_password: Option<String>,
    role: &str,
) -> Result<String, CommandError> {
    let password = match account_password {
        Some(p) => p,
        None => read_line(&format!("Password for the new {role}"))?,
    };
    require_token("password", &password)?;
    Ok(password)
}

fn print_listing(university: &University) {
    println!("\n=== {} ===", university.name);

    println!("\nStudents ({}):", university.students().len());
    for student in university.students() {
        println!(
            "  {:>6}  {:<20} GPA {:.2}  courses: {}",
            student.id(),
            student.name(),
            student.gpa(),
            student.enrolled_courses().join(", ")
        );
    }

    println!("\nInstructors ({}):", university.instructors().len());
    for instructor in university.instructors() {
        println!(
            "  {:>6}  {:<20} {:<12} courses: {}",
            instructor.id(),
            instructor.name(),
            instructor.department(),
            instructor.assigned_courses().join(", ")
        );
    }

    println!("\nCourses ({}):", university.courses().len());
    for course in university.courses() {
        let instructor = course
            .instructor()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "  {:<8}  {:<20} instructor: {:<6} students: {}",
            course.code(),
            course.name(),
            instructor,
            course.students().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{config_for, ADMIN_PASSWORD};
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;
    use uni_records::error::RecordError;
    use uni_records::storage::{load_university, STUDENTS_FILE};

    fn admin(dir: &Path, subcommand: AdminSubcommand) -> Result<(), CommandError> {
        run(
            subcommand,
            Some(ADMIN_PASSWORD.to_string()),
            &config_for(dir),
            false,
        )
    }

    #[test]
    fn test_admin_commands_persist() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();

        admin(
            dir,
            AdminSubcommand::AddCourse {
                name: "Algorithms".to_string(),
                code: "CS101".to_string(),
            },
        )
        .unwrap();
        admin(
            dir,
            AdminSubcommand::AddStudent {
                name: "Ghost".to_string(),
                id: -5,
                account_password: Some("pw".to_string()),
            },
        )
        .unwrap();
        admin(
            dir,
            AdminSubcommand::AddInstructor {
                name: "Grace".to_string(),
                id: 10,
                department: "CS".to_string(),
                account_password: Some("gpw".to_string()),
            },
        )
        .unwrap();
        admin(
            dir,
            AdminSubcommand::Enroll {
                code: "CS101".to_string(),
                student_id: -5,
            },
        )
        .unwrap();
        admin(
            dir,
            AdminSubcommand::Assign {
                code: "CS101".to_string(),
                instructor_id: 10,
            },
        )
        .unwrap();
        admin(dir, AdminSubcommand::List).unwrap();

        let outcome = load_university(dir, "KLETECH".to_string()).unwrap();
        let uni = outcome.university;
        assert!(outcome.issues.is_empty());
        assert!(uni.find_student(-5).unwrap().is_enrolled("CS101"));
        assert_eq!(uni.find_course("CS101").unwrap().instructor(), Some(10));
        assert!(uni.validate_links().is_ok());

        admin(
            dir,
            AdminSubcommand::RemoveCourse {
                code: "CS101".to_string(),
            },
        )
        .unwrap();
        let uni = load_university(dir, "KLETECH".to_string())
            .unwrap()
            .university;
        assert!(uni.find_course("CS101").is_none());
        assert!(uni.find_student(-5).unwrap().enrolled_courses().is_empty());
    }

    #[test]
    fn test_admin_wrong_password_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();

        let err = run(
            AdminSubcommand::AddCourse {
                name: "Algorithms".to_string(),
                code: "CS101".to_string(),
            },
            Some("guess".to_string()),
            &config_for(temp_dir.path()),
            false,
        )
        .unwrap_err();

        assert!(matches!(err, CommandError::AuthFailed(Principal::Admin)));
        assert!(!temp_dir.path().join(STUDENTS_FILE).exists());
    }

    #[test]
    fn test_admin_rejects_missing_and_unstorable_records() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();

        let err = admin(dir, AdminSubcommand::RemoveStudent { id: 42 }).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Record(RecordError::NotFound {
                kind: RecordKind::Student,
                ..
            })
        ));

        let err = admin(
            dir,
            AdminSubcommand::AddCourse {
                name: "Data Structures".to_string(),
                code: "CS201".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CommandError::InvalidToken { field: "name", .. }
        ));
    }
}
