//! Student command handler

use super::{not_found, require_token, CommandError, Records};
use crate::args::StudentSubcommand;
use uni_records::auth::Principal;
use uni_records::config::Config;
use uni_records::error::RecordKind;

/// Authenticate as a student and dispatch the subcommand
///
/// # Errors
/// Returns an error on failed authentication, an unstorable password, or a
/// storage failure
pub fn run(
    id: i64,
    password: Option<String>,
    subcommand: StudentSubcommand,
    config: &Config,
    verbose: bool,
) -> Result<(), CommandError> {
    let mut records = Records::open(config, verbose)?;
    records.authenticate(Principal::Student(id), password, &config.auth.admin_password)?;

    let student = records
        .university
        .find_student(id)
        .ok_or_else(|| not_found(RecordKind::Student, id))?;

    match subcommand {
        StudentSubcommand::Courses => {
            if student.enrolled_courses().is_empty() {
                println!("No enrolled courses");
            }
            for code in student.enrolled_courses() {
                println!("  {code:<8}  {}", records.course_name(code));
            }
        }
        StudentSubcommand::Grades => {
            if student.grades().is_empty() {
                println!("No grades recorded");
            }
            for grade in student.grades() {
                println!(
                    "  {:<8}  {:<20} {}  {:>3}",
                    grade.course_code(),
                    records.course_name(grade.course_code()),
                    grade.letter(),
                    grade.marks()
                );
            }
        }
        StudentSubcommand::Gpa => {
            println!("GPA for {} ({id}): {:.2}", student.name(), student.gpa());
        }
        StudentSubcommand::Passwd { new_password } => {
            require_token("password", &new_password)?;
            let student = records
                .university
                .find_student_mut(id)
                .ok_or_else(|| not_found(RecordKind::Student, id))?;
            student.person_mut().set_password(new_password);
            records.save()?;
            println!("✓ Password updated");
        }
    }

    Ok(())
}
