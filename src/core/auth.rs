//! Authentication for the admin, student, and instructor roles
//!
//! The store never checks credentials itself; callers ask an [`Authenticator`]
//! before handing out access.

use crate::core::models::University;
use std::fmt;
use tracing::debug;

/// Who is trying to log in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    /// The single administrator account
    Admin,
    /// A student, by id
    Student(i64),
    /// An instructor, by id
    Instructor(i64),
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Student(id) => write!(f, "student {id}"),
            Self::Instructor(id) => write!(f, "instructor {id}"),
        }
    }
}

/// Verifies a candidate password for a principal
pub trait Authenticator {
    /// `true` if the principal exists and the password matches
    fn verify(&self, principal: Principal, candidate: &str) -> bool;
}

/// Compares plaintext passwords held in the university records and the
/// configured admin password
#[derive(Debug)]
pub struct PlaintextAuthenticator<'a> {
    university: &'a University,
    admin_password: &'a str,
}

impl<'a> PlaintextAuthenticator<'a> {
    /// Create an authenticator over the loaded records
    #[must_use]
    pub const fn new(university: &'a University, admin_password: &'a str) -> Self {
        Self {
            university,
            admin_password,
        }
    }
}

impl Authenticator for PlaintextAuthenticator<'_> {
    fn verify(&self, principal: Principal, candidate: &str) -> bool {
        let accepted = match principal {
            Principal::Admin => !self.admin_password.is_empty() && self.admin_password == candidate,
            Principal::Student(id) => self
                .university
                .find_student(id)
                .is_some_and(|s| s.person().check_password(candidate)),
            Principal::Instructor(id) => self
                .university
                .find_instructor(id)
                .is_some_and(|i| i.person().check_password(candidate)),
        };
        debug!("Login attempt for {principal}: accepted={accepted}");
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Instructor, Student};

    fn sample() -> University {
        let mut uni = University::new("Test University".to_string());
        uni.add_student(Student::new("Ana".to_string(), 1, "apw".to_string()))
            .unwrap();
        uni.add_instructor(Instructor::new(
            "Grace".to_string(),
            10,
            "CS".to_string(),
            "gpw".to_string(),
        ))
        .unwrap();
        uni
    }

    #[test]
    fn test_admin_login() {
        let uni = sample();
        let auth = PlaintextAuthenticator::new(&uni, "admin");

        assert!(auth.verify(Principal::Admin, "admin"));
        assert!(!auth.verify(Principal::Admin, "Admin"));
    }

    #[test]
    fn test_empty_admin_password_disables_admin() {
        let uni = sample();
        let auth = PlaintextAuthenticator::new(&uni, "");

        assert!(!auth.verify(Principal::Admin, ""));
    }

    #[test]
    fn test_student_and_instructor_login() {
        let uni = sample();
        let auth = PlaintextAuthenticator::new(&uni, "admin");

        assert!(auth.verify(Principal::Student(1), "apw"));
        assert!(!auth.verify(Principal::Student(1), "gpw"));
        assert!(auth.verify(Principal::Instructor(10), "gpw"));
        assert!(!auth.verify(Principal::Instructor(1), "apw"));
    }

    #[test]
    fn test_unknown_principal_rejected() {
        let uni = sample();
        let auth = PlaintextAuthenticator::new(&uni, "admin");

        assert!(!auth.verify(Principal::Student(99), "apw"));
        assert!(!auth.verify(Principal::Instructor(99), "gpw"));
    }
}
