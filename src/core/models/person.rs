//! Person model shared by students and instructors

use super::registry::Keyed;

/// Identity and credentials common to students and instructors
///
/// Name and id are fixed at creation; only the password can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    id: i64,
    password: String,
}

impl Person {
    /// Create a new person
    ///
    /// # Arguments
    /// * `name` - Display name (not validated)
    /// * `id` - Numeric id, unique within its collection
    /// * `password` - Plaintext password
    #[must_use]
    pub const fn new(name: String, id: i64, password: String) -> Self {
        Self { name, id, password }
    }

    /// Person's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Person's id
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Stored plaintext password
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check a candidate password (exact match)
    #[must_use]
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Replace the password
    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }
}

impl Keyed for Person {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.id
    }
}
