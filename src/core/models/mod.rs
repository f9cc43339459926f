//! Data models for `UniRecords`

pub mod course;
pub mod grade;
pub mod instructor;
pub mod person;
pub mod registry;
pub mod student;
pub mod university;

pub use course::Course;
pub use grade::{Grade, Letter};
pub use instructor::Instructor;
pub use person::Person;
pub use registry::{Keyed, Registry};
pub use student::Student;
pub use university::University;
