//! Integration tests for the record store and its relationships

use uni_records::auth::{Authenticator, PlaintextAuthenticator, Principal};
use uni_records::error::{RecordError, RecordKind};
use uni_records::models::{Course, Instructor, Keyed, Letter, Registry, Student, University};

fn university() -> University {
    let mut uni = University::new("KLETECH".to_string());
    for (name, code) in [
        ("Algorithms", "CS101"),
        ("Calculus", "MA201"),
        ("Physics", "PH101"),
        ("Writing", "EN101"),
        ("History", "HI101"),
    ] {
        uni.add_course(Course::new(name.to_string(), code.to_string()))
            .unwrap();
    }
    uni.add_student(Student::new("Ana".to_string(), 1, "apw".to_string()))
        .unwrap();
    uni.add_student(Student::new("Ben".to_string(), 2, "bpw".to_string()))
        .unwrap();
    uni.add_instructor(Instructor::new(
        "Grace".to_string(),
        10,
        "CS".to_string(),
        "gpw".to_string(),
    ))
    .unwrap();
    uni.add_instructor(Instructor::new(
        "Alan".to_string(),
        11,
        "MATH".to_string(),
        "apw".to_string(),
    ))
    .unwrap();
    uni
}

#[test]
fn test_gpa_over_every_letter() {
    let mut uni = university();
    let grades = [
        ("CS101", Letter::A),
        ("MA201", Letter::B),
        ("PH101", Letter::C),
        ("EN101", Letter::D),
        ("HI101", Letter::F),
    ];
    for (code, letter) in grades {
        uni.record_grade(10, 1, code, letter, 50).unwrap();
    }

    let ana = uni.find_student(1).unwrap();
    assert!((ana.gpa() - 2.0).abs() < f64::EPSILON);
    assert!(uni.find_student(2).unwrap().gpa().abs() < f64::EPSILON);
}

#[test]
fn test_add_duplicate_is_conflict() {
    let mut uni = university();

    let err = uni
        .add_student(Student::new("Other".to_string(), 1, "pw".to_string()))
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::Conflict {
            kind: RecordKind::Student,
            key: "1".to_string()
        }
    );
    assert!(uni
        .add_course(Course::new("Again".to_string(), "CS101".to_string()))
        .is_err());
    assert_eq!(uni.students().len(), 2);
    assert_eq!(uni.courses().len(), 5);
}

#[test]
fn test_enrollment_symmetry() {
    let mut uni = university();

    uni.enroll("CS101", 1).unwrap();
    uni.enroll("CS101", 2).unwrap();
    uni.enroll("MA201", 1).unwrap();

    for course in uni.courses() {
        for &id in course.students() {
            assert!(uni.find_student(id).unwrap().is_enrolled(course.code()));
        }
    }
    for student in uni.students() {
        for code in student.enrolled_courses() {
            assert!(uni.find_course(code).unwrap().has_student(student.id()));
        }
    }
    assert!(uni.validate_links().is_ok());
}

#[test]
fn test_remove_course_cascades() {
    let mut uni = university();
    uni.enroll("CS101", 1).unwrap();
    uni.enroll("MA201", 1).unwrap();
    uni.assign_instructor("CS101", 10).unwrap();
    uni.record_grade(10, 1, "CS101", Letter::A, 95).unwrap();
    uni.record_grade(10, 1, "MA201", Letter::B, 85).unwrap();

    assert_eq!(uni.remove_course("CS101"), 1);

    assert!(uni.find_course("CS101").is_none());
    let ana = uni.find_student(1).unwrap();
    assert!(!ana.is_enrolled("CS101"));
    assert_eq!(ana.grades().len(), 1);
    assert_eq!(ana.grades()[0].course_code(), "MA201");
    assert!(!uni.find_instructor(10).unwrap().teaches("CS101"));
    assert!(uni.validate_links().is_ok());
}

#[test]
fn test_remove_student_and_instructor_cascade() {
    let mut uni = university();
    uni.enroll("CS101", 1).unwrap();
    uni.enroll("CS101", 2).unwrap();
    uni.assign_instructor("CS101", 10).unwrap();

    assert_eq!(uni.remove_student(1), 1);
    assert_eq!(uni.remove_instructor(10), 1);
    assert_eq!(uni.remove_student(1), 0);

    let course = uni.find_course("CS101").unwrap();
    assert_eq!(course.students(), [2]);
    assert_eq!(course.instructor(), None);
    assert!(uni.validate_links().is_ok());
}

#[test]
fn test_record_grade_on_missing_course_creates_nothing() {
    let mut uni = university();

    let err = uni
        .record_grade(10, 1, "ZZ999", Letter::A, 99)
        .unwrap_err();

    assert_eq!(
        err,
        RecordError::NotFound {
            kind: RecordKind::Course,
            key: "ZZ999".to_string()
        }
    );
    assert!(uni.find_student(1).unwrap().grades().is_empty());
}

#[test]
fn test_registry_remove_by_key_preserves_order() {
    let mut registry = Registry::new();
    for (id, name) in [(1, "Ana"), (2, "Ben"), (1, "Dup"), (3, "Cy")] {
        registry.push(Student::new(name.to_string(), id, "pw".to_string()));
    }

    let removed = registry.remove_by_key(&1);

    let removed: Vec<_> = removed.iter().map(Student::name).collect();
    assert_eq!(removed, ["Ana", "Dup"]);
    let kept: Vec<_> = registry.iter().map(|s| *s.key()).collect();
    assert_eq!(kept, [2, 3]);
}

#[test]
fn test_plaintext_authenticator() {
    let uni = university();
    let auth = PlaintextAuthenticator::new(&uni, "root");

    assert!(auth.verify(Principal::Admin, "root"));
    assert!(!auth.verify(Principal::Admin, "apw"));
    assert!(auth.verify(Principal::Student(1), "apw"));
    assert!(!auth.verify(Principal::Student(1), "bpw"));
    assert!(auth.verify(Principal::Instructor(11), "apw"));
    assert!(!auth.verify(Principal::Instructor(99), "apw"));

    let locked = PlaintextAuthenticator::new(&uni, "");
    assert!(!locked.verify(Principal::Admin, ""));
}
