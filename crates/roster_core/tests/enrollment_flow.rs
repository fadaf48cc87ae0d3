use roster_core::{Course, Grade, RegistryService, Student};

fn registry_with(students: &[&Student], courses: &[&Course]) -> RegistryService {
    let mut registry = RegistryService::new();
    for student in students {
        registry.add_person((*student).clone().into()).unwrap();
    }
    for course in courses {
        registry.add_course((*course).clone());
    }
    registry
}

#[test]
fn enroll_grade_and_query_walkthrough() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    let enrollment = registry.enroll_student(&ana, &algorithms).unwrap();
    assert!(enrollment.grade.is_none());

    assert!(registry.assign_grade("S1", "C1", "A"));

    let courses = registry.courses_for_student("S1");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, "C1");

    let current = registry.enrollment(enrollment.id).unwrap();
    assert_eq!(current.grade, Some(Grade::new("A")));
    assert_eq!(current.to_string(), "Student: Ana, Course: Algorithms, Grade: A");
}

#[test]
fn enrolling_twice_keeps_one_roster_entry_but_two_records() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    let first = registry.enroll_student(&ana, &algorithms).unwrap();
    let second = registry.enroll_student(&ana, &algorithms).unwrap();
    assert_ne!(first.id, second.id);

    assert_eq!(registry.students_in_course("C1"), vec![ana]);
    assert_eq!(registry.enrollments().len(), 2);
    assert_eq!(registry.enrollments_for_course("C1").len(), 2);
    assert_eq!(registry.courses_for_student("S1").len(), 2);
}

#[test]
fn assign_grade_only_touches_first_matching_enrollment() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    let first = registry.enroll_student(&ana, &algorithms).unwrap();
    let second = registry.enroll_student(&ana, &algorithms).unwrap();

    assert_eq!(
        registry.try_assign_grade("S1", "C1", "B").unwrap(),
        first.id
    );
    assert_eq!(
        registry.try_assign_grade("S1", "C1", "A").unwrap(),
        first.id
    );

    assert_eq!(
        registry.enrollment(first.id).unwrap().grade,
        Some(Grade::new("A"))
    );
    assert!(registry.enrollment(second.id).unwrap().grade.is_none());
}

#[test]
fn enroll_with_unknown_ids_mutates_nothing() {
    let ana = Student::new("Ana", "S1", "CS");
    let ghost = Student::new("Ghost", "S9", "None");
    let algorithms = Course::new("Algorithms", "C1");
    let unknown_course = Course::new("Unknown", "C9");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    assert!(registry.enroll_student(&ghost, &algorithms).is_none());
    assert!(registry.enroll_student(&ana, &unknown_course).is_none());

    assert!(registry.students_in_course("C1").is_empty());
    assert!(registry.enrollments().is_empty());
    assert!(registry.course("C9").is_none());
}

#[test]
fn enroll_updates_registered_course_not_callers_copy() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    registry.enroll_student(&ana, &algorithms).unwrap();

    assert!(algorithms.enrolled_students().is_empty());
    assert!(registry.course("C1").unwrap().is_enrolled("S1"));
    assert_eq!(
        registry.course("C1").unwrap().to_string(),
        "Course Name: Algorithms, ID: C1, Enrolled Students: [Ana]"
    );
}

#[test]
fn assign_grade_without_enrollment_is_a_noop() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    assert!(!registry.assign_grade("S1", "C1", "A"));
    assert!(registry.try_assign_grade("S1", "C1", "A").is_err());
}

#[test]
fn unknown_ids_yield_empty_query_results() {
    let registry = RegistryService::new();

    assert!(registry.students_in_course("UNKNOWN").is_empty());
    assert!(registry.courses_for_student("UNKNOWN").is_empty());
    assert!(registry.enrollments_for_course("UNKNOWN").is_empty());
}

#[test]
fn courses_for_student_follows_enrollment_order() {
    let ana = Student::new("Ana", "S1", "CS");
    let ben = Student::new("Ben", "S2", "EE");
    let c1 = Course::new("Algorithms", "C1");
    let c2 = Course::new("Databases", "C2");
    let c3 = Course::new("Compilers", "C3");
    let mut registry = registry_with(&[&ana, &ben], &[&c1, &c2, &c3]);

    registry.enroll_student(&ana, &c3).unwrap();
    registry.enroll_student(&ben, &c2).unwrap();
    registry.enroll_student(&ana, &c1).unwrap();
    registry.enroll_student(&ana, &c2).unwrap();

    let ids = registry
        .courses_for_student("S1")
        .into_iter()
        .map(|course| course.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["C3", "C1", "C2"]);
}

#[test]
fn removals_do_not_cascade_into_enrollments() {
    let ana = Student::new("Ana", "S1", "CS");
    let c1 = Course::new("Algorithms", "C1");
    let c2 = Course::new("Databases", "C2");
    let mut registry = registry_with(&[&ana], &[&c1, &c2]);

    let first = registry.enroll_student(&ana, &c1).unwrap();
    registry.enroll_student(&ana, &c2).unwrap();

    registry.remove_course("C1");
    registry.remove_person("S1");

    assert_eq!(registry.enrollments().len(), 2);
    let ids = registry
        .courses_for_student("S1")
        .into_iter()
        .map(|course| course.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["C1", "C2"]);
    assert_eq!(
        registry.enrollment(first.id).unwrap().to_string(),
        "Student: Ana, Course: Algorithms, Grade: Not Assigned"
    );
    assert!(registry.assign_grade("S1", "C1", "C"));
}

#[test]
fn unenroll_clears_roster_entry_and_all_pair_records() {
    let ana = Student::new("Ana", "S1", "CS");
    let ben = Student::new("Ben", "S2", "EE");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana, &ben], &[&algorithms]);

    registry.enroll_student(&ana, &algorithms).unwrap();
    registry.enroll_student(&ben, &algorithms).unwrap();
    registry.enroll_student(&ana, &algorithms).unwrap();

    assert_eq!(registry.unenroll_student("S1", "C1"), 2);
    assert_eq!(registry.students_in_course("C1"), vec![ben]);
    assert_eq!(registry.enrollments().len(), 1);
    assert_eq!(registry.unenroll_student("S1", "C1"), 0);
}

#[test]
fn roster_keeps_snapshot_after_student_update() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    let enrollment = registry.enroll_student(&ana, &algorithms).unwrap();
    assert!(registry.update_person(Student::new("Ana Maria", "S1", "CS").into()));

    assert_eq!(registry.students_in_course("C1")[0].name, "Ana");
    assert_eq!(registry.enrollment(enrollment.id).unwrap().student.name, "Ana");
    assert_eq!(registry.student("S1").unwrap().name, "Ana Maria");
}

#[test]
fn removed_course_is_still_reported_for_its_students() {
    let ana = Student::new("Ana", "S1", "CS");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana], &[&algorithms]);

    registry.enroll_student(&ana, &algorithms).unwrap();
    registry.remove_course("C1");

    let courses = registry.courses_for_student("S1");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, "C1");
    assert_eq!(courses[0].name, "Algorithms");
    assert!(courses[0].is_enrolled("S1"));
    assert!(registry.students_in_course("C1").is_empty());
}

#[test]
fn registered_course_wins_over_enrollment_snapshot() {
    let ana = Student::new("Ana", "S1", "CS");
    let ben = Student::new("Ben", "S2", "EE");
    let algorithms = Course::new("Algorithms", "C1");
    let mut registry = registry_with(&[&ana, &ben], &[&algorithms]);

    registry.enroll_student(&ana, &algorithms).unwrap();
    registry.enroll_student(&ben, &algorithms).unwrap();

    let courses = registry.courses_for_student("S1");
    let names = courses[0]
        .enrolled_students()
        .iter()
        .map(|student| student.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Ana", "Ben"]);
}
