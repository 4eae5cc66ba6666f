//! End-to-end tests for the application layer: intents in, persisted state
//! and aggregates out.

use tempfile::TempDir;

use gradebook::aggregate::Summary;
use gradebook::app::{App, AppError, Theme};
use gradebook::error::RecordError;
use gradebook::store::{FileStore, MemoryStore};
use gradebook::validate::CourseInput;

fn memory_app() -> App<MemoryStore> {
    App::load(MemoryStore::new()).expect("empty store should load")
}

fn letter_course(name: &str, credits: &str, grade: &str) -> CourseInput {
    CourseInput {
        name: name.to_string(),
        credits_choice: credits.to_string(),
        grade_choice: grade.to_string(),
        ..CourseInput::default()
    }
}

fn custom_course(name: &str, credits: &str, gpa: &str) -> CourseInput {
    CourseInput {
        name: name.to_string(),
        credits_choice: "custom".to_string(),
        custom_credits: credits.to_string(),
        grade_choice: "custom".to_string(),
        custom_grade_points: gpa.to_string(),
    }
}

#[test]
fn test_scenario_a_prior_standing_plus_letter_course() {
    let mut app = memory_app();
    app.create_student("Asha", 30.0, 10).unwrap();
    app.add_course(&letter_course("Algorithms", "4", "A")).unwrap();

    let summary = app.summary();
    assert!((summary.total_quality_points - 46.0).abs() < f64::EPSILON);
    assert_eq!(summary.total_credits, 14);
    assert!((summary.cgpa - 46.0 / 14.0).abs() < 1e-9);
}

#[test]
fn test_scenario_b_custom_course_label_and_points() {
    let mut app = memory_app();
    app.create_student("Asha", 0.0, 0).unwrap();

    let course = app.add_course(&custom_course("Seminar", "2", "3.5")).unwrap();

    assert_eq!(course.grade_label, "3.5 GPA");
    assert!((course.quality_points - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_scenario_c_validator_rejections() {
    let mut app = memory_app();
    app.create_student("Asha", 0.0, 0).unwrap();

    let err = app.add_course(&custom_course("Lab", "0", "3.0"));
    assert!(matches!(
        err,
        Err(AppError::Record(RecordError::InvalidCredits))
    ));

    let err = app.add_course(&custom_course("Lab", "2", "4.5"));
    assert!(matches!(
        err,
        Err(AppError::Record(RecordError::InvalidGrade))
    ));

    // Nothing landed in the ledger
    assert!(app.active_student().unwrap().courses.is_empty());
}

#[test]
fn test_scenario_d_deleting_active_student_zeroes_aggregate() {
    let mut app = memory_app();
    let student = app.create_student("Asha", 30.0, 10).unwrap();
    app.add_course(&letter_course("Algorithms", "4", "A")).unwrap();

    app.delete_student(&student.id).unwrap();

    assert!(app.active_student().is_none());
    assert_eq!(app.summary(), Summary::default());
}

#[test]
fn test_quality_points_are_exact_products() {
    let mut app = memory_app();
    app.create_student("Asha", 0.0, 0).unwrap();

    for (credits, grade) in [("1", "A-"), ("3", "B+"), ("4", "C"), ("2", "F")] {
        let course = app.add_course(&letter_course("Course", credits, grade)).unwrap();
        let expected = f64::from(course.credits) * course.grade_points;
        assert!((course.quality_points - expected).abs() < f64::EPSILON);
    }
}

#[test]
fn test_second_remove_reports_not_found() {
    let mut app = memory_app();
    app.create_student("Asha", 0.0, 0).unwrap();
    let course = app.add_course(&letter_course("Algorithms", "4", "A")).unwrap();

    app.delete_course(&course.id).unwrap();
    let err = app.delete_course(&course.id);
    assert!(matches!(
        err,
        Err(AppError::Record(RecordError::NotFound(_)))
    ));
}

#[test]
fn test_clear_on_empty_ledger_is_a_no_op() {
    let mut app = memory_app();
    app.create_student("Asha", 0.0, 0).unwrap();

    app.clear_all_courses().unwrap();
    app.clear_all_courses().unwrap();
    assert!(app.active_student().unwrap().courses.is_empty());
}

#[test]
fn test_selection_and_edits_survive_process_restart() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let course_id = {
        let store = FileStore::open(temp.path()).unwrap();
        let mut app = App::load(store).unwrap();
        app.create_student("Asha", 0.0, 0).unwrap();
        let course = app.add_course(&letter_course("Algorithms", "4", "A")).unwrap();
        course.id
    };

    // A second invocation picks up the same selection and records
    let store = FileStore::open(temp.path()).unwrap();
    let mut app = App::load(store).unwrap();

    let active = app.active_student().expect("selection should persist");
    assert_eq!(active.name, "Asha");
    assert_eq!(active.courses.len(), 1);

    let edited = app
        .edit_course(&course_id, &letter_course("Algorithms", "3", "B"))
        .unwrap();
    assert!((edited.quality_points - 9.0).abs() < f64::EPSILON);

    // And a third sees the edit
    let store = FileStore::open(temp.path()).unwrap();
    let app = App::load(store).unwrap();
    let summary = app.summary();
    assert_eq!(summary.total_credits, 3);
    assert!((summary.total_quality_points - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_theme_preference_survives_restart() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    {
        let store = FileStore::open(temp.path()).unwrap();
        let mut app = App::load(store).unwrap();
        assert_eq!(app.theme(), Theme::Dark);
        app.toggle_theme().unwrap();
    }

    let store = FileStore::open(temp.path()).unwrap();
    let app = App::load(store).unwrap();
    assert_eq!(app.theme(), Theme::Light);
}

#[test]
fn test_deselect_then_summary_is_zero_triple() {
    let mut app = memory_app();
    app.create_student("Asha", 30.0, 10).unwrap();

    app.deselect().unwrap();

    assert!(app.active_student().is_none());
    assert_eq!(app.summary(), Summary::default());

    // The student still exists and can be re-selected
    let id = app.directory().students[0].id.clone();
    assert!(app.select_student(&id).unwrap().is_some());
    assert_eq!(app.summary().total_credits, 10);
}

#[test]
fn test_students_are_isolated() {
    let mut app = memory_app();
    app.create_student("Asha", 0.0, 0).unwrap();
    app.add_course(&letter_course("Algorithms", "4", "A")).unwrap();

    // Creating Ben makes him active; his ledger starts empty
    app.create_student("Ben", 0.0, 0).unwrap();
    assert!(app.active_student().unwrap().courses.is_empty());
    app.add_course(&letter_course("Pottery", "1", "B")).unwrap();

    let asha = &app.directory().students[0];
    let ben = &app.directory().students[1];
    assert_eq!(asha.courses.len(), 1);
    assert_eq!(ben.courses.len(), 1);
    assert_ne!(asha.courses[0].id, ben.courses[0].id);
}
