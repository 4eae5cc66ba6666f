//! Course command handler

use logger::info;

use crate::args::CourseSubcommand;
use gradebook::app::App;
use gradebook::scale;
use gradebook::store::KvStore;
use gradebook::validate::CourseInput;

/// Dispatch course subcommands
pub fn run<S: KvStore>(subcommand: CourseSubcommand, app: &mut App<S>) {
    match subcommand {
        CourseSubcommand::Add {
            name,
            credits,
            custom_credits,
            grade,
            custom_gpa,
        } => handle_add(
            app,
            &course_input(name, credits, custom_credits, grade, custom_gpa),
        ),
        CourseSubcommand::Edit {
            id,
            name,
            credits,
            custom_credits,
            grade,
            custom_gpa,
        } => handle_edit(
            app,
            &id,
            &course_input(name, credits, custom_credits, grade, custom_gpa),
        ),
        CourseSubcommand::List => handle_list(app),
        CourseSubcommand::Remove { id } => handle_remove(app, &id),
        CourseSubcommand::Clear => handle_clear(app),
    }
}

fn course_input(
    name: String,
    credits_choice: String,
    custom_credits: String,
    grade_choice: String,
    custom_grade_points: String,
) -> CourseInput {
    CourseInput {
        name,
        credits_choice,
        custom_credits,
        grade_choice,
        custom_grade_points,
    }
}

fn handle_add<S: KvStore>(app: &mut App<S>, input: &CourseInput) {
    match app.add_course(input) {
        Ok(course) => {
            info!("Course added: {} ({})", course.name, course.id);
            println!(
                "✓ Added '{}': {} credits, {} ({:.1} quality points)",
                course.name, course.credits, course.grade_label, course.quality_points
            );
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_edit<S: KvStore>(app: &mut App<S>, id: &str, input: &CourseInput) {
    match app.edit_course(id, input) {
        Ok(course) => {
            info!("Course updated: {} ({})", course.name, course.id);
            println!(
                "✓ Updated '{}': {} credits, {} ({:.1} quality points)",
                course.name, course.credits, course.grade_label, course.quality_points
            );
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_list<S: KvStore>(app: &App<S>) {
    let Some(student) = app.active_student() else {
        eprintln!("✗ No student is selected. Use `student select` first.");
        std::process::exit(1);
    };

    if student.courses.is_empty() {
        println!("No courses added yet for '{}'.", student.name);
        return;
    }

    println!("Courses for '{}':", student.name);
    for course in &student.courses {
        // Records written by older versions may lack a label; derive one
        let label = if course.grade_label.is_empty() {
            scale::label_for_points(course.grade_points)
        } else {
            course.grade_label.clone()
        };
        println!(
            "  {}  {}  {} credits  {}  {:.1} QP",
            course.id, course.name, course.credits, label, course.quality_points
        );
    }
}

fn handle_remove<S: KvStore>(app: &mut App<S>, id: &str) {
    match app.delete_course(id) {
        Ok(()) => println!("✓ Removed course {id}"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_clear<S: KvStore>(app: &mut App<S>) {
    match app.clear_all_courses() {
        Ok(()) => println!("✓ Cleared all courses"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
