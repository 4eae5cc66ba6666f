//! Student command handler

use logger::info;

use crate::args::StudentSubcommand;
use gradebook::app::App;
use gradebook::store::KvStore;

/// Dispatch student subcommands
pub fn run<S: KvStore>(subcommand: StudentSubcommand, app: &mut App<S>) {
    match subcommand {
        StudentSubcommand::Add {
            name,
            quality_points,
            credits,
        } => handle_add(app, &name, quality_points, credits),
        StudentSubcommand::List => handle_list(app),
        StudentSubcommand::Select { id } => handle_select(app, &id),
        StudentSubcommand::Deselect => handle_deselect(app),
        StudentSubcommand::Remove { id } => handle_remove(app, &id),
    }
}

fn handle_add<S: KvStore>(app: &mut App<S>, name: &str, quality_points: f64, credits: u32) {
    if quality_points < 0.0 {
        eprintln!("✗ Prior quality points cannot be negative.");
        std::process::exit(1);
    }

    match app.create_student(name, quality_points, credits) {
        Ok(student) => {
            info!("Student created: {} ({})", student.name, student.id);
            println!("✓ Added student '{}' (id {})", student.name, student.id);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_list<S: KvStore>(app: &App<S>) {
    let directory = app.directory();
    if directory.students.is_empty() {
        println!("No students registered yet. Use `student add` to get started.");
        return;
    }

    for student in &directory.students {
        let marker = if directory.active.as_deref() == Some(student.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {}  {}  ({} courses)",
            student.id,
            student.name,
            student.courses.len()
        );
    }
}

fn handle_select<S: KvStore>(app: &mut App<S>, id: &str) {
    match app.select_student(id) {
        Ok(Some(student)) => println!("✓ Selected '{}'", student.name),
        Ok(None) => {
            eprintln!("✗ No student with id '{id}'; selection cleared.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_deselect<S: KvStore>(app: &mut App<S>) {
    if let Err(e) = app.deselect() {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ Selection cleared");
}

fn handle_remove<S: KvStore>(app: &mut App<S>, id: &str) {
    match app.delete_student(id) {
        Ok(removed) => {
            info!("Student removed: {} ({})", removed.name, removed.id);
            println!(
                "✓ Removed student '{}' and {} course(s)",
                removed.name,
                removed.courses.len()
            );
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
