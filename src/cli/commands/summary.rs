//! Summary command handler

use gradebook::app::App;
use gradebook::store::KvStore;

/// Print totals and cumulative GPA for the active student.
///
/// The core never rounds; the 1dp/3dp formatting here is presentation only.
pub fn run<S: KvStore>(app: &App<S>) {
    let summary = app.summary();

    match app.active_student() {
        Some(student) => println!("Summary for '{}':", student.name),
        None => println!("No student selected."),
    }

    println!("  Quality points: {:.1}", summary.total_quality_points);
    println!("  Credits:        {}", summary.total_credits);
    println!("  CGPA:           {:.3}", summary.cgpa);
}
