//! Theme command handler

use gradebook::app::App;
use gradebook::store::KvStore;

/// Flip the persisted theme preference.
pub fn run<S: KvStore>(app: &mut App<S>) {
    match app.toggle_theme() {
        Ok(theme) => println!("✓ Theme set to {}", theme.as_str()),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
