//! Core module: the record-tracking logic behind the CLI

pub mod aggregate;
pub mod app;
pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod scale;
pub mod store;
pub mod validate;

/// Returns the current version of the `gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
