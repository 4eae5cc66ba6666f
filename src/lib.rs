//! Shared library for `gradebook`
//! Contains the UI-free record-tracking core used by the CLI

pub mod core;

pub use crate::core::*;
