//! Error types for record validation and ledger operations

use thiserror::Error;

/// Errors produced while validating or mutating student records.
///
/// All variants are recoverable: the caller re-submits corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A name was empty after trimming whitespace.
    #[error("a name is required")]
    MissingName,

    /// No grade selection was made.
    #[error("a grade is required")]
    MissingGrade,

    /// Custom credits did not parse as an integer of at least 1.
    #[error("credits must be a whole number of at least 1")]
    InvalidCredits,

    /// The grade was not a known letter, or custom grade points fell outside 0.0-4.0.
    #[error("grade must be a letter on the scale or a number between 0.0 and 4.0")]
    InvalidGrade,

    /// An update/remove targeted an id that does not exist.
    #[error("no record found with id '{0}'")]
    NotFound(String),
}
