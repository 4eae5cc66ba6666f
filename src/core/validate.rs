//! Course record validation
//!
//! Raw user input arrives as strings: a name, a credits choice, a grade
//! choice, and free-form custom values used when either choice is `"custom"`.
//! Validation normalizes that into [`CourseFields`] before any ledger
//! mutation; nothing malformed ever reaches a student's ledger.

use serde::{Deserialize, Serialize};

use crate::core::error::RecordError;
use crate::core::scale;

/// The choice value that routes to the free-form custom inputs.
pub const CUSTOM_CHOICE: &str = "custom";

/// Raw, unvalidated course input as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    /// Course name
    pub name: String,
    /// Credits choice: a positive integer as a string, or `"custom"`
    pub credits_choice: String,
    /// Free-form credits, consulted when `credits_choice` is `"custom"`
    pub custom_credits: String,
    /// Grade choice: a letter grade, or `"custom"`; empty means no selection
    pub grade_choice: String,
    /// Free-form grade points, consulted when `grade_choice` is `"custom"`
    pub custom_grade_points: String,
}

/// Validated, normalized course fields ready to enter a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseFields {
    /// Trimmed course name
    pub name: String,
    /// Credit load
    pub credits: u32,
    /// Display label: the letter grade, or `"<points> GPA"` for custom entries
    pub grade_label: String,
    /// Grade-point value in [0.0, 4.0]
    pub grade_points: f64,
    /// `credits * grade_points`
    pub quality_points: f64,
}

/// Validate raw course input.
///
/// Rules, in order: non-empty name, non-empty grade selection, credits
/// resolve to an integer >= 1, grade points resolve to a value in
/// [0.0, 4.0]. An unrecognized letter grade is reported as an invalid
/// grade rather than silently scoring 0.0.
///
/// # Errors
///
/// Returns the first [`RecordError`] encountered, in rule order.
pub fn validate(input: &CourseInput) -> Result<CourseFields, RecordError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(RecordError::MissingName);
    }

    if input.grade_choice.is_empty() {
        return Err(RecordError::MissingGrade);
    }

    let credits = resolve_credits(&input.credits_choice, &input.custom_credits)?;
    let (grade_label, grade_points) =
        resolve_grade(&input.grade_choice, &input.custom_grade_points)?;

    Ok(CourseFields {
        name: name.to_string(),
        credits,
        grade_label,
        grade_points,
        quality_points: f64::from(credits) * grade_points,
    })
}

/// Resolve the credit load from either the enumerated choice or the custom field.
fn resolve_credits(choice: &str, custom: &str) -> Result<u32, RecordError> {
    let raw = if choice == CUSTOM_CHOICE { custom } else { choice };
    match raw.trim().parse::<u32>() {
        Ok(credits) if credits >= 1 => Ok(credits),
        _ => Err(RecordError::InvalidCredits),
    }
}

/// Resolve the grade label and point value from either a letter or the custom field.
fn resolve_grade(choice: &str, custom: &str) -> Result<(String, f64), RecordError> {
    if choice == CUSTOM_CHOICE {
        let points = custom
            .trim()
            .parse::<f64>()
            .map_err(|_| RecordError::InvalidGrade)?;
        if !(0.0..=4.0).contains(&points) {
            return Err(RecordError::InvalidGrade);
        }
        Ok((format!("{points:.1} GPA"), points))
    } else {
        let points = scale::points_for_letter(choice).ok_or(RecordError::InvalidGrade)?;
        Ok((choice.to_string(), points))
    }
}
