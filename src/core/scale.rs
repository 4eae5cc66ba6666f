//! Grading scale: letter grades and their grade-point values
//!
//! A single canonical table drives both lookup directions; there is no second
//! independently maintained map.

/// The standard 4.0 grading scale, ordered best to worst.
pub const GRADE_SCALE: [(&str, f64); 11] = [
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

/// Look up the grade-point value for a letter grade.
///
/// Returns `None` for letters outside the scale. Callers decide how to treat
/// that; the course validator reports it as an invalid grade.
#[must_use]
pub fn points_for_letter(letter: &str) -> Option<f64> {
    GRADE_SCALE
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|&(_, points)| points)
}

/// Render a display label for a grade-point value.
///
/// Values on the fixed scale render as `"A (4.0)"`; anything else renders as
/// the bare number.
#[must_use]
pub fn label_for_points(points: f64) -> String {
    GRADE_SCALE
        .iter()
        .find(|(_, p)| (p - points).abs() < f64::EPSILON)
        .map_or_else(
            || points.to_string(),
            |(letter, p)| format!("{letter} ({p:.1})"),
        )
}

/// Whether a string is one of the fixed letter grades.
#[must_use]
pub fn is_letter(grade: &str) -> bool {
    GRADE_SCALE.iter().any(|(l, _)| *l == grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_known_letters() {
        assert_eq!(points_for_letter("A"), Some(4.0));
        assert_eq!(points_for_letter("A-"), Some(3.7));
        assert_eq!(points_for_letter("B+"), Some(3.3));
        assert_eq!(points_for_letter("F"), Some(0.0));
    }

    #[test]
    fn test_points_for_unknown_letter() {
        assert_eq!(points_for_letter("E"), None);
        assert_eq!(points_for_letter(""), None);
        assert_eq!(points_for_letter("a"), None);
    }

    #[test]
    fn test_scale_is_a_strict_inverse() {
        // Each letter maps to exactly one point value and vice versa
        for (letter, points) in GRADE_SCALE {
            assert_eq!(points_for_letter(letter), Some(points));
            assert_eq!(label_for_points(points), format!("{letter} ({points:.1})"));
        }
    }

    #[test]
    fn test_label_for_off_scale_points() {
        assert_eq!(label_for_points(3.5), "3.5");
    }

    #[test]
    fn test_is_letter() {
        assert!(is_letter("B-"));
        assert!(!is_letter("custom"));
    }
}
