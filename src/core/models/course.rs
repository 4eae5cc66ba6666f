//! Course record model

use serde::{Deserialize, Serialize};

use crate::core::validate::CourseFields;

/// A single graded course belonging to one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque unique identifier, assigned at creation and immutable
    pub id: String,

    /// Course name (e.g., "Algorithms")
    pub name: String,

    /// Credit load
    pub credits: u32,

    /// Display label: a letter grade, or `"<points> GPA"` for custom entries.
    /// May be absent in records written by older versions; display layers
    /// derive a label from `grade_points` when empty.
    #[serde(default)]
    pub grade_label: String,

    /// Grade-point value in [0.0, 4.0]
    pub grade_points: f64,

    /// Quality points earned: always `credits * grade_points`
    pub quality_points: f64,
}

impl Course {
    /// Build a course from validated fields under a fresh id.
    #[must_use]
    pub fn from_fields(id: String, fields: CourseFields) -> Self {
        Self {
            id,
            name: fields.name,
            credits: fields.credits,
            grade_label: fields.grade_label,
            grade_points: fields.grade_points,
            quality_points: fields.quality_points,
        }
    }

    /// Overwrite everything but the id with new validated fields.
    ///
    /// Quality points arrive recomputed from the new credits and grade; they
    /// are never carried over from the previous entry.
    pub fn apply_fields(&mut self, fields: CourseFields) {
        self.name = fields.name;
        self.credits = fields.credits;
        self.grade_label = fields.grade_label;
        self.grade_points = fields.grade_points;
        self.quality_points = fields.quality_points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, credits: u32, grade_points: f64, label: &str) -> CourseFields {
        CourseFields {
            name: name.to_string(),
            credits,
            grade_label: label.to_string(),
            grade_points,
            quality_points: f64::from(credits) * grade_points,
        }
    }

    #[test]
    fn test_course_from_fields() {
        let course = Course::from_fields("c1".to_string(), fields("Algorithms", 4, 4.0, "A"));

        assert_eq!(course.id, "c1");
        assert_eq!(course.name, "Algorithms");
        assert_eq!(course.credits, 4);
        assert_eq!(course.grade_label, "A");
        assert!((course.quality_points - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_fields_preserves_id() {
        let mut course = Course::from_fields("c1".to_string(), fields("Algorithms", 4, 4.0, "A"));
        course.apply_fields(fields("Algorithms II", 3, 3.0, "B"));

        assert_eq!(course.id, "c1");
        assert_eq!(course.name, "Algorithms II");
        assert_eq!(course.credits, 3);
        assert!((course.quality_points - 9.0).abs() < f64::EPSILON);
    }
}
