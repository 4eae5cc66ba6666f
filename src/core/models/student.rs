//! Student model and the course ledger it owns

use serde::{Deserialize, Serialize};

use crate::core::error::RecordError;
use crate::core::id;
use crate::core::models::Course;
use crate::core::validate::CourseFields;

/// A student with prior standing and an insertion-ordered course ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Opaque unique identifier, assigned at creation and immutable
    pub id: String,

    /// Student name
    pub name: String,

    /// Quality points accumulated before this tool was used (e.g., transfer credit)
    pub prior_quality_points: f64,

    /// Credits accumulated before this tool was used
    pub prior_credits: u32,

    /// The course ledger, in insertion order
    pub courses: Vec<Course>,
}

impl Student {
    /// Create a student with an empty ledger.
    #[must_use]
    pub fn new(name: String, prior_quality_points: f64, prior_credits: u32) -> Self {
        Self {
            id: id::next_id(),
            name,
            prior_quality_points,
            prior_credits,
            courses: Vec::new(),
        }
    }

    /// Append a new course to the end of the ledger, returning a copy of it.
    pub fn add_course(&mut self, fields: CourseFields) -> Course {
        let course = Course::from_fields(id::next_id(), fields);
        self.courses.push(course.clone());
        course
    }

    /// Replace the fields of the course with this id, preserving its position.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotFound`] if no course has this id.
    pub fn update_course(&mut self, course_id: &str, fields: CourseFields) -> Result<&Course, RecordError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| RecordError::NotFound(course_id.to_string()))?;
        course.apply_fields(fields);
        Ok(course)
    }

    /// Delete the course with this id.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotFound`] if no course has this id.
    pub fn remove_course(&mut self, course_id: &str) -> Result<(), RecordError> {
        let index = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| RecordError::NotFound(course_id.to_string()))?;
        self.courses.remove(index);
        Ok(())
    }

    /// Empty the ledger in one operation.
    pub fn clear_courses(&mut self) {
        self.courses.clear();
    }

    /// Look up a course by id.
    #[must_use]
    pub fn get_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }
}
