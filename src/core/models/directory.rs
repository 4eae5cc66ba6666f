//! Student directory: the keyed collection of all students

use serde::{Deserialize, Serialize};

use crate::core::error::RecordError;
use crate::core::models::Student;

/// All students, in creation order, with at most one active selection.
///
/// Students are stored as an ordered sequence rather than a map so that
/// listing order is stable and the persisted JSON stays a plain array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    /// Every registered student
    pub students: Vec<Student>,

    /// Id of the active student, if any
    #[serde(skip)]
    pub active: Option<String>,
}

impl Directory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new student and make it the active selection.
    ///
    /// Prior standing defaults to zero at the boundary when not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingName`] if the name is empty after trimming.
    pub fn create_student(
        &mut self,
        name: &str,
        prior_quality_points: f64,
        prior_credits: u32,
    ) -> Result<&Student, RecordError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecordError::MissingName);
        }

        let student = Student::new(name.to_string(), prior_quality_points, prior_credits);
        self.active = Some(student.id.clone());
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Set the active selection.
    ///
    /// An unknown id clears the selection; "no active student" is a valid state.
    pub fn select_student(&mut self, student_id: &str) -> Option<&Student> {
        let found = self.students.iter().find(|s| s.id == student_id);
        self.active = found.map(|s| s.id.clone());
        found
    }

    /// Clear the active selection.
    pub fn deselect(&mut self) {
        self.active = None;
    }

    /// Remove a student and its entire ledger.
    ///
    /// If the removed student was active, the selection becomes none.
    /// Returns the removed student so callers can report what was destroyed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotFound`] if no student has this id.
    pub fn delete_student(&mut self, student_id: &str) -> Result<Student, RecordError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == student_id)
            .ok_or_else(|| RecordError::NotFound(student_id.to_string()))?;

        if self.active.as_deref() == Some(student_id) {
            self.active = None;
        }
        Ok(self.students.remove(index))
    }

    /// Look up a student by id.
    #[must_use]
    pub fn get_student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    /// The active student, if a selection is set.
    #[must_use]
    pub fn active_student(&self) -> Option<&Student> {
        self.active
            .as_deref()
            .and_then(|active_id| self.get_student(active_id))
    }

    /// Mutable access to the active student, if a selection is set.
    pub fn active_student_mut(&mut self) -> Option<&mut Student> {
        let active_id = self.active.clone()?;
        self.students.iter_mut().find(|s| s.id == active_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_becomes_active() {
        let mut dir = Directory::new();
        let id = dir.create_student("Asha", 30.0, 10).unwrap().id.clone();

        assert_eq!(dir.students.len(), 1);
        assert_eq!(dir.active.as_deref(), Some(id.as_str()));
        assert_eq!(dir.active_student().unwrap().name, "Asha");
    }

    #[test]
    fn test_create_student_rejects_blank_name() {
        let mut dir = Directory::new();
        assert_eq!(
            dir.create_student("   ", 0.0, 0).unwrap_err(),
            RecordError::MissingName
        );
        assert!(dir.students.is_empty());
        assert!(dir.active.is_none());
    }

    #[test]
    fn test_select_unknown_id_clears_selection() {
        let mut dir = Directory::new();
        dir.create_student("Asha", 0.0, 0).unwrap();

        assert!(dir.select_student("nope").is_none());
        assert!(dir.active.is_none());
        assert!(dir.active_student().is_none());
    }

    #[test]
    fn test_delete_active_student_clears_selection() {
        let mut dir = Directory::new();
        let id = dir.create_student("Asha", 0.0, 0).unwrap().id.clone();

        let removed = dir.delete_student(&id).unwrap();
        assert_eq!(removed.name, "Asha");
        assert!(dir.active.is_none());
        assert!(dir.students.is_empty());
    }

    #[test]
    fn test_delete_inactive_student_keeps_selection() {
        let mut dir = Directory::new();
        let first = dir.create_student("Asha", 0.0, 0).unwrap().id.clone();
        let second = dir.create_student("Ben", 0.0, 0).unwrap().id.clone();

        dir.select_student(&first);
        dir.delete_student(&second).unwrap();

        assert_eq!(dir.active.as_deref(), Some(first.as_str()));
    }

    #[test]
    fn test_delete_unknown_student() {
        let mut dir = Directory::new();
        assert_eq!(
            dir.delete_student("nope").unwrap_err(),
            RecordError::NotFound("nope".to_string())
        );
    }

    #[test]
    fn test_listing_order_is_creation_order() {
        let mut dir = Directory::new();
        dir.create_student("Asha", 0.0, 0).unwrap();
        dir.create_student("Ben", 0.0, 0).unwrap();
        dir.create_student("Chen", 0.0, 0).unwrap();

        let names: Vec<&str> = dir.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Ben", "Chen"]);
    }
}
