//! Application state and intent dispatch
//!
//! One explicit state object owns the directory, the theme, and the store.
//! Every user intent maps onto exactly one method here; each mutating intent
//! validates first, mutates second, and persists the full snapshot last, so
//! no intermediate inconsistent state is ever observable in storage.

use thiserror::Error;

use crate::core::aggregate::{self, Summary};
use crate::core::error::RecordError;
use crate::core::models::{Course, Directory, Student};
use crate::core::store::{self, KvStore, StoreError, KEY_ACTIVE, KEY_THEME};
use crate::core::validate::{self, CourseInput};

/// Color scheme preference, persisted as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme
    Light,
    /// Dark scheme (the default when nothing is stored)
    #[default]
    Dark,
}

impl Theme {
    /// The wire value stored under the theme key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `"light"` is treated as dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Errors surfaced to the presentation layer
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation or record lookup failed; re-submit corrected input
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The persistence boundary failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A course intent arrived with no student selected
    #[error("no student is selected")]
    NoStudentSelected,
}

/// The application state: directory, theme, and the store they persist to.
#[derive(Debug)]
pub struct App<S: KvStore> {
    directory: Directory,
    theme: Theme,
    store: S,
}

impl<S: KvStore> App<S> {
    /// Load application state from the store.
    ///
    /// A store with no student blob yields an empty directory. A stored
    /// active id that no longer resolves is dropped silently.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if stored records exist but cannot be parsed.
    pub fn load(store: S) -> Result<Self, AppError> {
        let mut directory = store::load_students(&store)?;
        if let Some(active_id) = store.get(KEY_ACTIVE) {
            directory.select_student(&active_id);
        }
        let theme = Theme::from_stored(store.get(KEY_THEME).as_deref());

        Ok(Self {
            directory,
            theme,
            store,
        })
    }

    /// The directory, for listing and lookups.
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The current theme preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// The active student, if any.
    #[must_use]
    pub fn active_student(&self) -> Option<&Student> {
        self.directory.active_student()
    }

    /// Aggregate totals for the active student, or the zero triple when
    /// nothing is selected.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.directory
            .active_student()
            .map_or_else(Summary::default, aggregate::aggregate)
    }

    /// Register a new student and make it the active selection.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on a blank name or a failed write.
    pub fn create_student(
        &mut self,
        name: &str,
        prior_quality_points: f64,
        prior_credits: u32,
    ) -> Result<Student, AppError> {
        let student = self
            .directory
            .create_student(name, prior_quality_points, prior_credits)?
            .clone();
        self.persist()?;
        Ok(student)
    }

    /// Set the active selection. An unknown id clears it.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the selection cannot be persisted.
    pub fn select_student(&mut self, student_id: &str) -> Result<Option<Student>, AppError> {
        let selected = self.directory.select_student(student_id).cloned();
        self.persist_selection()?;
        Ok(selected)
    }

    /// Clear the active selection.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the selection cannot be persisted.
    pub fn deselect(&mut self) -> Result<(), AppError> {
        self.directory.deselect();
        self.persist_selection()?;
        Ok(())
    }

    /// Remove a student and its entire ledger, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on an unknown id or a failed write.
    pub fn delete_student(&mut self, student_id: &str) -> Result<Student, AppError> {
        let removed = self.directory.delete_student(student_id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Validate course input and append it to the active student's ledger.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on invalid input, no selection, or a failed write.
    pub fn add_course(&mut self, input: &CourseInput) -> Result<Course, AppError> {
        let fields = validate::validate(input)?;
        let student = self
            .directory
            .active_student_mut()
            .ok_or(AppError::NoStudentSelected)?;
        let course = student.add_course(fields);
        self.persist()?;
        Ok(course)
    }

    /// Validate course input and overwrite an existing course by id.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on invalid input, an unknown id, no selection,
    /// or a failed write.
    pub fn edit_course(&mut self, course_id: &str, input: &CourseInput) -> Result<Course, AppError> {
        let fields = validate::validate(input)?;
        let student = self
            .directory
            .active_student_mut()
            .ok_or(AppError::NoStudentSelected)?;
        let course = student.update_course(course_id, fields)?.clone();
        self.persist()?;
        Ok(course)
    }

    /// Delete a course from the active student's ledger.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on an unknown id, no selection, or a failed write.
    pub fn delete_course(&mut self, course_id: &str) -> Result<(), AppError> {
        let student = self
            .directory
            .active_student_mut()
            .ok_or(AppError::NoStudentSelected)?;
        student.remove_course(course_id)?;
        self.persist()?;
        Ok(())
    }

    /// Empty the active student's ledger.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] on no selection or a failed write.
    pub fn clear_all_courses(&mut self) -> Result<(), AppError> {
        let student = self
            .directory
            .active_student_mut()
            .ok_or(AppError::NoStudentSelected)?;
        student.clear_courses();
        self.persist()?;
        Ok(())
    }

    /// Flip the theme preference and persist it.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the preference cannot be persisted.
    pub fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        self.theme = self.theme.toggled();
        self.store.set(KEY_THEME, self.theme.as_str())?;
        Ok(self.theme)
    }

    /// Write the full directory snapshot and the active selection.
    fn persist(&mut self) -> Result<(), AppError> {
        store::save_students(&mut self.store, &self.directory)?;
        self.persist_selection()
    }

    /// Write just the active selection marker.
    fn persist_selection(&mut self) -> Result<(), AppError> {
        let active = self.directory.active.clone().unwrap_or_default();
        self.store.set(KEY_ACTIVE, &active)?;
        Ok(())
    }
}
