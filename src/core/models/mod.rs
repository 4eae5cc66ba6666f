//! Data models for `gradebook`

pub mod course;
pub mod directory;
pub mod student;

pub use course::Course;
pub use directory::Directory;
pub use student::Student;
