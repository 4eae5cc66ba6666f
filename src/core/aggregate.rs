//! CGPA aggregation
//!
//! A pure fold over prior standing plus the course ledger. No rounding
//! happens here; display precision is the presentation layer's call.

use serde::{Deserialize, Serialize};

use crate::core::models::Student;

/// Derived totals for one student (or the zero triple when none is selected)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Prior quality points plus quality points from every course
    pub total_quality_points: f64,
    /// Prior credits plus credits from every course
    pub total_credits: u32,
    /// `total_quality_points / total_credits`, or 0.0 when no credits exist
    pub cgpa: f64,
}

/// Aggregate a student's standing into totals and a cumulative GPA.
#[must_use]
pub fn aggregate(student: &Student) -> Summary {
    let total_quality_points = student.prior_quality_points
        + student
            .courses
            .iter()
            .map(|c| c.quality_points)
            .sum::<f64>();
    let total_credits = student.prior_credits + student.courses.iter().map(|c| c.credits).sum::<u32>();

    let cgpa = if total_credits > 0 {
        total_quality_points / f64::from(total_credits)
    } else {
        0.0
    };

    Summary {
        total_quality_points,
        total_credits,
        cgpa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::CourseFields;

    fn fields(credits: u32, grade_points: f64) -> CourseFields {
        CourseFields {
            name: "Course".to_string(),
            credits,
            grade_label: "A".to_string(),
            grade_points,
            quality_points: f64::from(credits) * grade_points,
        }
    }

    #[test]
    fn test_fresh_student_aggregates_to_zero() {
        let student = Student::new("Asha".to_string(), 0.0, 0);
        let summary = aggregate(&student);

        assert_eq!(summary, Summary::default());
        assert!((summary.cgpa - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prior_standing_plus_courses() {
        // Scenario: prior 30 QP over 10 credits, then a 4-credit A
        let mut student = Student::new("Asha".to_string(), 30.0, 10);
        student.add_course(fields(4, 4.0));

        let summary = aggregate(&student);
        assert!((summary.total_quality_points - 46.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_credits, 14);
        assert!((summary.cgpa - 46.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_prior_credits_without_quality_points() {
        let student = Student::new("Asha".to_string(), 0.0, 12);
        let summary = aggregate(&student);

        assert_eq!(summary.total_credits, 12);
        assert!((summary.cgpa - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_is_pure() {
        let mut student = Student::new("Asha".to_string(), 15.0, 5);
        student.add_course(fields(3, 3.7));

        let first = aggregate(&student);
        let second = aggregate(&student);
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut forward = Student::new("A".to_string(), 0.0, 0);
        forward.add_course(fields(3, 4.0));
        forward.add_course(fields(4, 2.0));

        let mut reverse = Student::new("B".to_string(), 0.0, 0);
        reverse.add_course(fields(4, 2.0));
        reverse.add_course(fields(3, 4.0));

        assert_eq!(aggregate(&forward), aggregate(&reverse));
    }
}
