//! Section (course offering) model.
//!
//! A section is one specific offering of a course, identified by its CRN
//! (course reference number). A course may have many sections; a section
//! may meet several times a week.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque course identifier naming a subject and number, e.g. `"CS-1114"`.
pub type CourseId = String;

/// Course reference number. Globally unique across a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Crn(pub u32);

impl fmt::Display for Crn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Crn {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A course section.
///
/// Metadata is carried through untouched; only `crn` and `course` take part
/// in schedule enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub crn: Crn,
    /// Owning course.
    pub course: CourseId,
    /// Section type (e.g. "Lecture", "Lab").
    #[serde(default)]
    pub class_type: String,
    /// Delivery modality (e.g. "Face-to-Face", "Online").
    #[serde(default)]
    pub modality: String,
    /// Credit hours.
    #[serde(default)]
    pub credit_hours: u8,
    /// Seat capacity.
    #[serde(default)]
    pub capacity: u32,
    /// Assigned instructor reference.
    #[serde(default)]
    pub instructor_id: Option<u32>,
    /// Room or building.
    #[serde(default)]
    pub location: String,
    /// Final exam slot code.
    #[serde(default)]
    pub exam_code: String,
}

impl Section {
    /// Creates a section with empty metadata.
    pub fn new(crn: u32, course: impl Into<CourseId>) -> Self {
        Self {
            crn: Crn(crn),
            course: course.into(),
            class_type: String::new(),
            modality: String::new(),
            credit_hours: 0,
            capacity: 0,
            instructor_id: None,
            location: String::new(),
            exam_code: String::new(),
        }
    }

    /// Sets the section type.
    pub fn with_class_type(mut self, class_type: impl Into<String>) -> Self {
        self.class_type = class_type.into();
        self
    }

    /// Sets the delivery modality.
    pub fn with_modality(mut self, modality: impl Into<String>) -> Self {
        self.modality = modality.into();
        self
    }

    /// Sets credit hours.
    pub fn with_credit_hours(mut self, credit_hours: u8) -> Self {
        self.credit_hours = credit_hours;
        self
    }

    /// Sets seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the instructor reference.
    pub fn with_instructor(mut self, instructor_id: u32) -> Self {
        self.instructor_id = Some(instructor_id);
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the exam code.
    pub fn with_exam_code(mut self, exam_code: impl Into<String>) -> Self {
        self.exam_code = exam_code.into();
        self
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.crn, self.course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let s = Section::new(10234, "CS-1114")
            .with_class_type("Lecture")
            .with_modality("Face-to-Face")
            .with_credit_hours(3)
            .with_capacity(120)
            .with_instructor(7)
            .with_location("MCB 100")
            .with_exam_code("07T");

        assert_eq!(s.crn, Crn(10234));
        assert_eq!(s.course, "CS-1114");
        assert_eq!(s.credit_hours, 3);
        assert_eq!(s.instructor_id, Some(7));
        assert_eq!(s.to_string(), "10234: CS-1114");
    }

    #[test]
    fn test_section_deserialize_minimal() {
        let s: Section = serde_json::from_str(r#"{"crn": 5, "course": "MATH-1226"}"#).unwrap();
        assert_eq!(s, Section::new(5, "MATH-1226"));
    }

    #[test]
    fn test_crn_ordering() {
        assert!(Crn(100) < Crn(200));
        assert_eq!(serde_json::to_string(&Crn(42)).unwrap(), "42");
    }
}
