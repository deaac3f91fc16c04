//! Input validation for catalog documents.
//!
//! Checks structural integrity of section and meeting-time records before
//! they are used. Detects:
//! - Duplicate CRNs
//! - Blank course identifiers
//! - Meeting times referencing unknown sections
//! - Unparseable day codes and clock times
//! - Empty or inverted time ranges (`begin_time >= end_time`)
//!
//! All problems are collected; validation does not stop at the first one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::json::{CatalogDocument, SectionTimeRecord};
use crate::models::{ClockTime, Crn, WeekdaySet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two sections share the same CRN.
    DuplicateCrn,
    /// A section has an empty course identifier.
    BlankCourse,
    /// A meeting time references a CRN that has no section.
    UnknownSection,
    /// A day code contains an unknown letter or no days.
    InvalidDays,
    /// A clock time could not be parsed.
    InvalidTime,
    /// A meeting time does not end after it starts.
    EmptyInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a catalog document.
///
/// Checks:
/// 1. No duplicate CRNs
/// 2. No blank course identifiers
/// 3. Every meeting time references an existing section
/// 4. Every day code parses and names at least one day
/// 5. Every begin/end time parses
/// 6. Every meeting time has `begin_time < end_time`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_document(doc: &CatalogDocument) -> ValidationResult {
    let mut errors = Vec::new();

    let mut crns: HashSet<Crn> = HashSet::new();
    for section in &doc.sections {
        if !crns.insert(section.crn) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCrn,
                format!("Duplicate section CRN: {}", section.crn),
            ));
        }
        if section.course.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankCourse,
                format!("Section {} has no course identifier", section.crn),
            ));
        }
    }

    for record in &doc.section_times {
        if !crns.contains(&record.crn) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSection,
                format!("Meeting time references unknown section {}", record.crn),
            ));
        }
        check_time_record(record, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_time_record(record: &SectionTimeRecord, errors: &mut Vec<ValidationError>) {
    match record.days.parse::<WeekdaySet>() {
        Ok(days) if days.is_empty() => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDays,
            format!("Section {} has a meeting time with no days", record.crn),
        )),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDays,
            format!("Section {} day code '{}': {e}", record.crn, record.days),
        )),
    }

    let parse = |raw: &str, errors: &mut Vec<ValidationError>| match raw.parse::<ClockTime>() {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTime,
                format!("Section {}: {e}", record.crn),
            ));
            None
        }
    };
    let begin = parse(&record.begin_time, &mut *errors);
    let end = parse(&record.end_time, &mut *errors);

    if let (Some(begin), Some(end)) = (begin, end) {
        if begin >= end {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                format!(
                    "Section {} meeting {} {}-{} does not end after it starts",
                    record.crn, record.days, begin, end
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn time(crn: u32, days: &str, begin: &str, end: &str) -> SectionTimeRecord {
        SectionTimeRecord {
            crn: Crn(crn),
            days: days.into(),
            begin_time: begin.into(),
            end_time: end.into(),
        }
    }

    fn sample_doc() -> CatalogDocument {
        CatalogDocument {
            sections: vec![Section::new(1, "CS-1114"), Section::new(2, "MATH-1226")],
            section_times: vec![
                time(1, "MWF", "09:00:00", "09:50:00"),
                time(2, "TR", "11:00", "12:15"),
            ],
        }
    }

    #[test]
    fn test_valid_document() {
        assert!(validate_document(&sample_doc()).is_ok());
    }

    #[test]
    fn test_duplicate_crn() {
        let mut doc = sample_doc();
        doc.sections.push(Section::new(1, "PHYS-2305"));
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCrn));
    }

    #[test]
    fn test_blank_course() {
        let mut doc = sample_doc();
        doc.sections.push(Section::new(3, "  "));
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankCourse));
    }

    #[test]
    fn test_unknown_section() {
        let mut doc = sample_doc();
        doc.section_times.push(time(99, "M", "08:00", "09:00"));
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSection && e.message.contains("99")));
    }

    #[test]
    fn test_invalid_days() {
        let mut doc = sample_doc();
        doc.section_times.push(time(1, "MX", "08:00", "09:00"));
        doc.section_times.push(time(1, "", "08:00", "09:00"));
        let errors = validate_document(&doc).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidDays)
                .count(),
            2
        );
    }

    #[test]
    fn test_invalid_and_inverted_times() {
        let mut doc = sample_doc();
        doc.section_times.push(time(2, "M", "8 o'clock", "09:00"));
        doc.section_times.push(time(2, "W", "10:00", "10:00"));
        doc.section_times.push(time(2, "F", "11:00", "10:00"));
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTime));
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyInterval)
                .count(),
            2
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let doc = CatalogDocument {
            sections: vec![Section::new(1, ""), Section::new(1, "A")],
            section_times: vec![time(5, "Q", "x", "y")],
        };
        let errors = validate_document(&doc).unwrap_err();
        // blank, duplicate, unknown section, bad days, two bad times
        assert_eq!(errors.len(), 6);
    }
}
