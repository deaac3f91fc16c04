//! Schedule (solution) model.
//!
//! A valid schedule picks exactly one section per requested course such
//! that no two of the chosen meeting intervals conflict. Sections appear in
//! the course-processing order of the search that produced it.

use serde::{Deserialize, Serialize};

use super::{CourseId, Crn, MeetingInterval};

/// One section chosen for one course, together with all its meeting times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenSection {
    /// Course the section was chosen for.
    pub course: CourseId,
    /// Chosen section.
    pub crn: Crn,
    /// Every weekly meeting of the section.
    pub intervals: Vec<MeetingInterval>,
}

impl ChosenSection {
    /// Creates a chosen section.
    pub fn new(course: impl Into<CourseId>, crn: Crn, intervals: Vec<MeetingInterval>) -> Self {
        Self {
            course: course.into(),
            crn,
            intervals,
        }
    }
}

/// A complete, conflict-free timetable.
///
/// Section metadata is not copied; resolve it through the catalog snapshot
/// the schedule was generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidSchedule {
    /// Chosen sections in course-processing order.
    pub sections: Vec<ChosenSection>,
}

impl ValidSchedule {
    /// Creates a schedule from chosen sections.
    pub fn new(sections: Vec<ChosenSection>) -> Self {
        Self { sections }
    }

    /// The empty schedule (valid for an empty request).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Chosen CRNs in course-processing order.
    pub fn crns(&self) -> Vec<Crn> {
        self.sections.iter().map(|s| s.crn).collect()
    }

    /// All meeting intervals, flattened in course-processing order.
    pub fn intervals(&self) -> impl Iterator<Item = &MeetingInterval> {
        self.sections.iter().flat_map(|s| s.intervals.iter())
    }

    /// Chosen section for a course, if the course is part of this schedule.
    pub fn section_for(&self, course: &str) -> Option<&ChosenSection> {
        self.sections.iter().find(|s| s.course == course)
    }

    /// Number of chosen sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section was chosen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidSchedule {
        ValidSchedule::new(vec![
            ChosenSection::new(
                "CS-1114",
                Crn(101),
                vec![
                    MeetingInterval::parse("MW", "09:00", "09:50").unwrap(),
                    MeetingInterval::parse("F", "14:00", "15:50").unwrap(),
                ],
            ),
            ChosenSection::new(
                "MATH-1226",
                Crn(205),
                vec![MeetingInterval::parse("TR", "11:00", "12:15").unwrap()],
            ),
        ])
    }

    #[test]
    fn test_schedule_accessors() {
        let s = sample();
        assert_eq!(s.len(), 2);
        assert_eq!(s.crns(), vec![Crn(101), Crn(205)]);
        assert_eq!(s.intervals().count(), 3);
        assert_eq!(s.section_for("MATH-1226").map(|c| c.crn), Some(Crn(205)));
        assert!(s.section_for("PHYS-2305").is_none());
    }

    #[test]
    fn test_empty_schedule() {
        let s = ValidSchedule::empty();
        assert!(s.is_empty());
        assert_eq!(s.intervals().count(), 0);
    }
}
