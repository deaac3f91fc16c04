//! In-memory catalog source.

use std::collections::{BTreeSet, HashSet};

use super::{CatalogSource, MeetingTime};
use crate::error::CatalogError;
use crate::models::{CourseId, Crn, MeetingInterval, Section};

/// A catalog held in memory.
///
/// Used for embedding, tests, and as the backing store of [`JsonCatalog`](super::JsonCatalog).
/// Records are returned in insertion order.
///
/// # Example
/// ```
/// use u_timetable::catalog::InMemoryCatalog;
/// use u_timetable::models::{Crn, MeetingInterval, Section};
///
/// let catalog = InMemoryCatalog::new()
///     .with_section(Section::new(101, "CS-1114"))
///     .with_meeting(Crn(101), MeetingInterval::parse("MWF", "09:00", "09:50").unwrap());
/// assert_eq!(catalog.sections().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    sections: Vec<Section>,
    meeting_times: Vec<MeetingTime>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from records.
    pub fn from_records(sections: Vec<Section>, meeting_times: Vec<MeetingTime>) -> Self {
        Self {
            sections,
            meeting_times,
        }
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Adds a meeting time for a section.
    pub fn with_meeting(mut self, crn: Crn, interval: MeetingInterval) -> Self {
        self.meeting_times.push(MeetingTime::new(crn, interval));
        self
    }

    /// Adds a section together with its meeting times.
    pub fn with_section_meetings(
        mut self,
        section: Section,
        intervals: impl IntoIterator<Item = MeetingInterval>,
    ) -> Self {
        let crn = section.crn;
        self.sections.push(section);
        self.meeting_times
            .extend(intervals.into_iter().map(|iv| MeetingTime::new(crn, iv)));
        self
    }

    /// All sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All meeting times.
    pub fn meeting_times(&self) -> &[MeetingTime] {
        &self.meeting_times
    }
}

impl CatalogSource for InMemoryCatalog {
    fn fetch_sections(&self, courses: &BTreeSet<CourseId>) -> Result<Vec<Section>, CatalogError> {
        Ok(self
            .sections
            .iter()
            .filter(|s| courses.contains(&s.course))
            .cloned()
            .collect())
    }

    fn fetch_meeting_times(&self, crns: &[Crn]) -> Result<Vec<MeetingTime>, CatalogError> {
        let wanted: HashSet<Crn> = crns.iter().copied().collect();
        Ok(self
            .meeting_times
            .iter()
            .filter(|m| wanted.contains(&m.crn))
            .cloned()
            .collect())
    }
}
