//! Catalog boundary: loading sections and meeting times for a request.
//!
//! [`CatalogSource`] is the seam to external storage. [`CatalogIndex::load`]
//! queries a source for a set of courses and groups the raw records into an
//! immutable [`CatalogSnapshot`] that the enumerator reads from.
//!
//! # Guarantees of a snapshot
//! - Only sections of requested courses are present, even if the source
//!   returns more.
//! - CRNs are unique; a duplicate fails the load.
//! - Every section has an interval list (possibly empty).
//! - Iteration over sections is in ascending CRN order.

mod json;
mod memory;
mod validation;

pub use json::{CatalogDocument, JsonCatalog, SectionTimeRecord};
pub use memory::InMemoryCatalog;
pub use validation::{validate_document, ValidationError, ValidationErrorKind, ValidationResult};

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::{CourseId, Crn, MeetingInterval, Section};

/// One meeting-time record: an interval tagged with its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    /// Owning section.
    pub crn: Crn,
    /// The weekly block.
    pub interval: MeetingInterval,
}

impl MeetingTime {
    /// Creates a meeting-time record.
    pub fn new(crn: Crn, interval: MeetingInterval) -> Self {
        Self { crn, interval }
    }
}

/// Read access to a course catalog.
///
/// Implementations are connected before the first query. Retrying transient
/// failures is the implementation's concern.
pub trait CatalogSource {
    /// Sections whose course is in `courses`.
    fn fetch_sections(&self, courses: &BTreeSet<CourseId>) -> Result<Vec<Section>, CatalogError>;

    /// Meeting times of the given sections.
    fn fetch_meeting_times(&self, crns: &[Crn]) -> Result<Vec<MeetingTime>, CatalogError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn fetch_sections(&self, courses: &BTreeSet<CourseId>) -> Result<Vec<Section>, CatalogError> {
        (**self).fetch_sections(courses)
    }

    fn fetch_meeting_times(&self, crns: &[Crn]) -> Result<Vec<MeetingTime>, CatalogError> {
        (**self).fetch_meeting_times(crns)
    }
}

/// Immutable catalog data for one enumeration request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Section metadata by CRN.
    pub sections_by_id: BTreeMap<Crn, Section>,
    /// Meeting intervals by CRN, in source order.
    pub intervals_by_section: BTreeMap<Crn, Vec<MeetingInterval>>,
}

impl CatalogSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot directly from sections and meeting times.
    ///
    /// Meeting times for CRNs not among `sections` are dropped.
    pub fn from_records(
        sections: impl IntoIterator<Item = Section>,
        meeting_times: impl IntoIterator<Item = MeetingTime>,
    ) -> Result<Self, CatalogError> {
        let mut snapshot = Self::new();
        for section in sections {
            let crn = section.crn;
            if snapshot.sections_by_id.insert(crn, section).is_some() {
                return Err(CatalogError::DuplicateCrn(crn));
            }
            snapshot.intervals_by_section.insert(crn, Vec::new());
        }
        for record in meeting_times {
            if let Some(intervals) = snapshot.intervals_by_section.get_mut(&record.crn) {
                intervals.push(record.interval);
            }
        }
        Ok(snapshot)
    }

    /// Sections of `course`, ascending by CRN.
    pub fn sections_of<'a>(&'a self, course: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections_by_id.values().filter(move |s| s.course == course)
    }

    /// Meeting intervals of a section (empty if unknown).
    pub fn intervals_of(&self, crn: Crn) -> &[MeetingInterval] {
        self.intervals_by_section
            .get(&crn)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Section metadata by CRN.
    pub fn section(&self, crn: Crn) -> Option<&Section> {
        self.sections_by_id.get(&crn)
    }

    /// Distinct course ids present, sorted.
    pub fn course_ids(&self) -> BTreeSet<&str> {
        self.sections_by_id.values().map(|s| s.course.as_str()).collect()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections_by_id.len()
    }

    /// Whether the snapshot holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections_by_id.is_empty()
    }
}

/// Loads catalog snapshots from a [`CatalogSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogIndex;

impl CatalogIndex {
    /// Queries `source` for `courses` and groups the result.
    ///
    /// # Errors
    /// Propagates source failures; fails on duplicate CRNs.
    /// A course with no sections is not an error.
    pub fn load<S: CatalogSource>(
        source: &S,
        courses: &BTreeSet<CourseId>,
    ) -> Result<CatalogSnapshot, CatalogError> {
        let sections: Vec<Section> = source
            .fetch_sections(courses)?
            .into_iter()
            .filter(|s| courses.contains(&s.course))
            .collect();

        let crns: Vec<Crn> = sections.iter().map(|s| s.crn).collect();
        let meeting_times = if crns.is_empty() {
            Vec::new()
        } else {
            source.fetch_meeting_times(&crns)?
        };

        let snapshot = CatalogSnapshot::from_records(sections, meeting_times)?;
        debug!(
            "catalog snapshot: {} course(s) requested, {} section(s) loaded",
            courses.len(),
            snapshot.section_count()
        );
        Ok(snapshot)
    }
}
