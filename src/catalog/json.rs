//! JSON catalog documents.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "sections": [
//!     { "crn": 10234, "course": "CS-1114", "class_type": "Lecture", "credit_hours": 3 }
//!   ],
//!   "section_times": [
//!     { "crn": 10234, "days": "MWF", "begin_time": "09:00:00", "end_time": "09:50:00" }
//!   ]
//! }
//! ```
//!
//! Times accept `HH:MM` or `HH:MM:SS` with zero seconds. Documents are
//! validated in full before use; see [`validate_document`](super::validate_document).

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{validate_document, CatalogSource, InMemoryCatalog, MeetingTime};
use crate::error::CatalogError;
use crate::models::{CourseId, Crn, MeetingInterval, Section};

/// A raw meeting-time record as stored by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTimeRecord {
    /// Owning section.
    pub crn: Crn,
    /// Registrar day code, e.g. `"MWF"`.
    pub days: String,
    /// Start time, `HH:MM[:SS]`.
    pub begin_time: String,
    /// End time, `HH:MM[:SS]`.
    pub end_time: String,
}

impl SectionTimeRecord {
    fn to_meeting_time(&self) -> Result<MeetingTime, CatalogError> {
        let interval = MeetingInterval::parse(&self.days, &self.begin_time, &self.end_time)?;
        Ok(MeetingTime::new(self.crn, interval))
    }
}

/// A whole catalog as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Section records.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Meeting-time records.
    #[serde(default)]
    pub section_times: Vec<SectionTimeRecord>,
}

/// Catalog source backed by a validated JSON document.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    inner: InMemoryCatalog,
}

impl JsonCatalog {
    /// Validates a parsed document and builds the catalog.
    ///
    /// # Errors
    /// [`CatalogError::Invalid`] with every problem found.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        validate_document(&doc).map_err(CatalogError::Invalid)?;

        let meeting_times = doc
            .section_times
            .iter()
            .map(SectionTimeRecord::to_meeting_time)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "json catalog: {} section(s), {} meeting time(s)",
            doc.sections.len(),
            meeting_times.len()
        );

        Ok(Self {
            inner: InMemoryCatalog::from_records(doc.sections, meeting_times),
        })
    }

    /// Parses and validates a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Parses and validates JSON from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    /// Reads, parses, and validates a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The validated records.
    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.inner
    }
}

impl CatalogSource for JsonCatalog {
    fn fetch_sections(&self, courses: &BTreeSet<CourseId>) -> Result<Vec<Section>, CatalogError> {
        self.inner.fetch_sections(courses)
    }

    fn fetch_meeting_times(&self, crns: &[Crn]) -> Result<Vec<MeetingTime>, CatalogError> {
        self.inner.fetch_meeting_times(crns)
    }
}
