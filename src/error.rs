//! Error types.
//!
//! The search itself is infallible once a catalog snapshot exists. Errors
//! come from three places: the catalog boundary ([`CatalogError`]), the
//! request ([`InvalidRequest`]), and cooperative cancellation ([`Cancelled`]).
//! An empty result set is never an error.

use thiserror::Error;

use crate::catalog::ValidationError;
use crate::models::{CourseId, Crn};

/// Failure to obtain a catalog snapshot. Fatal for the request.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be reached or queried.
    #[error("catalog unreachable: {0}")]
    Unreachable(String),

    /// The store returned two sections sharing one CRN.
    #[error("duplicate section CRN {0} in catalog")]
    DuplicateCrn(Crn),

    /// Catalog records failed validation.
    #[error("catalog validation failed with {} error(s): {}", .0.len(), join_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// A record field could not be parsed.
    #[error("malformed catalog record: {0}")]
    Malformed(#[from] ParseError),

    /// Catalog document is not valid JSON for the record schema.
    #[error("catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("catalog io: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A course request that the strict request policy refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    /// No course identifiers were given.
    #[error("course request is empty")]
    Empty,
    /// The same course identifier appears more than once.
    #[error("course '{0}' requested more than once")]
    DuplicateCourse(CourseId),
    /// A course identifier is empty or whitespace.
    #[error("blank course identifier in request")]
    BlankCourse,
}

/// The search was aborted through its cancellation flag.
///
/// Partial results are dropped together with this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("schedule enumeration cancelled")]
pub struct Cancelled;

/// A day code or clock time that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown weekday letter in a day code.
    #[error("unknown weekday letter '{0}'")]
    UnknownWeekday(char),
    /// Malformed `HH:MM[:SS]` time.
    #[error("invalid clock time '{0}'")]
    InvalidTime(String),
}

/// Planner configuration could not be read.
#[derive(Debug, Error)]
#[error("invalid planner configuration: {0}")]
pub struct ConfigError(#[from] pub toml::de::Error);

/// Errors surfaced by [`TimetablePlanner::plan`](crate::planner::TimetablePlanner::plan).
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Catalog snapshot could not be loaded; the search never started.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The request was rejected by the strict request policy.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),
    /// The search was cancelled.
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}
