//! Conflict-free course timetable generation.
//!
//! Given a list of courses a student wants to take, enumerates every
//! combination of one section per course whose weekly meeting times never
//! overlap. Ranking and filtering of the resulting schedules are left to the
//! caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Section`, `MeetingInterval`, `WeekdaySet`,
//!   `ClockTime`, `ValidSchedule`
//! - **`conflict`**: Pairwise and set-wise interval conflict checks
//! - **`catalog`**: Catalog boundary (`CatalogSource`), snapshots, in-memory
//!   and JSON sources, record validation
//! - **`enumerator`**: Backtracking search with pruning, cancellation, and
//!   optional parallel fan-out
//! - **`planner`**: `TimetablePlanner`, the request-level entry point
//! - **`summary`**: Descriptive per-schedule metrics
//! - **`config`**: `PlannerConfig` (TOML-loadable)
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::JsonCatalog;
//! use u_timetable::planner::TimetablePlanner;
//!
//! let catalog = JsonCatalog::from_json_str(r#"{
//!     "sections": [
//!         { "crn": 101, "course": "CS-1114" },
//!         { "crn": 201, "course": "MATH-1226" },
//!         { "crn": 202, "course": "MATH-1226" }
//!     ],
//!     "section_times": [
//!         { "crn": 101, "days": "MWF", "begin_time": "09:00", "end_time": "09:50" },
//!         { "crn": 201, "days": "MWF", "begin_time": "09:00", "end_time": "09:50" },
//!         { "crn": 202, "days": "TR",  "begin_time": "09:00", "end_time": "10:15" }
//!     ]
//! }"#).unwrap();
//!
//! let outcome = TimetablePlanner::new(catalog)
//!     .plan(&["CS-1114", "MATH-1226"])
//!     .unwrap();
//! assert_eq!(outcome.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod conflict;
pub mod enumerator;
pub mod error;
pub mod models;
pub mod planner;
pub mod summary;

pub use catalog::{CatalogSnapshot, CatalogSource, InMemoryCatalog, JsonCatalog};
pub use config::{PlannerConfig, RequestPolicy};
pub use enumerator::{CancellationFlag, ScheduleEnumerator, SearchStatistics};
pub use error::{CatalogError, InvalidRequest, PlannerError};
pub use models::{MeetingInterval, Section, ValidSchedule};
pub use planner::{PlanOutcome, TimetablePlanner};
pub use summary::ScheduleSummary;
