//! Public entry point: course request in, conflict-free schedules out.
//!
//! # Pipeline
//!
//! 1. Normalize the request according to [`RequestPolicy`].
//! 2. Load a [`CatalogSnapshot`] for the requested courses.
//! 3. Enumerate conflict-free schedules over the snapshot.
//!
//! A catalog failure aborts before the search starts. An empty result is a
//! normal outcome, not an error.

use std::collections::{BTreeSet, HashSet};

use log::{info, warn};

use crate::catalog::{CatalogIndex, CatalogSnapshot, CatalogSource};
use crate::config::{PlannerConfig, RequestPolicy};
use crate::enumerator::{CancellationFlag, ScheduleEnumerator, SearchStatistics};
use crate::error::{InvalidRequest, PlannerError};
use crate::models::{CourseId, Crn, Section, ValidSchedule};
use crate::summary::ScheduleSummary;

/// Result of one planning request.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Courses searched, in processing order.
    pub courses: Vec<CourseId>,
    /// Catalog data the schedules refer to.
    pub snapshot: CatalogSnapshot,
    /// Conflict-free schedules in discovery order.
    pub schedules: Vec<ValidSchedule>,
    /// Search counters.
    pub statistics: SearchStatistics,
}

impl PlanOutcome {
    /// Number of schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether no schedule was found.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Resolves section metadata for a CRN of any returned schedule.
    pub fn section(&self, crn: Crn) -> Option<&Section> {
        self.snapshot.section(crn)
    }

    /// Descriptive metrics for every schedule, in schedule order.
    pub fn summaries(&self) -> Vec<ScheduleSummary> {
        self.schedules
            .iter()
            .map(|s| ScheduleSummary::calculate(s, &self.snapshot))
            .collect()
    }
}

/// Generates every conflict-free timetable for a list of courses.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::InMemoryCatalog;
/// use u_timetable::models::{MeetingInterval, Section};
/// use u_timetable::planner::TimetablePlanner;
///
/// let catalog = InMemoryCatalog::new()
///     .with_section_meetings(
///         Section::new(101, "CS-1114"),
///         [MeetingInterval::parse("MWF", "09:00", "09:50").unwrap()],
///     )
///     .with_section_meetings(
///         Section::new(201, "MATH-1226"),
///         [MeetingInterval::parse("TR", "09:00", "10:15").unwrap()],
///     );
///
/// let planner = TimetablePlanner::new(catalog);
/// let outcome = planner.plan(&["CS-1114", "MATH-1226"]).unwrap();
/// assert_eq!(outcome.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TimetablePlanner<S> {
    source: S,
    config: PlannerConfig,
    cancel: Option<CancellationFlag>,
}

impl<S: CatalogSource> TimetablePlanner<S> {
    /// Creates a planner over a connected catalog source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: PlannerConfig::default(),
            cancel: None,
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Attaches a cancellation flag used by every subsequent `plan` call.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The catalog source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Plans schedules for `courses`, processed in the given order.
    ///
    /// # Errors
    /// - [`PlannerError::InvalidRequest`] under [`RequestPolicy::Reject`].
    /// - [`PlannerError::Catalog`] if the snapshot cannot be loaded.
    /// - [`PlannerError::Cancelled`] if the cancellation flag is set.
    pub fn plan<C: AsRef<str>>(&self, courses: &[C]) -> Result<PlanOutcome, PlannerError> {
        let courses = normalize_request(courses, self.config.request_policy)?;

        let requested: BTreeSet<CourseId> = courses.iter().cloned().collect();
        let snapshot = CatalogIndex::load(&self.source, &requested)?;

        for course in &courses {
            if snapshot.sections_of(course).next().is_none() {
                warn!("course '{course}' has no sections in the catalog");
            }
        }

        let mut enumerator = ScheduleEnumerator::new(&snapshot, &courses)
            .with_parallel(self.config.parallel);
        if let Some(max_workers) = self.config.max_workers {
            enumerator = enumerator.with_max_workers(max_workers);
        }
        if let Some(flag) = &self.cancel {
            enumerator = enumerator.with_cancellation(flag.clone());
        }
        let enumeration = enumerator.enumerate()?;

        info!(
            "generated {} schedule(s) for {} course(s) in {:.2?}",
            enumeration.schedules.len(),
            courses.len(),
            enumeration.statistics.elapsed
        );

        Ok(PlanOutcome {
            courses,
            snapshot,
            schedules: enumeration.schedules,
            statistics: enumeration.statistics,
        })
    }
}

/// Trims ids and applies the request policy.
///
/// Under [`RequestPolicy::Normalize`] blank ids and repeats are dropped
/// (first occurrence kept). Under [`RequestPolicy::Reject`] they fail, as
/// does an empty request.
pub fn normalize_request<C: AsRef<str>>(
    courses: &[C],
    policy: RequestPolicy,
) -> Result<Vec<CourseId>, InvalidRequest> {
    if courses.is_empty() && policy == RequestPolicy::Reject {
        return Err(InvalidRequest::Empty);
    }

    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(courses.len());
    for course in courses {
        let course = course.as_ref().trim();
        if course.is_empty() {
            match policy {
                RequestPolicy::Reject => return Err(InvalidRequest::BlankCourse),
                RequestPolicy::Normalize => {
                    warn!("dropping blank course identifier from request");
                    continue;
                }
            }
        }
        if !seen.insert(course) {
            match policy {
                RequestPolicy::Reject => {
                    return Err(InvalidRequest::DuplicateCourse(course.to_string()))
                }
                RequestPolicy::Normalize => {
                    warn!("dropping duplicate course '{course}' from request");
                    continue;
                }
            }
        }
        normalized.push(course.to_string());
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, MeetingTime};
    use crate::error::{Cancelled, CatalogError};
    use crate::models::MeetingInterval;
    use std::cell::Cell;

    fn iv(days: &str, start: &str, end: &str) -> MeetingInterval {
        MeetingInterval::parse(days, start, end).unwrap()
    }

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_section_meetings(
                Section::new(101, "CS-1114").with_credit_hours(3),
                [iv("MWF", "09:00", "09:50")],
            )
            .with_section_meetings(
                Section::new(102, "CS-1114").with_credit_hours(3),
                [iv("TR", "09:30", "10:45")],
            )
            .with_section_meetings(
                Section::new(201, "MATH-1226").with_credit_hours(4),
                [iv("MWF", "09:00", "09:50"), iv("R", "13:00", "13:50")],
            )
            .with_section_meetings(
                Section::new(202, "MATH-1226").with_credit_hours(4),
                [iv("MWF", "10:10", "11:00"), iv("T", "13:00", "13:50")],
            )
    }

    #[test]
    fn test_plan_basic() {
        let planner = TimetablePlanner::new(sample_catalog());
        let outcome = planner.plan(&["CS-1114", "MATH-1226"]).unwrap();

        let crns: Vec<Vec<Crn>> = outcome.schedules.iter().map(|s| s.crns()).collect();
        assert_eq!(
            crns,
            vec![
                vec![Crn(101), Crn(202)],
                vec![Crn(102), Crn(201)],
                vec![Crn(102), Crn(202)],
            ]
        );
        assert_eq!(outcome.section(Crn(201)).map(|s| s.credit_hours), Some(4));
        assert_eq!(outcome.courses, vec!["CS-1114", "MATH-1226"]);
    }

    #[test]
    fn test_plan_parallel_same_result() {
        let sequential = TimetablePlanner::new(sample_catalog())
            .plan(&["CS-1114", "MATH-1226"])
            .unwrap();
        let parallel = TimetablePlanner::new(sample_catalog())
            .with_config(PlannerConfig::new().with_parallel(true))
            .plan(&["CS-1114", "MATH-1226"])
            .unwrap();
        assert_eq!(sequential.schedules, parallel.schedules);
    }

    #[test]
    fn test_plan_unknown_course_empty_not_error() {
        let planner = TimetablePlanner::new(sample_catalog());
        let outcome = planner.plan(&["CS-1114", "ART-1000"]).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_plan_empty_request_normalize() {
        let planner = TimetablePlanner::new(sample_catalog());
        let courses: [&str; 0] = [];
        let outcome = planner.plan(&courses).unwrap();
        assert_eq!(outcome.len(), 1);
        assert!(outcome.schedules[0].is_empty());
    }

    #[test]
    fn test_plan_empty_request_reject() {
        let planner = TimetablePlanner::new(sample_catalog())
            .with_config(PlannerConfig::new().with_request_policy(RequestPolicy::Reject));
        let courses: [&str; 0] = [];
        let err = planner.plan(&courses).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidRequest(InvalidRequest::Empty)));
    }

    #[test]
    fn test_normalize_request() {
        let normalized =
            normalize_request(&[" CS-1114", "MATH-1226", "CS-1114 ", ""], RequestPolicy::Normalize)
                .unwrap();
        assert_eq!(normalized, vec!["CS-1114", "MATH-1226"]);
    }

    #[test]
    fn test_reject_duplicate_and_blank() {
        assert_eq!(
            normalize_request(&["A", "B", "A"], RequestPolicy::Reject),
            Err(InvalidRequest::DuplicateCourse("A".into()))
        );
        assert_eq!(
            normalize_request(&["A", "  "], RequestPolicy::Reject),
            Err(InvalidRequest::BlankCourse)
        );
    }

    #[test]
    fn test_plan_with_duplicates_normalized() {
        let planner = TimetablePlanner::new(sample_catalog());
        let once = planner.plan(&["CS-1114"]).unwrap();
        let twice = planner.plan(&["CS-1114", "CS-1114"]).unwrap();
        assert_eq!(once.schedules, twice.schedules);
        assert_eq!(twice.len(), 2);
    }

    /// Source that fails and counts how often it was asked.
    struct Failing {
        calls: Cell<usize>,
    }

    impl CatalogSource for Failing {
        fn fetch_sections(&self, _: &BTreeSet<CourseId>) -> Result<Vec<Section>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            Err(CatalogError::Unreachable("timeout".into()))
        }

        fn fetch_meeting_times(&self, _: &[Crn]) -> Result<Vec<MeetingTime>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            Err(CatalogError::Unreachable("timeout".into()))
        }
    }

    #[test]
    fn test_catalog_error_is_fatal_and_not_retried() {
        let planner = TimetablePlanner::new(Failing { calls: Cell::new(0) });
        let err = planner.plan(&["CS-1114"]).unwrap_err();
        assert!(matches!(err, PlannerError::Catalog(CatalogError::Unreachable(_))));
        assert_eq!(planner.source().calls.get(), 1);
    }

    #[test]
    fn test_cancelled_plan() {
        let flag = CancellationFlag::new();
        let planner = TimetablePlanner::new(sample_catalog()).with_cancellation(flag.clone());
        assert!(planner.plan(&["CS-1114"]).is_ok());

        flag.cancel();
        let err = planner.plan(&["CS-1114"]).unwrap_err();
        assert!(matches!(err, PlannerError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_planner_over_borrowed_source() {
        let catalog = sample_catalog();
        let planner = TimetablePlanner::new(&catalog);
        assert_eq!(planner.plan(&["MATH-1226"]).unwrap().len(), 2);
    }
}
