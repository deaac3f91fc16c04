//! Schedule enumerator: sequential and fan-out execution of the search.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::time::Instant;

use log::debug;

use super::frame::{Branch, CourseLevel, SearchFrame};
use super::{CancellationFlag, ResultCollector, SearchStatistics};
use crate::catalog::CatalogSnapshot;
use crate::error::Cancelled;
use crate::models::{CourseId, ValidSchedule};

/// Output of one enumeration call.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Conflict-free schedules in discovery order.
    pub schedules: Vec<ValidSchedule>,
    /// Search counters.
    pub statistics: SearchStatistics,
}

impl Enumeration {
    /// Number of schedules found.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether no schedule was found.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

/// Enumerates every conflict-free choice of one section per course.
///
/// Courses are processed in the order given (duplicates dropped, first
/// occurrence kept). Sections of each course are tried in ascending CRN
/// order, so output order is reproducible for a fixed snapshot and course
/// order. Sections of courses that are not in the list are ignored.
///
/// # Parallel execution
/// With [`with_parallel`](Self::with_parallel), the first course's sections
/// are split into contiguous chunks, one per worker thread. Each worker
/// owns its own search frame; results are concatenated in chunk order,
/// which reproduces the sequential output exactly.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::{CatalogIndex, InMemoryCatalog};
/// use u_timetable::enumerator::ScheduleEnumerator;
/// use u_timetable::models::{MeetingInterval, Section};
///
/// let mon_9 = MeetingInterval::parse("M", "09:00", "10:00").unwrap();
/// let tue_9 = MeetingInterval::parse("T", "09:00", "10:00").unwrap();
/// let catalog = InMemoryCatalog::new()
///     .with_section_meetings(Section::new(1, "A"), [mon_9])
///     .with_section_meetings(Section::new(2, "B"), [tue_9]);
///
/// let courses = ["A".to_string(), "B".to_string()];
/// let snapshot = CatalogIndex::load(&catalog, &courses.iter().cloned().collect()).unwrap();
/// let result = ScheduleEnumerator::new(&snapshot, &courses).enumerate().unwrap();
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEnumerator<'a> {
    snapshot: &'a CatalogSnapshot,
    courses: Vec<CourseId>,
    parallel: bool,
    max_workers: Option<NonZeroUsize>,
    cancel: Option<CancellationFlag>,
}

impl<'a> ScheduleEnumerator<'a> {
    /// Creates an enumerator over `snapshot` for `courses`, in that order.
    pub fn new<S: AsRef<str>>(snapshot: &'a CatalogSnapshot, courses: &[S]) -> Self {
        Self {
            snapshot,
            courses: dedup_in_order(courses),
            parallel: false,
            max_workers: None,
            cancel: None,
        }
    }

    /// Enables fan-out of first-level branches across threads.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Caps the number of worker threads (default: available parallelism).
    pub fn with_max_workers(mut self, max_workers: NonZeroUsize) -> Self {
        self.max_workers = Some(max_workers);
        self
    }

    /// Attaches a cancellation flag.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Course processing order after deduplication.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    /// Runs the search.
    ///
    /// # Errors
    /// [`Cancelled`] if the flag was set before the search finished. No
    /// partial results are returned in that case.
    pub fn enumerate(&self) -> Result<Enumeration, Cancelled> {
        let started = Instant::now();
        let levels = self.build_levels();

        if let Some(level) = levels.iter().find(|l| l.branches.is_empty()) {
            debug!("course '{}' has no sections; no schedule is possible", level.course);
            if self.is_cancelled() {
                return Err(Cancelled);
            }
            let statistics = SearchStatistics {
                workers: 1,
                elapsed: started.elapsed(),
                ..Default::default()
            };
            return Ok(Enumeration {
                schedules: Vec::new(),
                statistics,
            });
        }

        debug!(
            "enumerating {} course(s): {}",
            levels.len(),
            levels
                .iter()
                .map(|l| format!("{}={}", l.course, l.branches.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let workers = self.worker_count(&levels);
        let (collector, mut statistics) = if workers > 1 {
            self.run_parallel(&levels, workers)?
        } else {
            SearchFrame::new(&levels, self.cancel.as_ref()).run()?
        };
        statistics.workers = workers;
        statistics.elapsed = started.elapsed();

        debug!(
            "search finished: {} schedule(s), {} node(s), {} pruned",
            statistics.schedules_found, statistics.nodes_explored, statistics.branches_pruned
        );

        Ok(Enumeration {
            schedules: collector.into_schedules(),
            statistics,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationFlag::is_cancelled)
    }

    fn build_levels(&self) -> Vec<CourseLevel<'_>> {
        self.courses
            .iter()
            .map(|course| CourseLevel {
                course: course.as_str(),
                branches: self
                    .snapshot
                    .sections_of(course)
                    .map(|s| Branch {
                        crn: s.crn,
                        intervals: self.snapshot.intervals_of(s.crn),
                    })
                    .collect(),
            })
            .collect()
    }

    fn worker_count(&self, levels: &[CourseLevel<'_>]) -> usize {
        if !self.parallel {
            return 1;
        }
        let Some(first) = levels.first() else {
            return 1;
        };
        let available = self
            .max_workers
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get);
        available.min(first.branches.len()).max(1)
    }

    fn run_parallel(
        &self,
        levels: &[CourseLevel<'_>],
        workers: usize,
    ) -> Result<(ResultCollector, SearchStatistics), Cancelled> {
        let roots = &levels[0].branches;
        let chunk_size = roots.len().div_ceil(workers);
        let cancel = self.cancel.as_ref();

        let results: Vec<Result<(ResultCollector, SearchStatistics), Cancelled>> =
            std::thread::scope(|scope| {
                let handles: Vec<_> = roots
                    .chunks(chunk_size)
                    .map(|chunk| {
                        scope.spawn(move || SearchFrame::new(levels, cancel).run_subtrees(chunk))
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                    .collect()
            });

        let mut collector = ResultCollector::new();
        let mut statistics = SearchStatistics::default();
        for result in results {
            let (mut part, part_stats) = result?;
            collector.append(&mut part);
            statistics.merge(&part_stats);
        }
        Ok((collector, statistics))
    }
}

fn dedup_in_order<S: AsRef<str>>(courses: &[S]) -> Vec<CourseId> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::with_capacity(courses.len());
    for course in courses {
        let course = course.as_ref();
        if seen.insert(course) {
            ordered.push(course.to_string());
        } else {
            debug!("dropping duplicate course '{course}' from search order");
        }
    }
    ordered
}
