//! Conflict-free schedule enumeration.
//!
//! Depth-first backtracking over the requested courses with immediate
//! pruning: a branch is abandoned as soon as the chosen section introduces
//! a conflict, instead of checking only complete combinations.
//!
//! # Components
//!
//! - [`ScheduleEnumerator`]: configures and runs the search.
//! - [`ResultCollector`]: accumulates schedules in discovery order.
//! - [`CancellationFlag`]: cooperative abort, checked per course level.
//! - [`SearchStatistics`]: node, pruning, and timing counters.
//!
//! # Determinism
//! For a fixed snapshot and course order the output order is fixed:
//! courses in the given order, sections in ascending CRN order.

mod cancel;
mod collector;
mod engine;
mod frame;
mod stats;

pub use cancel::CancellationFlag;
pub use collector::ResultCollector;
pub use engine::{Enumeration, ScheduleEnumerator};
pub use stats::SearchStatistics;
