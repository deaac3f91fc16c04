//! Depth-first backtracking over course levels.
//!
//! # Algorithm
//!
//! 1. At depth `d`, take course `d` of the ordered course list.
//! 2. For each of its sections (ascending CRN), test whether appending the
//!    section's intervals keeps the partial combination conflict-free.
//! 3. If not, prune: the subtree is never expanded.
//! 4. Otherwise append, recurse to `d + 1`, then truncate back (backtrack).
//! 5. At `d == courses.len()` the combination is complete and already
//!    verified, so it is emitted.
//!
//! Pruning only discards extensions that already contain a conflicting
//! pair; any completion of such a prefix would contain the same pair, so the
//! output equals that of a check-at-the-end search.
//!
//! # Complexity
//! Worst case O(Π sᵢ · n²) for section counts sᵢ and n total intervals,
//! typically far less since conflicts prune whole subtrees early.

use super::{CancellationFlag, ResultCollector, SearchStatistics};
use crate::conflict::extends_cleanly;
use crate::error::Cancelled;
use crate::models::{ChosenSection, Crn, MeetingInterval, ValidSchedule};

/// One choosable section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Branch<'a> {
    pub crn: Crn,
    pub intervals: &'a [MeetingInterval],
}

/// All sections of one course, in iteration order.
#[derive(Debug, Clone)]
pub(crate) struct CourseLevel<'a> {
    pub course: &'a str,
    pub branches: Vec<Branch<'a>>,
}

/// Mutable search state owned by exactly one search (or one worker).
///
/// The partial combination lives here and nowhere else, so independent
/// calls never observe each other's state.
pub(crate) struct SearchFrame<'a> {
    levels: &'a [CourseLevel<'a>],
    cancel: Option<&'a CancellationFlag>,
    combination: Vec<MeetingInterval>,
    chosen: Vec<Branch<'a>>,
    collector: ResultCollector,
    stats: SearchStatistics,
}

impl<'a> SearchFrame<'a> {
    pub fn new(levels: &'a [CourseLevel<'a>], cancel: Option<&'a CancellationFlag>) -> Self {
        let capacity = levels.len();
        Self {
            levels,
            cancel,
            combination: Vec::new(),
            chosen: Vec::with_capacity(capacity),
            collector: ResultCollector::new(),
            stats: SearchStatistics::default(),
        }
    }

    /// Explores the whole tree.
    pub fn run(mut self) -> Result<(ResultCollector, SearchStatistics), Cancelled> {
        self.descend(0)?;
        Ok(self.finish())
    }

    /// Explores only the subtrees under the given first-level branches.
    pub fn run_subtrees(
        mut self,
        roots: &'a [Branch<'a>],
    ) -> Result<(ResultCollector, SearchStatistics), Cancelled> {
        self.check_cancelled()?;
        for &branch in roots {
            self.try_branch(0, branch)?;
        }
        Ok(self.finish())
    }

    fn finish(self) -> (ResultCollector, SearchStatistics) {
        (self.collector, self.stats)
    }

    #[inline]
    fn check_cancelled(&self) -> Result<(), Cancelled> {
        match self.cancel {
            Some(flag) if flag.is_cancelled() => Err(Cancelled),
            _ => Ok(()),
        }
    }

    fn descend(&mut self, depth: usize) -> Result<(), Cancelled> {
        self.check_cancelled()?;
        self.stats.on_depth(depth);

        if depth == self.levels.len() {
            self.emit();
            return Ok(());
        }

        let levels = self.levels;
        for &branch in &levels[depth].branches {
            self.try_branch(depth, branch)?;
        }
        Ok(())
    }

    fn try_branch(&mut self, depth: usize, branch: Branch<'a>) -> Result<(), Cancelled> {
        self.stats.on_node_explored();

        if !extends_cleanly(&self.combination, branch.intervals) {
            self.stats.on_pruned();
            return Ok(());
        }

        let mark = self.combination.len();
        self.combination.extend_from_slice(branch.intervals);
        self.chosen.push(branch);

        let result = self.descend(depth + 1);

        self.chosen.pop();
        self.combination.truncate(mark);
        result
    }

    fn emit(&mut self) {
        let sections = self
            .levels
            .iter()
            .zip(&self.chosen)
            .map(|(level, branch)| {
                ChosenSection::new(level.course, branch.crn, branch.intervals.to_vec())
            })
            .collect();
        self.collector.push(ValidSchedule::new(sections));
        self.stats.on_schedule_found();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(days: &str, start: &str, end: &str) -> MeetingInterval {
        MeetingInterval::parse(days, start, end).unwrap()
    }

    #[test]
    fn test_empty_levels_emit_single_empty_schedule() {
        let levels: Vec<CourseLevel> = Vec::new();
        let (collector, stats) = SearchFrame::new(&levels, None).run().unwrap();
        assert_eq!(collector.len(), 1);
        assert!(collector.schedules()[0].is_empty());
        assert_eq!(stats.schedules_found, 1);
    }

    #[test]
    fn test_prunes_conflicting_prefix() {
        let a1 = [iv("M", "09:00", "10:00")];
        let b1 = [iv("M", "09:30", "10:30")];
        let c1 = [iv("T", "09:00", "10:00")];
        let c2 = [iv("W", "09:00", "10:00")];
        let levels = vec![
            CourseLevel {
                course: "A",
                branches: vec![Branch { crn: Crn(1), intervals: &a1 }],
            },
            CourseLevel {
                course: "B",
                branches: vec![Branch { crn: Crn(2), intervals: &b1 }],
            },
            CourseLevel {
                course: "C",
                branches: vec![
                    Branch { crn: Crn(3), intervals: &c1 },
                    Branch { crn: Crn(4), intervals: &c2 },
                ],
            },
        ];

        let (collector, stats) = SearchFrame::new(&levels, None).run().unwrap();
        assert!(collector.is_empty());
        // A1 tried, B1 tried and pruned; C never reached
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.branches_pruned, 1);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn test_frame_state_restored_after_run() {
        let a1 = [iv("M", "09:00", "10:00")];
        let a2 = [iv("M", "11:00", "12:00")];
        let levels = vec![CourseLevel {
            course: "A",
            branches: vec![
                Branch { crn: Crn(1), intervals: &a1 },
                Branch { crn: Crn(2), intervals: &a2 },
            ],
        }];

        let (first, _) = SearchFrame::new(&levels, None).run().unwrap();
        let (second, _) = SearchFrame::new(&levels, None).run().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        for schedule in first.schedules() {
            assert_eq!(schedule.len(), 1);
            assert_eq!(schedule.intervals().count(), 1);
        }
    }

    #[test]
    fn test_cancelled_before_start() {
        let flag = CancellationFlag::new();
        flag.cancel();
        let levels: Vec<CourseLevel> = Vec::new();
        assert_eq!(
            SearchFrame::new(&levels, Some(&flag)).run().unwrap_err(),
            Cancelled
        );
    }
}
