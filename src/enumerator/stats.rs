//! Search statistics.

use std::fmt;
use std::time::Duration;

/// Counters collected during one enumeration call.
///
/// Parallel runs merge the per-worker counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Section choices tried (one per attempted extension).
    pub nodes_explored: u64,
    /// Extensions abandoned because they introduced a conflict.
    pub branches_pruned: u64,
    /// Complete schedules emitted.
    pub schedules_found: u64,
    /// Deepest course level reached.
    pub max_depth: usize,
    /// Worker threads used (1 for sequential runs).
    pub workers: usize,
    /// Wall-clock time of the call.
    pub elapsed: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_pruned(&mut self) {
        self.branches_pruned = self.branches_pruned.saturating_add(1);
    }

    #[inline]
    pub fn on_schedule_found(&mut self) {
        self.schedules_found = self.schedules_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Adds another worker's counters. `workers` and `elapsed` are left alone.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.nodes_explored = self.nodes_explored.saturating_add(other.nodes_explored);
        self.branches_pruned = self.branches_pruned.saturating_add(other.branches_pruned);
        self.schedules_found = self.schedules_found.saturating_add(other.schedules_found);
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schedule Search Statistics:")?;
        writeln!(f, "  Nodes explored:   {}", self.nodes_explored)?;
        writeln!(f, "  Branches pruned:  {}", self.branches_pruned)?;
        writeln!(f, "  Schedules found:  {}", self.schedules_found)?;
        writeln!(f, "  Max depth:        {}", self.max_depth)?;
        writeln!(f, "  Workers:          {}", self.workers)?;
        writeln!(f, "  Total time:       {:.2?}", self.elapsed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let mut a = SearchStatistics {
            nodes_explored: 10,
            branches_pruned: 3,
            schedules_found: 2,
            max_depth: 2,
            workers: 2,
            ..Default::default()
        };
        let b = SearchStatistics {
            nodes_explored: 5,
            branches_pruned: 1,
            schedules_found: 4,
            max_depth: 3,
            workers: 1,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.nodes_explored, 15);
        assert_eq!(a.branches_pruned, 4);
        assert_eq!(a.schedules_found, 6);
        assert_eq!(a.max_depth, 3);
        assert_eq!(a.workers, 2);
    }
}
