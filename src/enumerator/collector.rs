//! Result accumulation.

use crate::models::ValidSchedule;

/// Accumulates schedules in discovery order.
///
/// Order is depth-first discovery order, not a ranking. No deduplication is
/// done; distinct section choices already make every schedule distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultCollector {
    schedules: Vec<ValidSchedule>,
}

impl ResultCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one schedule.
    pub fn push(&mut self, schedule: ValidSchedule) {
        self.schedules.push(schedule);
    }

    /// Moves all schedules of `other` to the end of this collector.
    pub fn append(&mut self, other: &mut ResultCollector) {
        self.schedules.append(&mut other.schedules);
    }

    /// Number of schedules collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether nothing was collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Collected schedules.
    pub fn schedules(&self) -> &[ValidSchedule] {
        &self.schedules
    }

    /// Consumes the collector, returning the schedules.
    pub fn into_schedules(self) -> Vec<ValidSchedule> {
        self.schedules
    }
}
