//! Pairwise conflict detection between meeting intervals.
//!
//! Two intervals conflict iff they share a weekday AND their clock ranges
//! overlap under half-open comparison:
//!
//! ```text
//! a.end > b.start && a.start < b.end
//! ```
//!
//! Back-to-back blocks (one ends exactly when the other starts) do not
//! conflict.
//!
//! # Complexity
//! [`has_any_conflict`] is O(n²) in the number of intervals. `n` is the
//! total weekly meetings of one timetable, so it stays small.

use crate::models::MeetingInterval;

/// Whether two meeting intervals conflict. Symmetric.
///
/// # Examples
///
/// ```
/// use u_timetable::conflict::conflicts;
/// use u_timetable::models::MeetingInterval;
///
/// let a = MeetingInterval::parse("MWF", "09:00", "10:00").unwrap();
/// let b = MeetingInterval::parse("W", "10:00", "11:00").unwrap();
/// assert!(!conflicts(&a, &b)); // back-to-back
/// ```
#[inline]
pub fn conflicts(a: &MeetingInterval, b: &MeetingInterval) -> bool {
    a.overlaps_days(b) && a.overlaps_time(b)
}

/// Whether any unordered pair in `intervals` conflicts.
pub fn has_any_conflict(intervals: &[MeetingInterval]) -> bool {
    first_conflict(intervals).is_some()
}

/// Index pair `(i, j)`, `i < j`, of the first conflicting pair in scan order.
pub fn first_conflict(intervals: &[MeetingInterval]) -> Option<(usize, usize)> {
    for i in 0..intervals.len() {
        for j in (i + 1)..intervals.len() {
            if conflicts(&intervals[i], &intervals[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Whether appending `added` to a conflict-free `existing` keeps it conflict-free.
///
/// Only pairs involving at least one interval of `added` are tested; pairs
/// within `existing` are assumed clean. For a conflict-free `existing` this
/// equals `!has_any_conflict(existing ++ added)`.
pub fn extends_cleanly(existing: &[MeetingInterval], added: &[MeetingInterval]) -> bool {
    for (k, new) in added.iter().enumerate() {
        if existing.iter().any(|old| conflicts(old, new)) {
            return false;
        }
        if added[k + 1..].iter().any(|other| conflicts(new, other)) {
            return false;
        }
    }
    true
}
