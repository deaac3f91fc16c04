//! Descriptive schedule metrics.
//!
//! Computes plain facts about a generated schedule for downstream ranking.
//! No score is assigned here.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Credit hours | Sum of credit hours over chosen sections |
//! | Weekly minutes | Sum of interval duration × meeting days |
//! | Meeting days | Union of all interval day sets |
//! | Earliest start | Minimum interval start |
//! | Latest end | Maximum interval end |
//! | Minutes by day | Contact minutes per weekday |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSnapshot;
use crate::models::{ClockTime, ValidSchedule, Weekday, WeekdaySet};

/// Metrics for one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Total credit hours of the chosen sections.
    pub credit_hours: u32,
    /// Contact minutes per week.
    pub weekly_minutes: u32,
    /// Days with at least one meeting.
    pub meeting_days: WeekdaySet,
    /// Earliest start on any day. `None` without meetings.
    pub earliest_start: Option<ClockTime>,
    /// Latest end on any day. `None` without meetings.
    pub latest_end: Option<ClockTime>,
    /// Contact minutes per weekday; days without meetings are absent.
    pub minutes_by_day: BTreeMap<Weekday, u32>,
}

impl ScheduleSummary {
    /// Computes metrics for `schedule`.
    ///
    /// Credit hours are resolved through `snapshot`; a CRN missing from it
    /// contributes zero.
    pub fn calculate(schedule: &ValidSchedule, snapshot: &CatalogSnapshot) -> Self {
        let credit_hours = schedule
            .sections
            .iter()
            .filter_map(|chosen| snapshot.section(chosen.crn))
            .map(|section| u32::from(section.credit_hours))
            .sum();

        let mut meeting_days = WeekdaySet::EMPTY;
        let mut earliest_start: Option<ClockTime> = None;
        let mut latest_end: Option<ClockTime> = None;
        let mut minutes_by_day = BTreeMap::new();

        for interval in schedule.intervals() {
            if interval.days.is_empty() {
                continue;
            }
            meeting_days = meeting_days.union(interval.days);
            earliest_start = Some(earliest_start.map_or(interval.start, |t| t.min(interval.start)));
            latest_end = Some(latest_end.map_or(interval.end, |t| t.max(interval.end)));

            let minutes = u32::from(interval.duration_minutes());
            for day in interval.days.iter() {
                *minutes_by_day.entry(day).or_insert(0) += minutes;
            }
        }

        let weekly_minutes = minutes_by_day.values().sum();

        Self {
            credit_hours,
            weekly_minutes,
            meeting_days,
            earliest_start,
            latest_end,
            minutes_by_day,
        }
    }

    /// Number of days with meetings.
    pub fn days_on_campus(&self) -> usize {
        self.meeting_days.len()
    }
}
