//! Timetable domain models.
//!
//! Provides the data types for course sections, their weekly meeting
//! times, and the conflict-free schedules built from them.
//!
//! # Relationships
//!
//! | Entity | Has many | Notes |
//! |--------|----------|-------|
//! | Course | Section | Course is only a grouping key (`CourseId`) |
//! | Section | MeetingInterval | All intervals travel together |
//! | ValidSchedule | ChosenSection | One per requested course |

mod meeting;
mod schedule;
mod section;

pub use meeting::{ClockTime, MeetingInterval, Weekday, WeekdaySet};
pub use schedule::{ChosenSection, ValidSchedule};
pub use section::{CourseId, Crn, Section};
