//! Weekly meeting time model.
//!
//! A [`MeetingInterval`] is one recurring weekly block: a set of weekdays
//! plus a start/end wall-clock time. Times have minute resolution.
//!
//! # Time Model
//! Clock times are minutes since midnight. Intervals are half-open
//! `[start, end)`: a block ending at 10:00 and one starting at 10:00 on the
//! same day do not overlap.
//!
//! # Day Codes
//! Catalog records encode weekdays as registrar letters:
//!
//! | Letter | Day |
//! |--------|-----|
//! | M | Monday |
//! | T | Tuesday |
//! | W | Wednesday |
//! | R | Thursday |
//! | F | Friday |
//! | S | Saturday |
//! | U | Sunday |

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Registrar letter for this day.
    pub fn letter(self) -> char {
        match self {
            Weekday::Mon => 'M',
            Weekday::Tue => 'T',
            Weekday::Wed => 'W',
            Weekday::Thu => 'R',
            Weekday::Fri => 'F',
            Weekday::Sat => 'S',
            Weekday::Sun => 'U',
        }
    }

    /// Parses a registrar letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.letter() == letter)
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of weekdays, stored as a 7-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Creates a set from a list of days.
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().fold(Self::EMPTY, |set, &d| set.with(d))
    }

    /// Returns a copy with `day` added.
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | day.bit())
    }

    /// Whether `day` is in the set.
    #[inline]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Whether the two sets share at least one day.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Days in both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Days in either set.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether the set has no days.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of days in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in the set, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromStr for WeekdaySet {
    type Err = ParseError;

    /// Parses a day code such as `"MWF"` or `"TR"`. Repeated letters are ignored.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        code.chars().try_fold(Self::EMPTY, |set, c| {
            Weekday::from_letter(c)
                .map(|d| set.with(d))
                .ok_or(ParseError::UnknownWeekday(c))
        })
    }
}

impl TryFrom<String> for WeekdaySet {
    type Error = ParseError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<WeekdaySet> for String {
    fn from(set: WeekdaySet) -> Self {
        set.to_string()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.letter())?;
        }
        Ok(())
    }
}

/// Time of day at minute resolution.
///
/// Ranges over `00:00..=24:00`. `24:00` is the end of the day and only
/// makes sense as an interval end; as a start it yields a malformed
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Midnight at the end of the day (`24:00`).
    pub const END_OF_DAY: ClockTime = ClockTime(Self::MINUTES_PER_DAY);

    /// Creates a clock time. Returns `None` outside `00:00..=24:00`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour as u16 * 60 + minute as u16)
    }

    /// Creates a clock time from minutes since midnight (at most 1440).
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= Self::MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl From<NaiveTime> for ClockTime {
    /// Truncates seconds and sub-second precision.
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    /// Parses `HH:MM` or `HH:MM:SS`, plus `24:00[:00]`. Non-zero seconds
    /// are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s, "24:00" | "24:00:00") {
            return Ok(Self::END_OF_DAY);
        }
        let invalid = || ParseError::InvalidTime(s.to_string());
        let time = NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map_err(|_| invalid())?;
        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(invalid());
        }
        Ok(time.into())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// One recurring weekly block of a section.
///
/// Choosing a section commits to all of its meeting intervals.
///
/// # Examples
///
/// ```
/// use u_timetable::models::MeetingInterval;
///
/// let lecture = MeetingInterval::parse("MWF", "09:00", "09:50").unwrap();
/// assert_eq!(lecture.duration_minutes(), 50);
/// assert_eq!(lecture.to_string(), "MWF 09:00-09:50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingInterval {
    /// Days the block recurs on.
    pub days: WeekdaySet,
    /// Start time (inclusive).
    pub start: ClockTime,
    /// End time (exclusive).
    pub end: ClockTime,
}

impl MeetingInterval {
    /// Creates a meeting interval.
    pub fn new(days: WeekdaySet, start: ClockTime, end: ClockTime) -> Self {
        Self { days, start, end }
    }

    /// Parses a day code and two clock times.
    pub fn parse(days: &str, start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(Self::new(days.parse()?, start.parse()?, end.parse()?))
    }

    /// Whether `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Length of one occurrence in minutes (0 if malformed).
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether the two blocks share a weekday.
    #[inline]
    pub fn overlaps_days(&self, other: &Self) -> bool {
        self.days.intersects(other.days)
    }

    /// Whether the half-open clock ranges overlap, ignoring days.
    #[inline]
    pub fn overlaps_time(&self, other: &Self) -> bool {
        self.end > other.start && self.start < other.end
    }
}

impl fmt::Display for MeetingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.days, self.start, self.end)
    }
}
