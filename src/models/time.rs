//! Time codec bridging 12-hour display times, the solver wire format, and
//! reference-week timestamps.
//!
//! The calendar renderer places every class on a fixed, fictitious week so
//! that (weekday, time) pairs become orderable timestamps regardless of the
//! real semester dates. Monday of that week is an arbitrary anchor date; the
//! other weekdays are the four days that follow it.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Monday of the reference week. 2024-01-01 is a Monday.
const REFERENCE_MONDAY: (i32, u32, u32) = (2024, 1, 1);

/// Error raised when a 12-hour display time cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    /// The AM/PM marker is missing entirely.
    #[error("time '{0}' is missing an AM/PM marker")]
    MissingPeriod(String),
    /// The marker is present but is neither AM nor PM.
    #[error("time '{0}' has an unrecognized AM/PM marker")]
    UnknownPeriod(String),
    /// Hour or minute is not a number.
    #[error("time '{0}' has a non-numeric hour or minute")]
    NotNumeric(String),
    /// Hour outside 1-12 or minute outside 0-59.
    #[error("time '{0}' is out of range for a 12-hour clock")]
    OutOfRange(String),
}

/// A wall-clock time of day, stored on the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create from 24-hour components. Returns `None` when out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Parse a `"h:mm AM/PM"` display string.
    ///
    /// PM with hour below 12 adds 12; 12 AM maps to hour 0. Malformed input
    /// is rejected with a typed error, never coerced.
    pub fn parse_display(input: &str) -> Result<Self, TimeParseError> {
        let trimmed = input.trim();
        let (clock, period) = trimmed
            .rsplit_once(' ')
            .ok_or_else(|| TimeParseError::MissingPeriod(input.to_string()))?;

        let pm = match period.trim().to_ascii_uppercase().as_str() {
            "AM" => false,
            "PM" => true,
            _ => return Err(TimeParseError::UnknownPeriod(input.to_string())),
        };

        let (hour_str, minute_str) = clock
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeParseError::NotNumeric(input.to_string()))?;
        let hour: u32 = hour_str
            .trim()
            .parse()
            .map_err(|_| TimeParseError::NotNumeric(input.to_string()))?;
        let minute: u32 = minute_str
            .trim()
            .parse()
            .map_err(|_| TimeParseError::NotNumeric(input.to_string()))?;

        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(TimeParseError::OutOfRange(input.to_string()));
        }

        let hour24 = match (pm, hour) {
            (true, h) if h < 12 => h + 12,
            (false, 12) => 0,
            (_, h) => h,
        };
        Ok(Self {
            hour: hour24,
            minute,
        })
    }

    /// 24-hour hour component.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute component.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Solver wire format: zero-padded `"HH:MM:SS"` with zero seconds.
    pub fn to_wire(&self) -> String {
        format!("{:02}:{:02}:00", self.hour, self.minute)
    }

    /// Display format: `"h:mm AM/PM"`, no leading zero on the hour.
    pub fn to_display(&self) -> String {
        let (hour12, period) = match self.hour {
            0 => (12, "AM"),
            h if h < 12 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", hour12, self.minute, period)
    }

    fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }
}

/// Weekday letters used throughout the scheduling wire format.
///
/// Thursday is "R" per registrar convention. Ordering follows the week, so
/// derived comparisons match Monday < Tuesday < ... < Friday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "R")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
}

impl Weekday {
    /// All weekdays in week order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Single-letter code used on the wire.
    pub fn letter(self) -> &'static str {
        match self {
            Weekday::Monday => "M",
            Weekday::Tuesday => "T",
            Weekday::Wednesday => "W",
            Weekday::Thursday => "R",
            Weekday::Friday => "F",
        }
    }

    /// Resolve a wire letter back to a weekday.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "M" => Some(Weekday::Monday),
            "T" => Some(Weekday::Tuesday),
            "W" => Some(Weekday::Wednesday),
            "R" => Some(Weekday::Thursday),
            "F" => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// The fixed calendar date this weekday occupies in the reference week.
    pub fn reference_date(self) -> NaiveDate {
        let (y, m, d) = REFERENCE_MONDAY;
        let monday = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        monday + Duration::days(self as i64)
    }
}

/// Anchor a (weekday, time) pair onto the reference week.
pub fn anchor(day: Weekday, time: ClockTime) -> NaiveDateTime {
    day.reference_date().and_time(time.to_naive())
}

/// Recover the 12-hour display string from a reference-week timestamp.
pub fn display_from_anchor(timestamp: NaiveDateTime) -> String {
    let time = ClockTime {
        hour: timestamp.time().hour(),
        minute: timestamp.time().minute(),
    };
    time.to_display()
}
