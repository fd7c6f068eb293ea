//! Wizard input state: the courses, breaks, and preferences collected across
//! the steps before a request is frozen.

use serde::{Deserialize, Serialize};

use super::time::Weekday;
use crate::api::TimeOfDay;

/// A single course row on the Courses step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub subject: String,
    pub course_number: String,
}

impl Course {
    pub fn new(subject: impl Into<String>, course_number: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            course_number: course_number.into(),
        }
    }

    /// Wire form, e.g. `"CS-1114"`.
    pub fn code(&self) -> String {
        format!("{}-{}", self.subject.trim(), self.course_number.trim())
    }
}

/// A break window on the Breaks step. Both bounds are 12-hour display
/// strings; a period missing either bound means "no break" and is excluded
/// from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPeriod {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl BreakPeriod {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Both bounds, when the period is fully specified.
    pub fn bounds(&self) -> Option<(&str, &str)> {
        match (self.start.as_deref(), self.end.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some((start, end))
            }
            _ => None,
        }
    }
}

/// Scheduling preferences from the Preferences step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Weekdays the student prefers classes on.
    pub days: Vec<Weekday>,
    /// Preferred part of the day.
    pub time_of_day: TimeOfDay,
    /// Weight given to the day preference, in [0, 1].
    pub day_weight: f64,
    /// Weight given to the time-of-day preference, in [0, 1].
    pub time_weight: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.to_vec(),
            time_of_day: TimeOfDay::Morning,
            day_weight: 0.5,
            time_weight: 0.5,
        }
    }
}
