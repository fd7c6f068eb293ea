//! Assembles and validates the outbound solver request.
//!
//! Everything here runs before any network traffic: weight validation,
//! break-window filtering, and display-time parsing all fail fast so a
//! malformed input can never reach the solver.

use crate::api::{BreakWindow, ScheduleRequest};
use crate::models::input::{BreakPeriod, Course, Preferences};
use crate::models::time::{ClockTime, TimeParseError};

/// Tolerance for the weight-sum invariant. Weights arrive from slider UI as
/// floats, so exact equality against 1.0 would reject values like 0.7 + 0.3.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// The solver accepts at most this many courses per request.
pub const MAX_COURSES: usize = 8;

/// The solver accepts at most this many break windows per request.
pub const MAX_BREAKS: usize = 8;

/// Input problems that block a generation request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Day and time weights must sum to 1.0.
    #[error("day and time weights must sum to 1.0 (got {sum})")]
    Weights { sum: f64 },
    /// Too few or too many courses.
    #[error("between 1 and 8 courses are required (got {count})")]
    CourseCount { count: usize },
    /// Too many break windows.
    #[error("at most 8 breaks are allowed (got {count})")]
    BreakCount { count: usize },
    /// A break bound is not a valid 12-hour display time.
    #[error("break time '{input}' is invalid: {source}")]
    BreakTime {
        input: String,
        source: TimeParseError,
    },
}

/// Check the weight-sum invariant. Generation must not proceed when this
/// fails.
pub fn validate(preferences: &Preferences) -> Result<(), ValidationError> {
    let sum = preferences.day_weight + preferences.time_weight;
    if (sum - 1.0).abs() > WEIGHT_EPSILON {
        return Err(ValidationError::Weights { sum });
    }
    Ok(())
}

/// Freeze the wizard's input state into a `ScheduleRequest`.
///
/// Break periods missing either bound are treated as "no break" and
/// dropped; fully specified bounds are converted to the 24-hour wire
/// format. Courses become `"SUBJECT-NUMBER"` codes.
pub fn build(
    courses: &[Course],
    breaks: &[BreakPeriod],
    preferences: &Preferences,
) -> Result<ScheduleRequest, ValidationError> {
    validate(preferences)?;

    if courses.is_empty() || courses.len() > MAX_COURSES {
        return Err(ValidationError::CourseCount {
            count: courses.len(),
        });
    }

    let mut windows = Vec::new();
    for period in breaks {
        let Some((start, end)) = period.bounds() else {
            continue;
        };
        windows.push(BreakWindow {
            begin_time: parse_bound(start)?.to_wire(),
            end_time: parse_bound(end)?.to_wire(),
        });
    }
    if windows.len() > MAX_BREAKS {
        return Err(ValidationError::BreakCount {
            count: windows.len(),
        });
    }

    Ok(ScheduleRequest {
        courses: courses.iter().map(Course::code).collect(),
        breaks: windows,
        preferred_days: preferences.days.clone(),
        preferred_time: preferences.time_of_day,
        day_weight: preferences.day_weight,
        time_weight: preferences.time_weight,
    })
}

fn parse_bound(input: &str) -> Result<ClockTime, ValidationError> {
    ClockTime::parse_display(input).map_err(|source| ValidationError::BreakTime {
        input: input.to_string(),
        source,
    })
}
