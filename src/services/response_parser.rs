//! Converts the solver's per-day class listings into ordered per-schedule
//! event collections anchored on the reference week.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::{CandidateSchedule, ScheduleEntry, SolverResponse, TIMEOUT_SENTINEL};
use crate::models::time::{self, ClockTime, TimeParseError, Weekday};

/// One class meeting placed on the reference week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub crn: String,
}

/// All events of one candidate schedule, in service order.
pub type ScheduleSet = Vec<ClassEvent>;

/// The three outcomes a solver response can encode.
///
/// An empty candidate list and a timeout are distinct conditions and are
/// never conflated: the former means no feasible schedule exists, the
/// latter that the search space was too large to explore.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    /// Pre-ranked candidate schedules, service order preserved.
    Schedules(Vec<ScheduleSet>),
    /// No feasible schedule for the given constraints.
    NoFeasible,
    /// The solver gave up before exhausting the search space.
    Timeout,
}

/// A response that violates the wire contract. Should not occur with a
/// correct collaborator; fatal for the request rather than silently
/// dropping classes, so a schedule is never partially rendered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedResponse {
    /// A listing is not in "Title: start - end" form.
    #[error("class listing '{listing}' is not in 'Title: start - end' form")]
    ListingFormat { listing: String },
    /// A day key is not one of M, T, W, R, F.
    #[error("unknown weekday key '{key}' in schedule")]
    UnknownDay { key: String },
    /// A listing's start or end time failed to parse.
    #[error("class listing '{listing}' has an invalid time: {source}")]
    ListingTime {
        listing: String,
        source: TimeParseError,
    },
    /// A parsed title has no entry in the schedule's CRN map.
    #[error("no CRN entry for class '{title}'")]
    MissingCrn { title: String },
    /// A sentinel string other than the lone timeout marker.
    #[error("unexpected sentinel '{value}' in schedule list")]
    UnexpectedSentinel { value: String },
}

/// Interpret a solver response.
///
/// Candidate schedules are walked weekday by weekday in M..F order; the
/// listings within a day keep the service's ordering. Each listing is split
/// once on `": "` into title and times, then once on `" - "` into start and
/// end, and both bounds are anchored onto that weekday's reference date.
pub fn parse(response: &SolverResponse) -> Result<SolverOutcome, MalformedResponse> {
    if response.schedules.is_empty() {
        return Ok(SolverOutcome::NoFeasible);
    }

    if let Some(value) = response.schedules.iter().find_map(|entry| match entry {
        ScheduleEntry::Sentinel(value) => Some(value),
        ScheduleEntry::Candidate(_) => None,
    }) {
        if response.schedules.len() == 1 && value == TIMEOUT_SENTINEL {
            return Ok(SolverOutcome::Timeout);
        }
        return Err(MalformedResponse::UnexpectedSentinel {
            value: value.clone(),
        });
    }

    let mut sets = Vec::with_capacity(response.schedules.len());
    for entry in &response.schedules {
        if let ScheduleEntry::Candidate(candidate) = entry {
            sets.push(parse_candidate(candidate)?);
        }
    }
    Ok(SolverOutcome::Schedules(sets))
}

fn parse_candidate(candidate: &CandidateSchedule) -> Result<ScheduleSet, MalformedResponse> {
    for key in candidate.days.keys() {
        if Weekday::from_letter(key).is_none() {
            return Err(MalformedResponse::UnknownDay { key: key.clone() });
        }
    }

    let mut events = Vec::new();
    for day in Weekday::ALL {
        let Some(listings) = candidate.days.get(day.letter()) else {
            continue;
        };
        for listing in listings {
            events.push(parse_listing(day, listing, candidate)?);
        }
    }
    Ok(events)
}

fn parse_listing(
    day: Weekday,
    listing: &str,
    candidate: &CandidateSchedule,
) -> Result<ClassEvent, MalformedResponse> {
    let malformed = || MalformedResponse::ListingFormat {
        listing: listing.to_string(),
    };

    let (title, times) = listing.split_once(": ").ok_or_else(malformed)?;
    let (start_display, end_display) = times.split_once(" - ").ok_or_else(malformed)?;

    let start = parse_time(day, start_display, listing)?;
    let end = parse_time(day, end_display, listing)?;

    let crn = candidate
        .crns
        .get(title)
        .ok_or_else(|| MalformedResponse::MissingCrn {
            title: title.to_string(),
        })?;

    Ok(ClassEvent {
        title: title.to_string(),
        start,
        end,
        crn: crn.clone(),
    })
}

fn parse_time(
    day: Weekday,
    display: &str,
    listing: &str,
) -> Result<NaiveDateTime, MalformedResponse> {
    let time = ClockTime::parse_display(display).map_err(|source| {
        MalformedResponse::ListingTime {
            listing: listing.to_string(),
            source,
        }
    })?;
    Ok(time::anchor(day, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn candidate(days: &[(&str, &[&str])], crns: &[(&str, &str)]) -> CandidateSchedule {
        CandidateSchedule {
            days: days
                .iter()
                .map(|(day, listings)| {
                    (
                        day.to_string(),
                        listings.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
            crns: crns
                .iter()
                .map(|(title, crn)| (title.to_string(), crn.to_string()))
                .collect(),
        }
    }

    fn response_of(candidates: Vec<CandidateSchedule>) -> SolverResponse {
        SolverResponse {
            schedules: candidates.into_iter().map(ScheduleEntry::Candidate).collect(),
        }
    }

    #[test]
    fn test_parse_single_listing() {
        let response = response_of(vec![candidate(
            &[("M", &["CS-1114: 9:00 AM - 9:50 AM"])],
            &[("CS-1114", "12345")],
        )]);

        let outcome = parse(&response).unwrap();
        let SolverOutcome::Schedules(sets) = outcome else {
            panic!("expected schedules");
        };
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 1);

        let event = &sets[0][0];
        assert_eq!(event.title, "CS-1114");
        assert_eq!(event.crn, "12345");
        let monday = Weekday::Monday.reference_date();
        assert_eq!(event.start.date(), monday);
        assert_eq!(event.start.time().format("%H:%M").to_string(), "09:00");
        assert_eq!(event.end.time().format("%H:%M").to_string(), "09:50");
    }

    #[test]
    fn test_parse_empty_is_no_feasible() {
        let response = SolverResponse { schedules: vec![] };
        assert_eq!(parse(&response), Ok(SolverOutcome::NoFeasible));
    }

    #[test]
    fn test_parse_timeout_sentinel() {
        let response = SolverResponse {
            schedules: vec![ScheduleEntry::Sentinel("timeout".to_string())],
        };
        assert_eq!(parse(&response), Ok(SolverOutcome::Timeout));
    }

    #[test]
    fn test_timeout_never_mistaken_for_empty() {
        let timeout = SolverResponse {
            schedules: vec![ScheduleEntry::Sentinel("timeout".to_string())],
        };
        let empty = SolverResponse { schedules: vec![] };
        assert_ne!(parse(&timeout), parse(&empty));
    }

    #[test]
    fn test_unexpected_sentinel_is_malformed() {
        let response = SolverResponse {
            schedules: vec![ScheduleEntry::Sentinel("oops".to_string())],
        };
        assert_eq!(
            parse(&response),
            Err(MalformedResponse::UnexpectedSentinel {
                value: "oops".to_string()
            })
        );
    }

    #[test]
    fn test_days_visited_in_week_order() {
        let response = response_of(vec![candidate(
            &[
                ("F", &["PHYS-2305: 1:00 PM - 2:15 PM"]),
                ("M", &["CS-1114: 9:00 AM - 9:50 AM"]),
            ],
            &[("CS-1114", "12345"), ("PHYS-2305", "67890")],
        )]);

        let SolverOutcome::Schedules(sets) = parse(&response).unwrap() else {
            panic!("expected schedules");
        };
        let titles: Vec<&str> = sets[0].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["CS-1114", "PHYS-2305"]);
    }

    #[test]
    fn test_within_day_order_preserved() {
        let response = response_of(vec![candidate(
            &[(
                "T",
                &[
                    "MATH-2114: 8:00 AM - 8:50 AM",
                    "CS-1114: 9:00 AM - 9:50 AM",
                ],
            )],
            &[("CS-1114", "12345"), ("MATH-2114", "54321")],
        )]);

        let SolverOutcome::Schedules(sets) = parse(&response).unwrap() else {
            panic!("expected schedules");
        };
        let titles: Vec<&str> = sets[0].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["MATH-2114", "CS-1114"]);
    }

    #[test]
    fn test_malformed_listing_surfaces_error() {
        let response = response_of(vec![candidate(
            &[("M", &["CS-1114 9:00 AM to 9:50 AM"])],
            &[("CS-1114", "12345")],
        )]);
        assert!(matches!(
            parse(&response),
            Err(MalformedResponse::ListingFormat { .. })
        ));
    }

    #[test]
    fn test_unknown_day_key_is_malformed() {
        let response = response_of(vec![candidate(
            &[("S", &["CS-1114: 9:00 AM - 9:50 AM"])],
            &[("CS-1114", "12345")],
        )]);
        assert_eq!(
            parse(&response),
            Err(MalformedResponse::UnknownDay {
                key: "S".to_string()
            })
        );
    }

    #[test]
    fn test_missing_crn_is_malformed() {
        let response = response_of(vec![candidate(
            &[("M", &["CS-1114: 9:00 AM - 9:50 AM"])],
            &[],
        )]);
        assert_eq!(
            parse(&response),
            Err(MalformedResponse::MissingCrn {
                title: "CS-1114".to_string()
            })
        );
    }

    #[test]
    fn test_bad_listing_time_is_malformed() {
        let response = response_of(vec![candidate(
            &[("M", &["CS-1114: 9:00 - 9:50 AM"])],
            &[("CS-1114", "12345")],
        )]);
        assert!(matches!(
            parse(&response),
            Err(MalformedResponse::ListingTime { .. })
        ));
    }

    #[test]
    fn test_schedule_order_preserved_across_candidates() {
        let first = candidate(
            &[("M", &["CS-1114: 9:00 AM - 9:50 AM"])],
            &[("CS-1114", "1")],
        );
        let second = candidate(
            &[("M", &["CS-1114: 10:00 AM - 10:50 AM"])],
            &[("CS-1114", "2")],
        );
        let response = response_of(vec![first, second]);

        let SolverOutcome::Schedules(sets) = parse(&response).unwrap() else {
            panic!("expected schedules");
        };
        assert_eq!(sets[0][0].crn, "1");
        assert_eq!(sets[1][0].crn, "2");
    }

    #[test]
    fn test_candidate_with_empty_days_yields_empty_set() {
        let response = response_of(vec![CandidateSchedule {
            days: HashMap::new(),
            crns: HashMap::new(),
        }]);
        let SolverOutcome::Schedules(sets) = parse(&response).unwrap() else {
            panic!("expected schedules");
        };
        assert!(sets[0].is_empty());
    }
}
