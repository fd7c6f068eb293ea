//! Wire types for the schedule solver service.
//!
//! This file consolidates the JSON DTOs exchanged with the solver endpoint.
//! All types derive Serialize/Deserialize for JSON serialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::time::Weekday;

/// Sentinel string the solver returns as a singleton schedule list when the
/// search space was too large to finish.
pub const TIMEOUT_SENTINEL: &str = "timeout";

/// Preferred part of the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

/// A break window in the solver's 24-hour wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// Zero-padded "HH:MM:SS"
    pub begin_time: String,
    /// Zero-padded "HH:MM:SS"
    pub end_time: String,
}

/// Request body for a schedule generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Course codes, "SUBJ-NUM", 1 to 8 of them.
    pub courses: Vec<String>,
    /// Fully specified break windows, at most 8.
    pub breaks: Vec<BreakWindow>,
    /// Selected weekday letters.
    pub preferred_days: Vec<Weekday>,
    pub preferred_time: TimeOfDay,
    pub day_weight: f64,
    pub time_weight: f64,
}

/// One candidate schedule as returned by the solver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSchedule {
    /// Weekday letter -> ordered class listings, each formatted
    /// "Title: h:mm AM/PM - h:mm AM/PM".
    pub days: HashMap<String, Vec<String>>,
    /// Class title -> CRN.
    #[serde(default)]
    pub crns: HashMap<String, String>,
}

/// An element of the solver's schedule array, which mixes candidate objects
/// with bare sentinel strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleEntry {
    Sentinel(String),
    Candidate(CandidateSchedule),
}

/// Response body from a schedule generation call.
///
/// `schedules` is empty when no feasible schedule exists, the singleton
/// `["timeout"]` when the search timed out, and pre-ranked candidates
/// otherwise. Ranking order is the service's and is preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    pub schedules: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ScheduleRequest {
            courses: vec!["CS-1114".to_string()],
            breaks: vec![BreakWindow {
                begin_time: "11:00:00".to_string(),
                end_time: "12:00:00".to_string(),
            }],
            preferred_days: vec![Weekday::Monday, Weekday::Thursday],
            preferred_time: TimeOfDay::Afternoon,
            day_weight: 0.6,
            time_weight: 0.4,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["courses"][0], "CS-1114");
        assert_eq!(value["breaks"][0]["begin_time"], "11:00:00");
        assert_eq!(value["preferred_days"], serde_json::json!(["M", "R"]));
        assert_eq!(value["preferred_time"], "afternoon");
        assert_eq!(value["day_weight"], 0.6);
    }

    #[test]
    fn test_response_decodes_candidates() {
        let body = r#"{
            "schedules": [
                {
                    "days": {"M": ["CS-1114: 9:00 AM - 9:50 AM"]},
                    "crns": {"CS-1114": "12345"}
                }
            ]
        }"#;
        let response: SolverResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.schedules.len(), 1);
        match &response.schedules[0] {
            ScheduleEntry::Candidate(candidate) => {
                assert_eq!(candidate.days["M"].len(), 1);
                assert_eq!(candidate.crns["CS-1114"], "12345");
            }
            other => panic!("expected candidate, got {:?}", other),
        }
    }

    #[test]
    fn test_response_decodes_timeout_sentinel() {
        let response: SolverResponse =
            serde_json::from_str(r#"{"schedules": ["timeout"]}"#).unwrap();
        assert_eq!(
            response.schedules,
            vec![ScheduleEntry::Sentinel(TIMEOUT_SENTINEL.to_string())]
        );
    }

    #[test]
    fn test_response_decodes_empty() {
        let response: SolverResponse = serde_json::from_str(r#"{"schedules": []}"#).unwrap();
        assert!(response.schedules.is_empty());
    }

    #[test]
    fn test_candidate_missing_crns_defaults_empty() {
        let body = r#"{"schedules": [{"days": {}}]}"#;
        let response: SolverResponse = serde_json::from_str(body).unwrap();
        match &response.schedules[0] {
            ScheduleEntry::Candidate(candidate) => assert!(candidate.crns.is_empty()),
            other => panic!("expected candidate, got {:?}", other),
        }
    }
}
