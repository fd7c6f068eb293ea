//! Deduplicated class -> CRN listing for the displayed schedule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::response_parser::ClassEvent;

/// One row of the CRN listing shown next to the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrnEntry {
    pub class_name: String,
    pub crn: String,
}

/// Derive the (class, CRN) list for a schedule.
///
/// Entries are deduplicated by class name in stable insertion order, keeping
/// the first-encountered CRN. Events sharing an identical title collapse
/// into one entry even if their CRNs differ.
pub fn crn_entries(schedule: &[ClassEvent]) -> Vec<CrnEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for event in schedule {
        if seen.insert(event.title.as_str()) {
            entries.push(CrnEntry {
                class_name: event.title.clone(),
                crn: event.crn.clone(),
            });
        }
    }
    entries
}

/// Clipboard payload for the copy action, one "name: crn" line per entry.
pub fn format_clipboard(entries: &[CrnEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.class_name, entry.crn))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time::{anchor, ClockTime, Weekday};

    fn event(title: &str, crn: &str) -> ClassEvent {
        let start = anchor(Weekday::Monday, ClockTime::new(9, 0).unwrap());
        let end = anchor(Weekday::Monday, ClockTime::new(9, 50).unwrap());
        ClassEvent {
            title: title.to_string(),
            start,
            end,
            crn: crn.to_string(),
        }
    }

    #[test]
    fn test_dedup_keeps_first_crn() {
        let schedule = vec![event("CS-1114", "111"), event("CS-1114", "222")];
        let entries = crn_entries(&schedule);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].crn, "111");
    }

    #[test]
    fn test_insertion_order_stable() {
        let schedule = vec![
            event("PHYS-2305", "3"),
            event("CS-1114", "1"),
            event("PHYS-2305", "4"),
            event("MATH-2114", "2"),
        ];
        let entries = crn_entries(&schedule);
        let names: Vec<&str> = entries.iter().map(|e| e.class_name.as_str()).collect();
        assert_eq!(names, vec!["PHYS-2305", "CS-1114", "MATH-2114"]);
    }

    #[test]
    fn test_empty_schedule() {
        assert!(crn_entries(&[]).is_empty());
    }

    #[test]
    fn test_clipboard_format() {
        let entries = vec![
            CrnEntry {
                class_name: "CS-1114".to_string(),
                crn: "12345".to_string(),
            },
            CrnEntry {
                class_name: "MATH-2114".to_string(),
                crn: "54321".to_string(),
            },
        ];
        assert_eq!(
            format_clipboard(&entries),
            "CS-1114: 12345\nMATH-2114: 54321"
        );
    }
}
