// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Capped, most-recent-first activity log.

use crate::models::Activity;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of activities retained; older entries are evicted first.
pub const LEDGER_CAPACITY: usize = 50;

/// Activity log, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Activity>", into = "Vec<Activity>")]
pub struct ActivityLedger {
    entries: VecDeque<Activity>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front and evict anything past [`LEDGER_CAPACITY`].
    pub fn append(&mut self, activity: Activity) {
        self.entries.push_front(activity);
        self.entries.truncate(LEDGER_CAPACITY);
    }

    /// Snapshot of the entries, newest first.
    pub fn list(&self) -> Vec<Activity> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Activity>> for ActivityLedger {
    /// Adopt an already newest-first list, applying the cap.
    fn from(mut activities: Vec<Activity>) -> Self {
        activities.truncate(LEDGER_CAPACITY);
        Self {
            entries: activities.into(),
        }
    }
}

impl From<ActivityLedger> for Vec<Activity> {
    fn from(ledger: ActivityLedger) -> Self {
        ledger.entries.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityEvent, ActivityKind};
    use chrono::Utc;

    fn activity(n: u32) -> Activity {
        ActivityEvent::new(ActivityKind::Visit, format!("activity {}", n))
            .into_activity("user", n, Utc::now())
    }

    #[test]
    fn test_append_puts_newest_first() {
        let mut ledger = ActivityLedger::new();
        ledger.append(activity(1));
        ledger.append(activity(2));

        let points: Vec<u32> = ledger.iter().map(|a| a.points).collect();
        assert_eq!(points, vec![2, 1]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut ledger = ActivityLedger::new();
        for n in 1..=51 {
            ledger.append(activity(n));
            assert!(ledger.len() <= LEDGER_CAPACITY);
        }

        let list = ledger.list();
        assert_eq!(list.len(), 50);
        assert_eq!(list[0].points, 51);
        assert_eq!(list[49].points, 2);
        assert!(!list.iter().any(|a| a.points == 1));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut ledger = ActivityLedger::new();
        ledger.append(activity(7));
        let json = serde_json::to_value(&ledger).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["points"], 7);
    }

    #[test]
    fn test_oversized_stored_list_is_capped_on_load() {
        let list: Vec<Activity> = (0..60).map(activity).collect();
        let json = serde_json::to_string(&list).unwrap();
        let ledger: ActivityLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger.len(), LEDGER_CAPACITY);
    }

    #[test]
    fn test_from_vec_applies_cap() {
        let list: Vec<Activity> = (0..60).map(activity).collect();
        let ledger = ActivityLedger::from(list);
        assert_eq!(ledger.len(), LEDGER_CAPACITY);
        assert_eq!(ledger.list()[0].points, 0);
    }
}
