//! Conversation records: rolling-history turns and journal entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Maximum number of turns kept in `chat_history.json`.
pub const HISTORY_WINDOW: usize = 50;

/// One user/assistant exchange in the rolling history.
///
/// The assistant side is serialized as `nova` to stay compatible with
/// existing history files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub nova: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, nova: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            nova: nova.into(),
        }
    }
}

/// One timestamped exchange in the append-only journal.
///
/// `timestamp` is kept as a string: journal files predate this service and
/// any ISO-8601 flavour already on disk must load back untouched. Missing
/// fields read as empty strings and unknown keys ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub nova: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl JournalEntry {
    /// Build an entry stamped with a local wall-clock time.
    pub fn at(when: NaiveDateTime, turn: &Turn) -> Self {
        Self {
            timestamp: when.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            user: turn.user.clone(),
            nova: turn.nova.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Keep only the most recent `window` turns, preserving order.
pub fn retain_window(turns: &mut Vec<Turn>, window: usize) {
    if turns.len() > window {
        let excess = turns.len() - window;
        turns.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_turn_serializes_with_nova_key() {
        let turn = Turn::new("hi", "hey you");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"user":"hi","nova":"hey you"}"#);
    }

    #[test]
    fn test_journal_entry_timestamp_format() {
        let when = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(21, 4, 5, 120)
            .unwrap();
        let entry = JournalEntry::at(when, &Turn::new("a", "b"));
        assert_eq!(entry.timestamp, "2024-03-09T21:04:05.000120");
        assert_eq!(entry.user, "a");
        assert_eq!(entry.nova, "b");
        assert!(entry.extra.is_empty());
    }

    #[test]
    fn test_journal_entry_tolerates_missing_and_extra_keys() {
        let entry: JournalEntry =
            serde_json::from_str(r#"{"timestamp": "2023-01-01T10:00:00", "user": "hi", "mood": "goofy"}"#)
                .unwrap();
        assert_eq!(entry.user, "hi");
        assert_eq!(entry.nova, "");
        assert_eq!(entry.extra["mood"], "goofy");

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["mood"], "goofy");
        assert_eq!(back["nova"], "");
    }

    #[test]
    fn test_retain_window_drops_oldest() {
        let mut turns: Vec<Turn> = (0..55)
            .map(|i| Turn::new(format!("u{i}"), format!("n{i}")))
            .collect();
        retain_window(&mut turns, HISTORY_WINDOW);
        assert_eq!(turns.len(), 50);
        assert_eq!(turns[0].user, "u5");
        assert_eq!(turns[49].user, "u54");
    }

    #[test]
    fn test_retain_window_short_list_untouched() {
        let mut turns = vec![Turn::new("only", "one")];
        retain_window(&mut turns, HISTORY_WINDOW);
        assert_eq!(turns.len(), 1);
    }
}
