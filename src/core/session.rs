//! Study session data model.
//!
//! A [`StudySession`] is the sole persistent entity: a user-defined unit
//! of study work with a focus duration, a break duration, and a number of
//! repetition cycles.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed break length in minutes used for newly created sessions.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Default focus length in minutes (classic Pomodoro).
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

/// A single study session.
///
/// Field names serialize in camelCase so session snapshots keep the shape
/// of the original browser-storage records (`focusTime`, `breakTime`,
/// `totalCycles`, ...). Fields absent from older snapshots fall back to
/// serde defaults: one cycle, empty category, zero completed cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    /// Unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    /// Free-text label for the session.
    pub title: String,
    /// Free-text category; empty string means uncategorized.
    #[serde(default)]
    pub category: String,
    /// Minutes per focus interval. Always > 0 for registry-created sessions.
    #[serde(rename = "focusTime")]
    pub focus_minutes: u32,
    /// Minutes per break interval.
    #[serde(rename = "breakTime", default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Number of focus+break cycles this session should complete (>= 1).
    #[serde(default = "default_total_cycles")]
    pub total_cycles: u32,
    /// Cycles completed so far. Never exceeds `total_cycles`.
    #[serde(default)]
    pub completed_cycles: u32,
    /// True once `completed_cycles` has reached `total_cycles`. Monotonic.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

const fn default_total_cycles() -> u32 {
    1
}

impl StudySession {
    /// Record one completed focus+break cycle.
    ///
    /// Returns true if this increment crossed the completion threshold.
    /// A no-op on already-completed sessions.
    pub(crate) fn record_cycle(&mut self) -> bool {
        if self.completed {
            return false;
        }

        self.completed_cycles += 1;
        if self.completed_cycles >= self.total_cycles {
            self.completed = true;
            return true;
        }

        false
    }

    /// Restore the model invariants after loading untrusted snapshot data.
    ///
    /// Clamps `completed_cycles` into range and re-derives `completed`,
    /// never un-completing a session that was stored as completed.
    pub(crate) fn enforce_invariants(&mut self) {
        if self.total_cycles == 0 {
            self.total_cycles = 1;
        }
        if self.completed_cycles > self.total_cycles {
            self.completed_cycles = self.total_cycles;
        }
        if self.completed_cycles >= self.total_cycles {
            self.completed = true;
        }
    }

    /// Total minutes of focus configured for this session.
    #[must_use]
    pub const fn target_minutes(&self) -> u32 {
        self.focus_minutes * self.total_cycles
    }

    /// Minutes of focus actually completed.
    #[must_use]
    pub const fn studied_minutes(&self) -> u32 {
        self.focus_minutes * self.completed_cycles
    }

    /// Creation time in the local timezone.
    #[must_use]
    pub fn created_at_local(&self) -> DateTime<Local> {
        self.created_at.with_timezone(&Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(total_cycles: u32) -> StudySession {
        StudySession {
            id: Uuid::new_v4(),
            title: "Math".to_string(),
            category: "school".to_string(),
            focus_minutes: 25,
            break_minutes: DEFAULT_BREAK_MINUTES,
            total_cycles,
            completed_cycles: 0,
            completed: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_cycle_until_complete() {
        let mut s = session(2);

        assert!(!s.record_cycle());
        assert_eq!(s.completed_cycles, 1);
        assert!(!s.completed);

        assert!(s.record_cycle());
        assert_eq!(s.completed_cycles, 2);
        assert!(s.completed);
    }

    #[test]
    fn test_record_cycle_idempotent_at_ceiling() {
        let mut s = session(1);
        assert!(s.record_cycle());

        // Further cycles change nothing.
        assert!(!s.record_cycle());
        assert!(!s.record_cycle());
        assert_eq!(s.completed_cycles, 1);
        assert!(s.completed);
    }

    #[test]
    fn test_enforce_invariants_clamps_overshoot() {
        let mut s = session(2);
        s.completed_cycles = 5;
        s.enforce_invariants();

        assert_eq!(s.completed_cycles, 2);
        assert!(s.completed);
    }

    #[test]
    fn test_enforce_invariants_keeps_completed_monotonic() {
        let mut s = session(3);
        s.completed = true;
        s.completed_cycles = 1;
        s.enforce_invariants();

        // A stored completed flag is never reverted.
        assert!(s.completed);
    }

    #[test]
    fn test_studied_and_target_minutes() {
        let mut s = session(4);
        s.record_cycle();

        assert_eq!(s.target_minutes(), 100);
        assert_eq!(s.studied_minutes(), 25);
    }

    #[test]
    fn test_deserialize_legacy_record() {
        // Early snapshots carried neither cycles nor category.
        let json = r#"{
            "id": "4f4df3e4-6f86-4f30-9b59-a9f08e1ba17e",
            "title": "Read",
            "focusTime": 25,
            "breakTime": 5,
            "createdAt": "2025-06-01T10:00:00Z"
        }"#;

        let s: StudySession = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_cycles, 1);
        assert_eq!(s.completed_cycles, 0);
        assert!(!s.completed);
        assert!(s.category.is_empty());
    }

    #[test]
    fn test_serialize_camel_case() {
        let s = session(1);
        let json = serde_json::to_string(&s).unwrap();

        assert!(json.contains("\"focusTime\":25"));
        assert!(json.contains("\"breakTime\":5"));
        assert!(json.contains("\"totalCycles\":1"));
        assert!(json.contains("\"completedCycles\":0"));
        assert!(json.contains("\"createdAt\""));
    }
}
