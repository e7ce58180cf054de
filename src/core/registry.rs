//! The session registry.
//!
//! Canonical, insertion-ordered collection of study sessions and the only
//! place session state is mutated after creation.

use chrono::Utc;
use uuid::Uuid;

use crate::core::session::StudySession;
use crate::error::StudyFlowError;

/// Parameters for creating a session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub title: String,
    pub category: String,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub total_cycles: u32,
}

/// Result of a successful cycle increment.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    /// The session after the increment.
    pub session: StudySession,
    /// True if this increment crossed the completion threshold.
    pub just_completed: bool,
}

/// Insertion-ordered collection of study sessions.
///
/// The registry owns the authoritative session instances. Callers get
/// clones for display and drive persistence by saving [`Self::sessions`]
/// after every mutation.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Vec<StudySession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Rebuild a registry from snapshot records.
    ///
    /// Ids, timestamps, and cycle progress are preserved; records that
    /// violate the cycle invariants (hand-edited snapshots) are clamped
    /// back into range rather than rejected.
    #[must_use]
    pub fn restore(mut records: Vec<StudySession>) -> Self {
        for record in &mut records {
            record.enforce_invariants();
        }
        Self { sessions: records }
    }

    /// Create a new session and append it to the collection.
    ///
    /// Returns a clone of the stored session for immediate display.
    ///
    /// # Errors
    ///
    /// Returns `StudyFlowError::InvalidSession` for a zero focus or break
    /// duration or a zero cycle count.
    pub fn create(&mut self, new: NewSession) -> Result<StudySession, StudyFlowError> {
        if new.focus_minutes == 0 {
            return Err(StudyFlowError::InvalidSession(
                "focus time must be at least 1 minute".to_string(),
            ));
        }
        if new.break_minutes == 0 {
            return Err(StudyFlowError::InvalidSession(
                "break time must be at least 1 minute".to_string(),
            ));
        }
        if new.total_cycles == 0 {
            return Err(StudyFlowError::InvalidSession(
                "a session needs at least 1 cycle".to_string(),
            ));
        }

        let session = StudySession {
            id: Uuid::new_v4(),
            title: new.title,
            category: new.category,
            focus_minutes: new.focus_minutes,
            break_minutes: new.break_minutes,
            total_cycles: new.total_cycles,
            completed_cycles: 0,
            completed: false,
            created_at: Utc::now(),
        };

        self.sessions.push(session.clone());
        Ok(session)
    }

    /// All sessions in insertion order.
    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// Look up a session by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&StudySession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Record one completed focus+break cycle for the session with `id`.
    ///
    /// The only path by which `completed_cycles` or `completed` change
    /// after creation. Returns `None` (a silent no-op) for unknown ids
    /// and for sessions that are already completed.
    pub fn increment_cycle(&mut self, id: Uuid) -> Option<CycleOutcome> {
        let session = self.sessions.iter_mut().find(|s| s.id == id)?;
        if session.completed {
            return None;
        }

        let just_completed = session.record_cycle();
        Some(CycleOutcome {
            session: session.clone(),
            just_completed,
        })
    }

    /// Remove the session with `id`.
    ///
    /// Returns false (a no-op, not an error) if no such session exists.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        self.sessions.len() < before
    }
}
