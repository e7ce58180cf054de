//! Session snapshot persistence.
//!
//! The session log is stored as one JSON file holding the full ordered
//! list: load it at startup, write it back after every registry change.
//! The registry never touches the file itself; commands drive the
//! load/save cycle around registry mutations.

use std::path::PathBuf;

use crate::config::Paths;
use crate::core::StudySession;
use crate::error::StudyFlowError;

/// Loads and saves the session list snapshot.
pub struct SnapshotStore {
    /// Path to the snapshot file.
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store at the default location, creating `~/.studyflow/`
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StudyFlowError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;

        Ok(Self {
            path: paths.sessions_file,
        })
    }

    /// Create a store at a custom path (for testing).
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the snapshot. A missing file is an empty session list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<StudySession>, StudyFlowError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(StudyFlowError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| StudyFlowError::Storage(format!("Failed to parse session snapshot: {e}")))
    }

    /// Write the full session list, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, sessions: &[StudySession]) -> Result<(), StudyFlowError> {
        let content = serde_json::to_string_pretty(sessions)?;
        std::fs::write(&self.path, content).map_err(StudyFlowError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NewSession, SessionRegistry};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SnapshotStore {
        SnapshotStore::with_path(dir.path().join("sessions.json"))
    }

    fn create(registry: &mut SessionRegistry, title: &str) -> StudySession {
        registry
            .create(NewSession {
                title: title.to_string(),
                category: "school".to_string(),
                focus_minutes: 25,
                break_minutes: 5,
                total_cycles: 2,
            })
            .unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut registry = SessionRegistry::new();
        let id = create(&mut registry, "Math").id;
        create(&mut registry, "Read");
        registry.increment_cycle(id);

        store.save(registry.sessions()).unwrap();

        let reloaded = SessionRegistry::restore(store.load().unwrap());
        assert_eq!(reloaded.sessions().len(), 2);

        // Ids, order, and cycle progress survive the round trip.
        let math = reloaded.get(id).unwrap();
        assert_eq!(math.title, "Math");
        assert_eq!(math.completed_cycles, 1);
        assert_eq!(reloaded.sessions()[1].title, "Read");
    }

    #[test]
    fn test_load_rejects_corrupt_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(dir.path().join("sessions.json"), "{not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(StudyFlowError::Storage(_))
        ));
    }
}
