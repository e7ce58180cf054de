//! Path resolution for studyflow configuration and data files.
//!
//! All studyflow data is stored in `~/.studyflow/`:
//! - `config.yaml` - Main configuration file
//! - `sessions.json` - Snapshot of the session log

use std::path::PathBuf;

use crate::error::StudyFlowError;

/// Paths to studyflow configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studyflow/`
    pub root: PathBuf,
    /// Config file: `~/.studyflow/config.yaml`
    pub config_file: PathBuf,
    /// Session snapshot: `~/.studyflow/sessions.json`
    pub sessions_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StudyFlowError> {
        let home = std::env::var("HOME")
            .map_err(|_| StudyFlowError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".studyflow")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            sessions_file: root.join("sessions.json"),
            root,
        }
    }

    /// Ensure the data directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StudyFlowError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                StudyFlowError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
