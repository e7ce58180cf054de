//! Configuration settings for studyflow.
//!
//! Settings are loaded from `~/.studyflow/config.yaml`. Every field has a
//! default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};
use crate::error::StudyFlowError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Timer defaults.
    pub timer: TimerSettings,
}

/// Default durations and cycle count for new sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Focus duration in minutes used when `add` gets no `--focus` flag.
    #[serde(default = "default_focus")]
    pub focus_minutes: u32,
    /// Break duration in minutes for every session.
    #[serde(default = "default_break")]
    pub break_minutes: u32,
    /// Cycle count used when `add` gets no `--cycles` flag.
    #[serde(default = "default_cycles")]
    pub total_cycles: u32,
}

const fn default_focus() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_break() -> u32 {
    DEFAULT_BREAK_MINUTES
}

const fn default_cycles() -> u32 {
    1
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            break_minutes: default_break(),
            total_cycles: default_cycles(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(paths: &Paths) -> Result<Self, StudyFlowError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&paths.config_file).map_err(StudyFlowError::Io)?;
        serde_yaml::from_str(&content)
            .map_err(|e| StudyFlowError::Config(format!("Failed to parse config file: {e}")))
    }
}
