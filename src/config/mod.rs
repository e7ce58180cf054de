//! Configuration management for studyflow.
//!
//! This module handles loading configuration from `~/.studyflow/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Settings, TimerSettings};
