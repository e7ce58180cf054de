//! Command-line interface for studyflow.

pub mod args;
pub mod commands;
