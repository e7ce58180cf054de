//! Output formatting for studyflow.
//!
//! Every command renders either pretty (colored, human) or JSON output,
//! selected by the global `--output` flag.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::StudySession;
use crate::error::StudyFlowError;

pub use json::{format_sessions_json, to_json};
pub use pretty::{format_session_pretty, format_sessions_pretty, short_id};

/// Format the session log based on output format.
///
/// # Errors
///
/// Returns `StudyFlowError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[StudySession],
    format: OutputFormat,
) -> Result<String, StudyFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}

/// Format a single session based on output format.
///
/// # Errors
///
/// Returns `StudyFlowError::Parse` if JSON serialization fails.
pub fn format_session(
    session: &StudySession,
    format: OutputFormat,
) -> Result<String, StudyFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_pretty(session)),
        OutputFormat::Json => to_json(session),
    }
}
