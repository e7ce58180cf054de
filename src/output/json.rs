//! JSON output formatting.

use serde::Serialize;
use serde_json::json;

use crate::core::StudySession;
use crate::error::StudyFlowError;

/// Format the session log as JSON.
///
/// # Errors
///
/// Returns `StudyFlowError::Parse` if serialization fails.
pub fn format_sessions_json(sessions: &[StudySession]) -> Result<String, StudyFlowError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `StudyFlowError::Parse` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyFlowError> {
    Ok(serde_json::to_string_pretty(value)?)
}
