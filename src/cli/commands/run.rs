//! The start command: run the countdown timer for one session.

use colored::Colorize;

use super::{open_registry, resolve_id};
use crate::cli::args::OutputFormat;
use crate::error::StudyFlowError;
use crate::output::to_json;
use crate::tui;

/// Execute the start command.
///
/// Runs the full-screen countdown until the user quits or the session
/// completes, then reports the session's final state.
///
/// # Errors
///
/// Returns an error if the session is unknown or already completed, or
/// if the terminal or storage fails.
pub fn start(id: &str, format: OutputFormat) -> Result<String, StudyFlowError> {
    let (mut registry, store) = open_registry()?;
    let resolved = resolve_id(&registry, id)?;

    tui::run(&mut registry, &store, resolved)?;

    let session = registry
        .get(resolved)
        .ok_or_else(|| StudyFlowError::NotFound(format!("No session matching '{id}'")))?;

    match format {
        OutputFormat::Json => to_json(session),
        OutputFormat::Pretty => {
            let progress = format!(
                "{}/{} cycles",
                session.completed_cycles, session.total_cycles
            );
            if session.completed {
                Ok(format!(
                    "{} \"{}\" complete ({progress})",
                    "✓".green(),
                    session.title
                ))
            } else {
                Ok(format!(
                    "Stopped \"{}\" at {progress}. Resume with: studyflow start {}",
                    session.title,
                    &session.id.to_string()[..8]
                ))
            }
        }
    }
}
