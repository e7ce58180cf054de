//! Session management commands: add, list, delete.

use colored::Colorize;

use super::{open_registry, resolve_id, session_line};
use crate::cli::args::{AddArgs, OutputFormat};
use crate::config::{Paths, Settings};
use crate::core::duration::{format_minutes, parse_minutes};
use crate::core::NewSession;
use crate::error::StudyFlowError;
use crate::output::{format_session, format_sessions, to_json};

/// Execute the add command.
///
/// # Errors
///
/// Returns an error for an unparseable focus duration, invalid session
/// parameters, or a storage failure.
pub fn add(args: AddArgs, format: OutputFormat) -> Result<String, StudyFlowError> {
    let settings = Settings::load(&Paths::new()?)?;

    let focus_minutes = match args.focus {
        Some(ref input) => parse_minutes(input).ok_or_else(|| {
            StudyFlowError::InvalidSession(format!("Invalid focus duration: {input}"))
        })?,
        None => settings.timer.focus_minutes,
    };

    let (mut registry, store) = open_registry()?;
    let session = registry.create(NewSession {
        title: args.title,
        category: args.category.unwrap_or_default(),
        focus_minutes,
        break_minutes: settings.timer.break_minutes,
        total_cycles: args.cycles.unwrap_or(settings.timer.total_cycles),
    })?;
    store.save(registry.sessions())?;

    match format {
        OutputFormat::Json => to_json(&session),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(format!("Session created: {}", session.title.bold()));
            output.push(format!(
                "   {} focus × {} cycle{}",
                format_minutes(session.focus_minutes),
                session.total_cycles,
                if session.total_cycles == 1 { "" } else { "s" }
            ));
            output.push(String::new());
            output.push(
                format!("   Start it with: studyflow start {}", &session.id.to_string()[..8])
                    .dimmed()
                    .to_string(),
            );
            Ok(output.join("\n"))
        }
    }
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or formatting fails.
pub fn list(format: OutputFormat) -> Result<String, StudyFlowError> {
    let (registry, _store) = open_registry()?;
    format_sessions(registry.sessions(), format)
}

/// Execute the delete command.
///
/// Deleting an id that matches nothing reports it without failing; the
/// registry treats unknown ids as a no-op.
///
/// # Errors
///
/// Returns an error for an ambiguous id prefix or a storage failure.
pub fn delete(id: &str, format: OutputFormat) -> Result<String, StudyFlowError> {
    let (mut registry, store) = open_registry()?;

    let resolved = match resolve_id(&registry, id) {
        Ok(resolved) => resolved,
        Err(StudyFlowError::NotFound(msg)) => {
            return match format {
                OutputFormat::Json => to_json(&serde_json::json!({ "deleted": false })),
                OutputFormat::Pretty => Ok(format!("{msg}. Nothing deleted.")),
            };
        }
        Err(e) => return Err(e),
    };

    let line = session_line(&registry, resolved).unwrap_or_default();
    let deleted = registry.delete(resolved);
    if deleted {
        store.save(registry.sessions())?;
    }

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "deleted": deleted })),
        OutputFormat::Pretty => Ok(format!("Deleted: {line}")),
    }
}

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the session cannot be found or formatting fails.
pub fn show(id: &str, format: OutputFormat) -> Result<String, StudyFlowError> {
    let (registry, _store) = open_registry()?;
    let resolved = resolve_id(&registry, id)?;
    let session = registry
        .get(resolved)
        .ok_or_else(|| StudyFlowError::NotFound(format!("No session matching '{id}'")))?;
    format_session(session, format)
}
