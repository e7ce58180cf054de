//! Event handling for the countdown screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::StudyFlowError;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the countdown screen.
    Quit,
    /// Start/pause the countdown.
    Toggle,
    /// Reset the countdown to the focus start.
    Reset,
}

/// Poll for terminal events for at most `timeout`.
///
/// Returns an action to take, or None if no action is needed. The short
/// timeout keeps the caller's tick loop responsive.
///
/// # Errors
///
/// Returns an error if event polling or reading fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, StudyFlowError> {
    if !event::poll(timeout)
        .map_err(|e| StudyFlowError::Config(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    if let Event::Key(key) = event::read()
        .map_err(|e| StudyFlowError::Config(format!("Event read failed: {e}")))?
    {
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),
            KeyCode::Char(' ' | 'p') | KeyCode::Enter => return Ok(Some(Action::Toggle)),
            KeyCode::Char('r') => return Ok(Some(Action::Reset)),
            _ => {}
        }
    }

    Ok(None)
}
