//! Full-screen countdown timer.
//!
//! Built with ratatui and crossterm. The main loop is also the tick
//! scheduler: it polls for key events with a short timeout and advances
//! the engine once per elapsed wall-clock second. Leaving the loop tears
//! the scheduler down with it, so no tick can fire after quit.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use uuid::Uuid;

use crate::core::SessionRegistry;
use crate::error::StudyFlowError;
use crate::storage::SnapshotStore;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Run the countdown screen for the session with `id`.
///
/// Completed cycles are recorded in `registry` and written through
/// `store` as they happen, so quitting mid-session loses at most the
/// cycle in flight.
///
/// # Errors
///
/// Returns an error if the session is unknown or already completed, if
/// the terminal cannot be set up, or if persisting progress fails.
pub fn run(
    registry: &mut SessionRegistry,
    store: &SnapshotStore,
    id: Uuid,
) -> Result<(), StudyFlowError> {
    let mut app = App::new(registry, store, id)?;

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StudyFlowError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StudyFlowError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)
        .map_err(|e| StudyFlowError::Config(format!("Failed to create terminal: {e}")))?;

    let result = run_app(terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();

    result
}

/// Run the main loop: draw, handle input, tick once per second.
fn run_app<B: Backend>(mut terminal: Terminal<B>, app: &mut App<'_>) -> Result<(), StudyFlowError> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudyFlowError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(POLL_TIMEOUT)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle(),
                event::Action::Reset => app.reset(),
            }
        }

        // Catch-up is deliberately not attempted: one tick per elapsed
        // interval boundary, missed time is simply not counted.
        if last_tick.elapsed() >= TICK_INTERVAL {
            app.tick()?;
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
