//! Application state for the countdown screen.

use crate::core::{CountdownEngine, SessionRegistry, TickEvent};
use crate::error::StudyFlowError;
use crate::storage::SnapshotStore;
use uuid::Uuid;

/// State for one run of the countdown screen.
///
/// Owns the engine for the active session and borrows the registry and
/// snapshot store so each completed cycle is recorded and persisted
/// before the next one can start.
pub struct App<'a> {
    registry: &'a mut SessionRegistry,
    store: &'a SnapshotStore,
    /// The countdown state machine.
    pub engine: CountdownEngine,
    /// Title of the active session.
    pub title: String,
    /// Cycle target of the active session.
    pub total_cycles: u32,
    /// Cycles completed so far.
    pub completed_cycles: u32,
    /// Status message shown below the timer.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// True once the session reached its cycle target.
    pub session_done: bool,
}

impl<'a> App<'a> {
    /// Set up the countdown for the session with `id` and start it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the session does not exist and `Config` if
    /// it has already completed all its cycles.
    pub fn new(
        registry: &'a mut SessionRegistry,
        store: &'a SnapshotStore,
        id: Uuid,
    ) -> Result<Self, StudyFlowError> {
        let session = registry
            .get(id)
            .ok_or_else(|| StudyFlowError::NotFound(format!("No session with id {id}")))?;

        if session.completed {
            return Err(StudyFlowError::Config(format!(
                "Session \"{}\" is already completed",
                session.title
            )));
        }

        let mut engine = CountdownEngine::for_session(session);
        engine.start();
        let title = session.title.clone();
        let total_cycles = session.total_cycles;
        let completed_cycles = session.completed_cycles;

        Ok(Self {
            engine,
            title,
            total_cycles,
            completed_cycles,
            registry,
            store,
            status: Some("Press space to pause, r to reset, q to quit".to_string()),
            should_quit: false,
            session_done: false,
        })
    }

    /// Start/pause the countdown.
    pub fn toggle(&mut self) {
        if self.session_done {
            return;
        }
        self.engine.toggle();
        self.status = if self.engine.is_running() {
            None
        } else {
            Some("Paused — press space to resume".to_string())
        };
    }

    /// Reset the countdown to the start of the focus phase.
    ///
    /// Cycle progress already recorded in the registry is untouched.
    pub fn reset(&mut self) {
        if self.session_done {
            return;
        }
        self.engine.reset();
        self.status = Some("Reset — press space to start".to_string());
    }

    /// Advance the engine by one second and record completed cycles.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated session log fails.
    pub fn tick(&mut self) -> Result<(), StudyFlowError> {
        match self.engine.tick() {
            TickEvent::Idle | TickEvent::Tick => {}
            TickEvent::BreakStarted => {
                self.status = Some("Focus done — break time".to_string());
            }
            TickEvent::CycleComplete(id) => {
                // Record and persist before the next cycle can start.
                if let Some(outcome) = self.registry.increment_cycle(id) {
                    self.completed_cycles = outcome.session.completed_cycles;
                    self.store.save(self.registry.sessions())?;

                    if outcome.just_completed {
                        self.session_done = true;
                        self.status =
                            Some("Session complete! Press q to leave the timer".to_string());
                    } else {
                        self.status = Some(format!(
                            "Cycle {}/{} done — press space to start the next one",
                            outcome.session.completed_cycles, outcome.session.total_cycles
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
