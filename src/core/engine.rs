//! The countdown engine.
//!
//! A deterministic focus→break→idle state machine for one active session.
//! The engine owns no timer: the caller ticks it once per wall-clock
//! second and reacts to the returned [`TickEvent`]. Dropping the engine
//! (or simply not ticking it) is cancellation; no late tick can fire.

use uuid::Uuid;

use crate::core::session::StudySession;

/// Which interval of the cycle is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    Break,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The engine is idle or paused; nothing changed.
    Idle,
    /// One second elapsed within the current phase.
    Tick,
    /// The focus countdown finished; the break countdown began.
    BreakStarted,
    /// The break finished: one full cycle is done and the engine is back
    /// in the idle state, reset to the focus duration. Emitted exactly
    /// once per cycle, before idle is observable.
    CycleComplete(Uuid),
}

/// Countdown state machine for a single active session.
///
/// Configured from a session's focus/break durations at construction; it
/// holds only the session's id, never the session itself. Cycle counting
/// stays with the registry, which consumes [`TickEvent::CycleComplete`].
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    session_id: Uuid,
    focus_minutes: u32,
    break_minutes: u32,
    remaining_minutes: u32,
    remaining_seconds: u32,
    running: bool,
    on_break: bool,
}

impl CountdownEngine {
    /// Create an idle engine configured for `session`.
    #[must_use]
    pub fn for_session(session: &StudySession) -> Self {
        Self::new(session.id, session.focus_minutes, session.break_minutes)
    }

    /// Create an idle engine with explicit durations.
    #[must_use]
    pub const fn new(session_id: Uuid, focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            session_id,
            focus_minutes,
            break_minutes,
            remaining_minutes: focus_minutes,
            remaining_seconds: 0,
            running: false,
            on_break: false,
        }
    }

    /// Start (or resume) the countdown. Phase and remaining time are kept.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the countdown, preserving phase and remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Return to idle: focus phase, full focus duration, not running.
    ///
    /// Never emits a completion event.
    pub fn reset(&mut self) {
        self.running = false;
        self.on_break = false;
        self.remaining_minutes = self.focus_minutes;
        self.remaining_seconds = 0;
    }

    /// Advance the countdown by one second.
    ///
    /// A tick first handles an already-expired phase (so a zero-length
    /// phase transitions immediately instead of underflowing), otherwise
    /// decrements and transitions as part of the tick that reaches 0:00.
    /// A one-minute focus phase therefore enters the break on its 60th
    /// tick, and the full cycle completes after focus+break seconds.
    pub fn tick(&mut self) -> TickEvent {
        if !self.running {
            return TickEvent::Idle;
        }

        if self.time_over() {
            return self.advance_phase();
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        } else {
            self.remaining_minutes -= 1;
            self.remaining_seconds = 59;
        }

        if self.time_over() {
            self.advance_phase()
        } else {
            TickEvent::Tick
        }
    }

    fn time_over(&self) -> bool {
        self.remaining_minutes == 0 && self.remaining_seconds == 0
    }

    fn advance_phase(&mut self) -> TickEvent {
        if self.on_break {
            // Cycle done: back to idle, ready for the next run.
            self.running = false;
            self.on_break = false;
            self.remaining_minutes = self.focus_minutes;
            self.remaining_seconds = 0;
            TickEvent::CycleComplete(self.session_id)
        } else {
            self.on_break = true;
            self.remaining_minutes = self.break_minutes;
            self.remaining_seconds = 0;
            TickEvent::BreakStarted
        }
    }

    /// The session this engine is driving.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Current phase of the cycle.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.on_break {
            Phase::Break
        } else {
            Phase::Focus
        }
    }

    /// Whether the countdown is actively ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as (minutes, seconds).
    #[must_use]
    pub const fn remaining(&self) -> (u32, u32) {
        (self.remaining_minutes, self.remaining_seconds)
    }

    /// Fraction of the current phase already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = match self.phase() {
            Phase::Focus => u64::from(self.focus_minutes) * 60,
            Phase::Break => u64::from(self.break_minutes) * 60,
        };
        if total == 0 {
            return 1.0;
        }

        let remaining = u64::from(self.remaining_minutes) * 60 + u64::from(self.remaining_seconds);
        #[allow(clippy::cast_precision_loss)]
        {
            1.0 - (remaining as f64 / total as f64)
        }
    }

    /// Remaining time formatted as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format!("{:02}:{:02}", self.remaining_minutes, self.remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(focus: u32, brk: u32) -> CountdownEngine {
        CountdownEngine::new(Uuid::new_v4(), focus, brk)
    }

    #[test]
    fn test_idle_until_started() {
        let mut e = engine(25, 5);
        assert_eq!(e.tick(), TickEvent::Idle);
        assert_eq!(e.remaining(), (25, 0));
        assert!(!e.is_running());
    }

    #[test]
    fn test_focus_counts_down_with_second_wrap() {
        let mut e = engine(25, 5);
        e.start();

        assert_eq!(e.tick(), TickEvent::Tick);
        assert_eq!(e.remaining(), (24, 59));

        for _ in 0..59 {
            e.tick();
        }
        assert_eq!(e.remaining(), (24, 0));

        assert_eq!(e.tick(), TickEvent::Tick);
        assert_eq!(e.remaining(), (23, 59));
    }

    #[test]
    fn test_focus_transitions_to_break_exactly_once() {
        let mut e = engine(25, 5);
        e.start();

        let mut break_starts = 0;
        for _ in 0..25 * 60 {
            if e.tick() == TickEvent::BreakStarted {
                break_starts += 1;
            }
        }

        assert_eq!(break_starts, 1);
        assert_eq!(e.phase(), Phase::Break);
        assert_eq!(e.remaining(), (5, 0));
        assert!(e.is_running());
    }

    #[test]
    fn test_full_cycle_completes_after_focus_plus_break() {
        let session_id = Uuid::new_v4();
        let mut e = CountdownEngine::new(session_id, 1, 1);
        e.start();

        for _ in 0..59 {
            assert_eq!(e.tick(), TickEvent::Tick);
        }
        assert_eq!(e.tick(), TickEvent::BreakStarted);

        for _ in 0..59 {
            assert_eq!(e.tick(), TickEvent::Tick);
        }
        assert_eq!(e.tick(), TickEvent::CycleComplete(session_id));

        // Back to idle, reset to the focus duration.
        assert!(!e.is_running());
        assert_eq!(e.phase(), Phase::Focus);
        assert_eq!(e.remaining(), (1, 0));

        // No further events until restarted.
        assert_eq!(e.tick(), TickEvent::Idle);
    }

    #[test]
    fn test_pause_preserves_phase_and_remaining() {
        let mut e = engine(1, 5);
        e.start();
        for _ in 0..60 {
            e.tick();
        }
        assert_eq!(e.phase(), Phase::Break);

        e.toggle();
        assert!(!e.is_running());
        assert_eq!(e.tick(), TickEvent::Idle);
        assert_eq!(e.remaining(), (5, 0));
        assert_eq!(e.phase(), Phase::Break);

        e.toggle();
        assert_eq!(e.tick(), TickEvent::Tick);
        assert_eq!(e.remaining(), (4, 59));
    }

    #[test]
    fn test_reset_returns_to_idle_without_completing() {
        let mut e = engine(2, 5);
        e.start();
        for _ in 0..70 {
            e.tick();
        }

        e.reset();
        assert!(!e.is_running());
        assert_eq!(e.phase(), Phase::Focus);
        assert_eq!(e.remaining(), (2, 0));
    }

    #[test]
    fn test_zero_focus_transitions_immediately() {
        // Degenerate input the registry rejects at creation; the engine
        // treats it as an instantly expired phase, not an error.
        let mut e = engine(0, 5);
        e.start();

        assert_eq!(e.tick(), TickEvent::BreakStarted);
        assert_eq!(e.remaining(), (5, 0));
    }

    #[test]
    fn test_progress() {
        let mut e = engine(1, 5);
        e.start();
        assert!(e.progress().abs() < f64::EPSILON);

        for _ in 0..30 {
            e.tick();
        }
        assert!((e.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_remaining() {
        let mut e = engine(25, 5);
        assert_eq!(e.format_remaining(), "25:00");

        e.start();
        e.tick();
        assert_eq!(e.format_remaining(), "24:59");
    }
}
