//! Core domain logic for studyflow.
//!
//! The session data model, the registry that owns all sessions, and the
//! countdown engine that drives one active session's focus/break cycle.

pub mod duration;
mod engine;
mod registry;
mod session;

pub use engine::{CountdownEngine, Phase, TickEvent};
pub use registry::{CycleOutcome, NewSession, SessionRegistry};
pub use session::{StudySession, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};
