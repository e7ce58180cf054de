//! studyflow - a Pomodoro-style study session tracker for the terminal
//!
//! Study sessions live in an in-memory registry backed by a JSON snapshot
//! file; a countdown engine drives one session at a time through its
//! focus/break cycles and reports completed cycles back to the registry.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod stats;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyFlowError;
