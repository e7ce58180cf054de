use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::stats::StatsPeriod;

#[derive(Parser)]
#[command(name = "studyflow")]
#[command(about = "A Pomodoro-style study session tracker for the terminal")]
#[command(long_about = "studyflow - track study sessions from your terminal

Create study sessions with a focus duration and a cycle target, run them
with a live countdown timer, and review how your study time is spent.

QUICK START:
  studyflow add \"Linear algebra\" --focus 25m --cycles 4
  studyflow list                    Show the session log
  studyflow start <id>              Run the countdown for a session
  studyflow stats                   Focus minutes per category and weekday

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studyflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new study session
    ///
    /// # Examples
    ///
    ///   studyflow add "Linear algebra"
    ///   studyflow add "Read chapter 4" --focus 50m --cycles 2
    ///   studyflow add "Flashcards" --category languages
    #[command(alias = "a")]
    Add(AddArgs),

    /// List all study sessions
    ///
    /// Shows the full session log in creation order, with each session's
    /// short id, cycle progress, and category.
    #[command(alias = "ls")]
    List,

    /// Show one session in detail
    Show {
        /// Session id (or unique prefix)
        id: String,
    },

    /// Delete a study session
    ///
    /// Accepts a full session id or any unambiguous prefix of one, as
    /// shown by 'studyflow list'. Deleting an unknown id is not an error.
    #[command(alias = "rm")]
    Delete {
        /// Session id (or unique prefix)
        id: String,
    },

    /// Run the countdown timer for a session
    ///
    /// Opens a full-screen timer that counts down the session's focus
    /// time, then a break. Each completed focus+break cycle is recorded
    /// against the session and saved immediately.
    ///
    /// # Examples
    ///
    ///   studyflow start 4f4df3e4
    #[command(alias = "s")]
    Start {
        /// Session id (or unique prefix)
        id: String,
    },

    /// Show focus statistics
    ///
    /// Aggregates completed focus minutes per category and per weekday
    /// over the chosen period. Counts only cycles actually completed,
    /// not configured targets.
    Stats {
        /// Reporting period
        #[arg(short, long, value_enum, default_value = "week")]
        period: StatsPeriod,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Title of the session
    pub title: String,

    /// Focus duration (e.g. 25, 25m, 1h30m); defaults from config
    #[arg(short, long)]
    pub focus: Option<String>,

    /// Number of focus+break cycles; defaults from config
    #[arg(short = 'n', long)]
    pub cycles: Option<u32>,

    /// Category label for statistics
    #[arg(short, long)]
    pub category: Option<String>,
}
