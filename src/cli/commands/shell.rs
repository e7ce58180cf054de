//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;
use crate::error::StudyFlowError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8 (it
/// always is for the supported shells).
pub fn completions(shell: Shell) -> Result<String, StudyFlowError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut buf = Vec::new();
    generate(shell, &mut cmd, name, &mut buf);

    String::from_utf8(buf)
        .map_err(|e| StudyFlowError::Config(format!("Completion script was not UTF-8: {e}")))
}
