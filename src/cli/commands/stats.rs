//! Statistics command implementation.

use chrono::Utc;

use super::open_registry;
use crate::cli::args::OutputFormat;
use crate::error::StudyFlowError;
use crate::output::to_json;
use crate::stats::{StatsPeriod, StatsReport};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or formatting fails.
pub fn stats(period: StatsPeriod, format: OutputFormat) -> Result<String, StudyFlowError> {
    let (registry, _store) = open_registry()?;

    let report = StatsReport::collect(registry.sessions(), period, Utc::now());

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => Ok(report.format()),
    }
}
