//! Study statistics.
//!
//! Read-only aggregates over the session log: focus minutes per category
//! and per weekday within a reporting period. These consume the
//! registry's session view; they never mutate it.

pub mod visualization;

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::core::duration::format_minutes;
use crate::core::StudySession;
use visualization::{render_bar_chart, render_sparkline};

/// Label shown for sessions without a category.
const UNCATEGORIZED: &str = "(uncategorized)";

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Reporting time period, by session creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    #[serde(rename = "all")]
    #[value(name = "all")]
    AllTime,
}

impl StatsPeriod {
    /// The earliest creation time included in this period, if bounded.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let today_start = now.date_naive().and_hms_opt(0, 0, 0)?;
        let today_start = DateTime::from_naive_utc_and_offset(today_start, Utc);

        match self {
            Self::Today => Some(today_start),
            Self::Week => Some(today_start - Duration::days(6)),
            Self::Month => Some(today_start - Duration::days(29)),
            Self::AllTime => None,
        }
    }

    /// Display name for report headers.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::AllTime => "All time",
        }
    }
}

/// Aggregated focus statistics for a period.
///
/// Minutes count time actually studied (`focus × completed cycles`), not
/// the configured target; the session listing shows targets per session.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// The reporting period.
    pub period: StatsPeriod,
    /// Number of sessions created in the period.
    pub sessions: usize,
    /// Completed focus minutes across those sessions.
    pub total_minutes: u64,
    /// Completed focus minutes per category, alphabetical.
    pub by_category: BTreeMap<String, u64>,
    /// Completed focus minutes per weekday of creation, Monday first.
    pub by_weekday: [u64; 7],
}

impl StatsReport {
    /// Aggregate `sessions` over `period`, relative to `now`.
    #[must_use]
    pub fn collect(sessions: &[StudySession], period: StatsPeriod, now: DateTime<Utc>) -> Self {
        let cutoff = period.cutoff(now);

        let mut report = Self {
            period,
            sessions: 0,
            total_minutes: 0,
            by_category: BTreeMap::new(),
            by_weekday: [0; 7],
        };

        for session in sessions {
            if cutoff.is_some_and(|c| session.created_at < c) {
                continue;
            }

            let minutes = u64::from(session.studied_minutes());
            report.sessions += 1;
            report.total_minutes += minutes;

            let category = if session.category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                session.category.clone()
            };
            *report.by_category.entry(category).or_insert(0) += minutes;

            let weekday = session.created_at.weekday().num_days_from_monday() as usize;
            report.by_weekday[weekday] += minutes;
        }

        report
    }

    /// Render the report for terminal display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn format(&self) -> String {
        let mut output = Vec::new();

        output.push(format!("Focus report — {}", self.period.display_name()).bold().to_string());
        output.push("═".repeat(50));
        output.push(format!(
            "Sessions: {}   Studied: {}",
            self.sessions,
            format_minutes(self.total_minutes.min(u64::from(u32::MAX)) as u32)
        ));

        if self.total_minutes == 0 {
            output.push(String::new());
            output.push("No completed focus time in this period.".dimmed().to_string());
            return output.join("\n");
        }

        output.push(String::new());
        output.push("By category (minutes)".to_string());
        let data: Vec<(String, u64)> = self
            .by_category
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        output.push(render_bar_chart(&data, 16, 24));

        output.push(String::new());
        output.push(format!(
            "By weekday:  {}  {}",
            WEEKDAY_LABELS.join(" "),
            render_sparkline(&self.by_weekday)
        ));

        output.join("\n")
    }
}
