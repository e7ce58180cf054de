//! Pretty (human-readable, colored) output formatting.

use colored::Colorize;

use crate::core::duration::format_minutes;
use crate::core::StudySession;

/// Short id prefix shown in listings; enough to address a session.
const SHORT_ID_LEN: usize = 8;

/// First characters of a session id, for compact display.
#[must_use]
pub fn short_id(session: &StudySession) -> String {
    session.id.to_string().chars().take(SHORT_ID_LEN).collect()
}

/// Format the session log as a pretty table.
#[must_use]
pub fn format_sessions_pretty(sessions: &[StudySession]) -> String {
    if sessions.is_empty() {
        return "No study sessions yet.\n\nCreate one with: studyflow add \"Title\"".to_string();
    }

    let mut output = format!("Study sessions ({})\n", sessions.len());
    output.push_str(&"─".repeat(72));
    output.push('\n');

    for session in sessions {
        let status_icon = if session.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let mut line = format!(
            "{} {}  {}",
            status_icon,
            short_id(session).dimmed(),
            session.title.bold()
        );

        if !session.category.is_empty() {
            line.push_str(&format!("  {}", format!("#{}", session.category).cyan()));
        }

        line.push_str(&format!(
            "  {}",
            format!(
                "{}m × {}/{}",
                session.focus_minutes, session.completed_cycles, session.total_cycles
            )
            .yellow()
        ));

        line.push_str(&format!(
            "  {}",
            session
                .created_at_local()
                .format("%Y-%m-%d")
                .to_string()
                .dimmed()
        ));

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single session with full detail.
#[must_use]
pub fn format_session_pretty(session: &StudySession) -> String {
    let status = if session.completed {
        "Completed".green().to_string()
    } else {
        format!(
            "In progress ({}/{} cycles)",
            session.completed_cycles, session.total_cycles
        )
    };

    let mut output = format!("{}\n", session.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), session.id));
    if !session.category.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Category".dimmed(), session.category));
    }
    output.push_str(&format!(
        "  {}: {} focus / {} break\n",
        "Durations".dimmed(),
        format_minutes(session.focus_minutes),
        format_minutes(session.break_minutes)
    ));
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), status));
    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        session.created_at_local().format("%Y-%m-%d %H:%M")
    ));

    output
}
