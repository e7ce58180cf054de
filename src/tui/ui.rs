//! UI rendering for the countdown screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::Phase;
use crate::tui::app::App;

/// Render the countdown screen.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Layout: header, timer, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Timer
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),    // Status
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status(frame, app, chunks[3]);
    render_hints(frame, chunks[4]);
}

fn phase_color(app: &App<'_>) -> Color {
    if app.session_done {
        Color::Green
    } else if !app.engine.is_running() {
        Color::Yellow
    } else {
        match app.engine.phase() {
            Phase::Focus => Color::Green,
            Phase::Break => Color::Cyan,
        }
    }
}

fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = format!(
        " {} — cycle {}/{} ",
        app.title,
        (app.completed_cycles + 1).min(app.total_cycles),
        app.total_cycles
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

fn render_timer(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let phase_label = if app.session_done {
        "Done"
    } else if !app.engine.is_running() {
        "Paused"
    } else {
        match app.engine.phase() {
            Phase::Focus => "Focus",
            Phase::Break => "Break",
        }
    };

    let timer = Paragraph::new(format!("\n{}\n{}", app.engine.format_remaining(), phase_label))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(phase_color(app))
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(timer, area);
}

fn render_progress(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (app.engine.progress() * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(app)))
        .percent(percent);

    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status = app.status.clone().unwrap_or_default();
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

fn render_hints(frame: &mut Frame<'_>, area: Rect) {
    let hints = Paragraph::new(" space:start/pause | r:reset | q:quit")
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(hints, area);
}
