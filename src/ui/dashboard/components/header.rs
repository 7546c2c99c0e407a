//! Dashboard header component
//!
//! Renders the title and load status gauge

use super::super::state::DashboardState;
use super::super::utils::format_uptime;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and load status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let uptime = format_uptime(state.start_time.elapsed().as_secs());
    let title_text = format!(
        "BLOCKSTATS v{} | {} | up {}",
        version, state.environment, uptime
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an in-flight load animates, terminal states are static
    let (progress_text, gauge_color, progress_percent) = if state.load.loading {
        // Animated loading gauge - loops every 20 ticks
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            "LOADING - Fetching block statistics".to_string(),
            Color::LightBlue,
            progress,
        )
    } else if state.load.is_loaded() {
        let days = state
            .load
            .data
            .as_ref()
            .map(|data| data.blocks_per_day.data.len())
            .unwrap_or(0);
        (
            format!("LOADED - {} days of data", days),
            Color::LightGreen,
            100,
        )
    } else if state.load.error.is_some() {
        (
            "FAILED - press [R] to reload".to_string(),
            Color::LightRed,
            100,
        )
    } else {
        ("IDLE - waiting for dispatch".to_string(), Color::DarkGray, 0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
