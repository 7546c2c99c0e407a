//! Dashboard main renderer
//!
//! The layout is also the hit-testing source for mouse interaction, so it is
//! computed by a pure function of the frame area.

use super::components::{charts, error_banner, footer, header, logs, ratio};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct DashboardLayout {
    pub header: Rect,
    /// Chart row: blocks-per-day on the left, transactions on the right.
    pub charts: (Rect, Rect),
    /// Full chart row, used by the error banner and placeholders.
    pub chart_row: Rect,
    pub ratio: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

/// Compute the dashboard layout for a frame area.
pub fn layout(area: Rect) -> DashboardLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    DashboardLayout {
        header: main_chunks[0],
        charts: (chart_chunks[0], chart_chunks[1]),
        chart_row: main_chunks[1],
        ratio: main_chunks[2],
        logs: main_chunks[3],
        footer: main_chunks[4],
    }
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let chunks = layout(f.area());

    header::render_header(f, chunks.header, state);

    if let Some(error) = &state.load.error {
        error_banner::render_error_banner(f, chunks.chart_row, error);
    } else if let Some(data) = &state.load.data {
        charts::render_line_charts(f, chunks.charts, state);
        ratio::render_ratio_gauge(f, chunks.ratio, &data.op_return_blocks_vs_blocks);
    } else {
        let placeholder = Paragraph::new(Line::from("Loading block statistics..."))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, chunks.chart_row);
    }

    logs::render_logs_panel(f, chunks.logs, state);
    footer::render_footer(f, chunks.footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_splits_the_chart_row_in_half() {
        let chunks = layout(Rect::new(0, 0, 120, 48));
        let (left, right) = chunks.charts;
        assert_eq!(left.y, right.y);
        assert!(left.x < right.x);
        assert_eq!(left.union(right), chunks.chart_row);
    }
}
