//! Op-return ratio component
//!
//! The radial-chart analog: category weights rendered as a proportion gauge

use crate::stats::Series;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge};

/// Render the op-return blocks vs. total blocks ratio.
///
/// The series carries categorical weights in `x`; the first category is the
/// op-return count and the weights together cover all blocks.
pub fn render_ratio_gauge(f: &mut Frame, area: Rect, series: &Series) {
    let (op_return, total) = ratio_weights(series);
    let percent = if total > 0.0 {
        (op_return / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let title = if series.name.is_empty() {
        "OP_RETURN blocks vs blocks".to_string()
    } else {
        series.name.clone()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent as u16)
        .label(format!(
            "{:.0} op-return / {:.0} blocks ({:.2}%)",
            op_return, total, percent
        ));

    f.render_widget(gauge, area);
}

/// The op-return weight and the summed weight of all categories.
fn ratio_weights(series: &Series) -> (f64, f64) {
    let op_return = series.data.first().map(|pt| pt.x).unwrap_or(0.0);
    let total: f64 = series.data.iter().map(|pt| pt.x).sum();
    (op_return, total)
}
