//! Dashboard line chart components
//!
//! Renders the two per-day time series with a shared crosshair highlight

use super::super::state::DashboardState;
use super::super::utils::format_month_year;
use crate::stats::{Series, SeriesPoint};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

/// Render both line charts into their layout slots.
pub fn render_line_charts(
    f: &mut Frame,
    areas: (Rect, Rect),
    state: &DashboardState,
) {
    let Some(data) = &state.load.data else {
        return;
    };

    render_line_chart(
        f,
        areas.0,
        &data.blocks_per_day,
        state.crosshair.blocks_per_day,
        "# of blocks",
        Color::Cyan,
    );
    render_line_chart(
        f,
        areas.1,
        &data.transactions_per_block_per_day,
        state.crosshair.transactions_per_block_per_day,
        "# of transactions",
        Color::Yellow,
    );
}

/// Render one time series as a line chart with an optional crosshair point.
fn render_line_chart(
    f: &mut Frame,
    area: Rect,
    series: &Series,
    selected: Option<SeriesPoint>,
    y_title: &str,
    color: Color,
) {
    let points: Vec<(f64, f64)> = series.data.iter().map(|pt| (pt.x, pt.y)).collect();
    let (x_min, x_max) = series.x_range().unwrap_or((0.0, 1.0));
    let y_max = series.y_max().max(1.0);

    let highlight: Vec<(f64, f64)> = selected.iter().map(|pt| (pt.x, pt.y)).collect();

    let mut datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points),
    ];
    if !highlight.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White))
                .data(&highlight),
        );
    }

    // The crosshair tooltip lives in the panel title.
    let title = match selected {
        Some(pt) => format!(
            "{} | {} \u{00b7} {:.0}",
            series.name,
            format_month_year(pt.x),
            pt.y
        ),
        None => series.name.clone(),
    };

    let x_labels = axis_date_labels(series);
    let y_labels = vec![
        "0".to_string(),
        format!("{:.0}", y_max / 2.0),
        format!("{:.0}", y_max),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .x_axis(
            Axis::default()
                .title("Day")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(y_title)
                .style(Style::default().fg(Color::DarkGray))
                .labels_alignment(ratatui::layout::Alignment::Right)
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// First, middle, and last point dates as "Mon YYYY" tick labels.
fn axis_date_labels(series: &Series) -> Vec<String> {
    let data = &series.data;
    match data.len() {
        0 => vec![],
        1 => vec![format_month_year(data[0].x)],
        len => vec![
            format_month_year(data[0].x),
            format_month_year(data[len / 2].x),
            format_month_year(data[len - 1].x),
        ],
    }
}
