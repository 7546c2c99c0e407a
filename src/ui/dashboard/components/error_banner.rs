//! Dashboard error banner
//!
//! Shown in place of the charts when the dataset load failed

use crate::store::LoadError;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the load failure, verbatim.
pub fn render_error_banner(f: &mut Frame, area: Rect, error: &LoadError) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "! ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                error.display_text().to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press [R] to try again.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let banner = Paragraph::new(lines)
        .block(
            Block::default()
                .title("LOAD FAILED")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::uniform(1)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(banner, area);
}
