//! Crosshair selection linking the two line charts
//!
//! Hovering either chart highlights the same date on both.

use crate::stats::{BlockStats, SeriesPoint};

/// Zero-or-one highlighted point per line chart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CrosshairSelection {
    pub blocks_per_day: Option<SeriesPoint>,
    pub transactions_per_block_per_day: Option<SeriesPoint>,
}

impl CrosshairSelection {
    /// Selects the point whose `x` exactly equals the hovered coordinate,
    /// independently in both line series, regardless of which chart the
    /// hover originated from.
    ///
    /// A series without a matching point keeps an empty selection; the
    /// x-domains of the two series are expected to coincide but this is not
    /// an enforced invariant.
    pub fn select_at(stats: &BlockStats, x: f64) -> Self {
        Self {
            blocks_per_day: stats.blocks_per_day.point_at(x),
            transactions_per_block_per_day: stats.transactions_per_block_per_day.point_at(x),
        }
    }

    /// Resets both selections to empty simultaneously.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.blocks_per_day.is_none() && self.transactions_per_block_per_day.is_none()
    }

    /// The highlighted x coordinate, if any chart has a selection.
    pub fn selected_x(&self) -> Option<f64> {
        self.blocks_per_day
            .or(self.transactions_per_block_per_day)
            .map(|pt| pt.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Series;

    fn stats() -> BlockStats {
        BlockStats {
            blocks_per_day: Series {
                name: "Blocks per day".to_string(),
                data: vec![
                    SeriesPoint { x: 1_000_000.0, y: 5.0 },
                    SeriesPoint { x: 2_000_000.0, y: 7.0 },
                ],
            },
            transactions_per_block_per_day: Series {
                name: "Transactions per block per day".to_string(),
                data: vec![
                    SeriesPoint { x: 1_000_000.0, y: 1200.0 },
                    SeriesPoint { x: 2_000_000.0, y: 1500.0 },
                ],
            },
            op_return_blocks_vs_blocks: Series {
                name: "OP_RETURN blocks vs blocks".to_string(),
                data: vec![SeriesPoint { x: 40.0, y: 0.0 }],
            },
        }
    }

    #[test]
    fn hover_selects_the_same_x_on_both_charts() {
        let selection = CrosshairSelection::select_at(&stats(), 1_000_000.0);
        assert_eq!(
            selection.blocks_per_day,
            Some(SeriesPoint { x: 1_000_000.0, y: 5.0 })
        );
        assert_eq!(
            selection.transactions_per_block_per_day,
            Some(SeriesPoint { x: 1_000_000.0, y: 1200.0 })
        );
    }

    #[test]
    fn missing_x_leaves_that_series_empty() {
        let mut stats = stats();
        stats.transactions_per_block_per_day.data.remove(0);

        let selection = CrosshairSelection::select_at(&stats, 1_000_000.0);
        assert!(selection.blocks_per_day.is_some());
        assert_eq!(selection.transactions_per_block_per_day, None);
        assert!(!selection.is_empty());
    }

    #[test]
    fn clear_resets_both_selections() {
        let mut selection = CrosshairSelection::select_at(&stats(), 2_000_000.0);
        assert!(!selection.is_empty());

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.blocks_per_day, None);
        assert_eq!(selection.transactions_per_block_per_day, None);
    }

    #[test]
    fn selected_x_reports_the_highlighted_coordinate() {
        let selection = CrosshairSelection::select_at(&stats(), 2_000_000.0);
        assert_eq!(selection.selected_x(), Some(2_000_000.0));
        assert_eq!(CrosshairSelection::default().selected_x(), None);
    }
}
