//! Block statistics payload model
//!
//! The shapes returned by the statistics API, plus the unit normalization
//! applied once at load time.

use serde::Deserialize;

/// A single chart data point.
///
/// After [`BlockStats::scale_to_millis`] has run, `x` is an epoch timestamp
/// in milliseconds for the time series, or a categorical weight for the
/// op-return ratio series.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// A named sequence of points for one chart, ordered by ascending `x`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub name: String,
    pub data: Vec<SeriesPoint>,
}

impl Series {
    /// The point whose `x` exactly equals the given coordinate, if any.
    pub fn point_at(&self, x: f64) -> Option<SeriesPoint> {
        self.data.iter().copied().find(|pt| pt.x == x)
    }

    /// The point closest to the given `x` by absolute distance.
    pub fn nearest_point(&self, x: f64) -> Option<SeriesPoint> {
        self.data
            .iter()
            .copied()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }

    /// Smallest and largest `x` value. Relies on the ascending-x ordering.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        match (self.data.first(), self.data.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// Largest `y` value in the series.
    pub fn y_max(&self) -> f64 {
        self.data.iter().map(|pt| pt.y).fold(0.0, f64::max)
    }
}

/// The full dataset rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStats {
    /// Number of blocks mined per day.
    pub blocks_per_day: Series,
    /// Average number of transactions per block, per day.
    pub transactions_per_block_per_day: Series,
    /// Categorical weights: op-return blocks vs. all blocks.
    pub op_return_blocks_vs_blocks: Series,
}

impl BlockStats {
    /// Converts every `x` from epoch seconds (as reported by the API) to
    /// milliseconds, in place. Runs exactly once, during the load step, so
    /// the scaled values stay stable across re-renders.
    pub fn scale_to_millis(&mut self) {
        for series in [
            &mut self.blocks_per_day,
            &mut self.transactions_per_block_per_day,
            &mut self.op_return_blocks_vs_blocks,
        ] {
            for point in series.data.iter_mut() {
                point.x *= 1000.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> BlockStats {
        BlockStats {
            blocks_per_day: Series {
                name: "Blocks per day".to_string(),
                data: vec![
                    SeriesPoint { x: 1000.0, y: 5.0 },
                    SeriesPoint { x: 2000.0, y: 7.0 },
                ],
            },
            transactions_per_block_per_day: Series {
                name: "Transactions per block per day".to_string(),
                data: vec![
                    SeriesPoint { x: 1000.0, y: 1200.0 },
                    SeriesPoint { x: 2000.0, y: 1500.0 },
                ],
            },
            op_return_blocks_vs_blocks: Series {
                name: "OP_RETURN blocks vs blocks".to_string(),
                data: vec![
                    SeriesPoint { x: 40.0, y: 0.0 },
                    SeriesPoint { x: 160.0, y: 0.0 },
                ],
            },
        }
    }

    #[test]
    fn scale_to_millis_multiplies_every_x_by_exactly_1000() {
        let mut stats = sample_stats();
        stats.scale_to_millis();

        let xs: Vec<f64> = stats.blocks_per_day.data.iter().map(|pt| pt.x).collect();
        assert_eq!(xs, vec![1_000_000.0, 2_000_000.0]);

        let xs: Vec<f64> = stats
            .transactions_per_block_per_day
            .data
            .iter()
            .map(|pt| pt.x)
            .collect();
        assert_eq!(xs, vec![1_000_000.0, 2_000_000.0]);

        // Total across all series, ratio weights included.
        let xs: Vec<f64> = stats
            .op_return_blocks_vs_blocks
            .data
            .iter()
            .map(|pt| pt.x)
            .collect();
        assert_eq!(xs, vec![40_000.0, 160_000.0]);
    }

    #[test]
    fn scale_to_millis_preserves_order_and_y_values() {
        let mut stats = sample_stats();
        stats.scale_to_millis();

        let series = &stats.blocks_per_day;
        assert_eq!(series.data.len(), 2);
        assert!(series.data[0].x < series.data[1].x);
        assert_eq!(series.data[0].y, 5.0);
        assert_eq!(series.data[1].y, 7.0);
    }

    #[test]
    fn point_at_requires_exact_match() {
        let stats = sample_stats();
        let series = &stats.blocks_per_day;
        assert_eq!(series.point_at(2000.0), Some(SeriesPoint { x: 2000.0, y: 7.0 }));
        assert_eq!(series.point_at(1500.0), None);
    }

    #[test]
    fn nearest_point_snaps_to_closest_x() {
        let stats = sample_stats();
        let series = &stats.blocks_per_day;
        assert_eq!(series.nearest_point(1400.0).map(|pt| pt.x), Some(1000.0));
        assert_eq!(series.nearest_point(1600.0).map(|pt| pt.x), Some(2000.0));
        assert_eq!(Series { name: String::new(), data: vec![] }.nearest_point(1.0), None);
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let body = r#"{
            "blocksPerDay": {"name": "Blocks per day", "data": [{"x": 1000, "y": 5}]},
            "transactionsPerBlockPerDay": {"data": [{"x": 1000, "y": 1200}]},
            "opReturnBlocksVsBlocks": {"name": "OP_RETURN", "data": [{"x": 40, "y": 0}]}
        }"#;
        let stats: BlockStats = serde_json::from_str(body).expect("payload should deserialize");
        assert_eq!(stats.blocks_per_day.name, "Blocks per day");
        // Optional series name defaults to empty.
        assert_eq!(stats.transactions_per_block_per_day.name, "");
        assert_eq!(stats.blocks_per_day.data[0].y, 5.0);
    }
}
