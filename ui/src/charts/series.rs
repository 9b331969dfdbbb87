//! Reshaping one category's account table into chart-ready series.

use serde::Serialize;

use crate::core::stats::{CategoryStats, Metric};

const BORDER_COLOR: &str = "rgba(0, 123, 255, 0.7)";
const BORDER_WIDTH: u32 = 1;

/// One dataset in the charting collaborator's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesDataset {
    pub label: String,
    #[serde(rename = "data")]
    pub values: Vec<u64>,
    #[serde(rename = "backgroundColor")]
    pub fill_color: String,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    #[serde(rename = "borderWidth")]
    pub border_width: u32,
}

/// Labels plus one dataset per fixed metric, values aligned with labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesDataset>,
}

/// Reshape a category's accounts into labels and exactly three datasets, one
/// per metric in fixed order. The input is read only; an empty table yields
/// empty labels and three empty-value datasets.
pub fn build_series(stats: &CategoryStats, colors: &mut super::ColorGenerator) -> ChartSeries {
    let labels = stats.labels();

    let datasets = Metric::ALL
        .iter()
        .map(|&metric| SeriesDataset {
            label: metric.label().to_string(),
            values: stats.iter().map(|(_, account)| account.get(metric)).collect(),
            // One color per dataset, not per value.
            fill_color: colors.next_color(),
            border_color: BORDER_COLOR.to_string(),
            border_width: BORDER_WIDTH,
        })
        .collect();

    ChartSeries { labels, datasets }
}
