//! The configuration-object contract with the charting collaborator.
//!
//! Building a config is a pure reshaping of data plus a fixed visual policy;
//! nothing here touches the DOM. The serialized form matches what the chart
//! widget expects verbatim, so `serde_json` output can be handed over as-is.

use serde::Serialize;

use crate::core::stats::TrendSeries;

use super::{ChartSeries, SeriesDataset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// A dataset handed to the chart: either one we built from a category table,
/// or a server-supplied value forwarded untouched (the follower trend).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetSpec {
    Series(SeriesDataset),
    Raw(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(rename = "maintainAspectRatio")]
    pub maintain_aspect_ratio: bool,
    pub scales: ScaleOptions,
    pub plugins: PluginOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleOptions {
    pub y: AxisOptions,
    pub x: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOptions {
    #[serde(rename = "beginAtZero", skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    pub ticks: DisplayToggle,
    pub grid: DisplayToggle,
    pub stepped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayToggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub title: TitleOptions,
    pub legend: LegendOptions,
}

/// Title text is carried for tooling but never displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: &'static str,
}

impl ChartConfig {
    /// Combine data with the fixed visual policy: responsive, free aspect
    /// ratio, hidden ticks and gridlines on both axes, stacked x axis, legend
    /// below the plot when shown, title suppressed.
    pub fn build(
        kind: ChartKind,
        labels: Vec<String>,
        datasets: Vec<DatasetSpec>,
        title: impl Into<String>,
        show_legend: bool,
    ) -> Self {
        Self {
            kind,
            data: ChartData { labels, datasets },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: ScaleOptions {
                    y: AxisOptions {
                        begin_at_zero: Some(true),
                        stacked: None,
                        ticks: DisplayToggle { display: false },
                        grid: DisplayToggle { display: false },
                        stepped: true,
                    },
                    x: AxisOptions {
                        begin_at_zero: None,
                        stacked: Some(true),
                        ticks: DisplayToggle { display: false },
                        grid: DisplayToggle { display: false },
                        stepped: true,
                    },
                },
                plugins: PluginOptions {
                    title: TitleOptions {
                        display: false,
                        text: title.into(),
                    },
                    legend: LegendOptions {
                        display: show_legend,
                        position: "bottom",
                    },
                },
            },
        }
    }

    /// Bar chart for one category's account table.
    pub fn for_category(category: &str, series: ChartSeries) -> Self {
        let datasets = series.datasets.into_iter().map(DatasetSpec::Series).collect();
        Self::build(
            ChartKind::Bar,
            series.labels,
            datasets,
            format!("{category} Stats"),
            true,
        )
    }

    /// Line chart for the pre-built all-time follower trend; datasets pass
    /// through unmodified.
    pub fn for_trend(trend: &TrendSeries) -> Self {
        let datasets = trend
            .datasets
            .iter()
            .cloned()
            .map(DatasetSpec::Raw)
            .collect();
        Self::build(
            ChartKind::Line,
            trend.labels.clone(),
            datasets,
            "All Time Followers",
            false,
        )
    }
}
