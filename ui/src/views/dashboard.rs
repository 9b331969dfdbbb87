//! The dashboard page: one chart panel per category, the all-time follower
//! trend, and the live feed.

use dioxus::prelude::*;

use crate::core::stats::{StatsSnapshot, TrendSeries};
use crate::feed::LiveFeed;

/// Fixed id of the trend chart container, part of the page's DOM contract.
pub const TREND_CONTAINER_ID: &str = "allTimeFollowerChart";

/// Category containers follow a fixed naming convention.
pub fn category_container_id(category: &str) -> String {
    format!("chart-container-{category}")
}

/// Renders the full dashboard. Snapshot and trend arrive as plain props:
/// they are supplied once at page load and never re-fetched, so the chart
/// mount effect below runs exactly once per page.
#[component]
pub fn Dashboard(snapshot: StatsSnapshot, trend: TrendSeries) -> Element {
    let chart_snapshot = snapshot.clone();
    let chart_trend = trend.clone();

    // Charts are materialized imperatively after the containers exist. The
    // renderer skips any container this page happens not to have.
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let mut renderer = crate::charts::ChartRenderer::new();
            for (category, stats) in chart_snapshot.iter() {
                renderer.render_category_chart(&category_container_id(category), category, stats);
            }
            renderer.render_trend_chart(TREND_CONTAINER_ID, &chart_trend);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&chart_snapshot, &chart_trend);
        }
    });

    rsx! {
        section { class: "page page-dashboard",
            div { class: "dashboard__charts",
                for (category, _) in snapshot.iter() {
                    section { key: "{category}", class: "dashboard__panel",
                        h2 { class: "dashboard__panel-title", "{category}" }
                        div { id: category_container_id(category), class: "dashboard__chart" }
                    }
                }
                section { class: "dashboard__panel dashboard__panel--trend",
                    h2 { class: "dashboard__panel-title", "All time followers" }
                    div { id: TREND_CONTAINER_ID, class: "dashboard__chart" }
                }
            }

            LiveFeed {}
        }
    }
}
