//! Materializing charts into the page.
//!
//! The renderer owns nothing after construction time: each call appends a
//! fresh canvas to the named container and hands canvas plus config to the
//! page's `Chart` global. Instances are created once per container at page
//! load and never replaced or disposed.

use dioxus::logger::tracing;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::core::stats::{CategoryStats, TrendSeries};

use super::{build_series, ChartConfig, ColorGenerator};

#[wasm_bindgen]
extern "C" {
    /// The charting collaborator, provided by the page's script include.
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;
}

#[derive(Default)]
pub struct ChartRenderer {
    colors: ColorGenerator,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bar chart for one category. A missing container is a no-op: pages may
    /// legitimately omit a category panel.
    pub fn render_category_chart(
        &mut self,
        container_id: &str,
        category: &str,
        stats: &CategoryStats,
    ) {
        let Some(canvas) = append_canvas(container_id) else {
            return;
        };
        let series = build_series(stats, &mut self.colors);
        mount_chart(&canvas, &ChartConfig::for_category(category, series));
    }

    /// Line chart for the pre-built all-time follower trend.
    pub fn render_trend_chart(&mut self, container_id: &str, trend: &TrendSeries) {
        let Some(canvas) = append_canvas(container_id) else {
            return;
        };
        mount_chart(&canvas, &ChartConfig::for_trend(trend));
    }
}

/// Allocate a draw surface inside the named container. `None` when the
/// container is absent or the document refuses us a canvas.
fn append_canvas(container_id: &str) -> Option<HtmlCanvasElement> {
    let document = web_sys::window()?.document()?;
    let container = document.get_element_by_id(container_id)?;
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    container.append_child(&canvas).ok()?;
    Some(canvas)
}

fn mount_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let serialized = match serde_json::to_string(config) {
        Ok(serialized) => serialized,
        Err(err) => {
            tracing::error!("chart config failed to serialize: {err}");
            return;
        }
    };
    let parsed = match js_sys::JSON::parse(&serialized) {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::error!("chart config was rejected by JSON.parse");
            return;
        }
    };

    // A page without the chart script still renders everything else.
    if Chart::new(canvas, &parsed).is_err() {
        tracing::error!("chart construction failed; is the Chart script loaded?");
    }
}
