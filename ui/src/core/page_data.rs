//! Access to the values the server render step embeds in the page's
//! scripting context. Read once at startup and handed to the dashboard as
//! plain props; components never reach for these globals themselves.

use crate::core::stats::{StatsSnapshot, TrendSeries};

/// Global carrying the category → account → metric snapshot.
pub const STATS_GLOBAL: &str = "categoriesData";
/// Global carrying the pre-built all-time follower series.
pub const TREND_GLOBAL: &str = "allTimeFollowerChart";

/// Embedded snapshot, or an empty one when the global is absent or malformed.
/// A page without chart data still renders the feed.
pub fn stats_snapshot() -> StatsSnapshot {
    read_embedded(STATS_GLOBAL).unwrap_or_default()
}

/// Embedded follower trend, or an empty series.
pub fn follower_trend() -> TrendSeries {
    read_embedded(TREND_GLOBAL).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn read_embedded<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    use wasm_bindgen::JsValue;

    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let json = js_sys::JSON::stringify(&value).ok()?;
    serde_json::from_str(&String::from(json)).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_embedded<T: serde::de::DeserializeOwned>(_key: &str) -> Option<T> {
    // Server-side rendering has no page context; the dashboard hydrates with
    // empty data and the client fills it in.
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_globals_yield_empty_values() {
        assert!(stats_snapshot().is_empty());
        assert!(follower_trend().labels.is_empty());
        assert!(follower_trend().datasets.is_empty());
    }
}
