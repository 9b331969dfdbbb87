//! End-to-end checks over the two data pipelines: an embedded snapshot all
//! the way to a chart config, and fetched toots all the way into feed state.

use ui::charts::{build_series, ChartConfig, ColorGenerator};
use ui::core::stats::{StatsSnapshot, TrendSeries};
use ui::feed::{FeedState, Post};

fn embedded_snapshot() -> StatsSnapshot {
    serde_json::from_str(
        r#"{
            "News": {
                "BBC": { "Followers": 120000, "Toots": 5400, "Following": 12 },
                "Tagesschau": { "Followers": 95000, "Toots": 3100 },
                "Quiet Outlet": {}
            },
            "Journalists": {
                "Solo Reporter": { "Toots": 880, "Following": 450 }
            }
        }"#,
    )
    .expect("snapshot fixture parses")
}

#[test]
fn snapshot_becomes_one_bar_config_per_category() {
    let snapshot = embedded_snapshot();
    let mut colors = ColorGenerator::new();

    let configs: Vec<(String, ChartConfig)> = snapshot
        .iter()
        .map(|(category, stats)| {
            let series = build_series(stats, &mut colors);
            (
                category.to_string(),
                ChartConfig::for_category(category, series),
            )
        })
        .collect();

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].0, "News");
    assert_eq!(configs[1].0, "Journalists");

    let news = serde_json::to_value(&configs[0].1).expect("config serializes");
    assert_eq!(news["type"], "bar");
    assert_eq!(
        news["data"]["labels"],
        serde_json::json!(["BBC", "Tagesschau", "Quiet Outlet"])
    );
    assert_eq!(news["data"]["datasets"].as_array().unwrap().len(), 3);
    // Tagesschau's absent Following and Quiet Outlet's absent everything
    // show up as zeros, positionally aligned with the labels.
    assert_eq!(
        news["data"]["datasets"][2]["data"],
        serde_json::json!([12, 0, 0])
    );
    assert_eq!(news["options"]["plugins"]["legend"]["display"], true);
    assert_eq!(news["options"]["plugins"]["title"]["text"], "News Stats");
}

#[test]
fn trend_config_is_a_legendless_line_passthrough() {
    let trend: TrendSeries = serde_json::from_str(
        r#"{
            "labels": ["2024-01", "2024-02", "2024-03"],
            "datasets": [{ "label": "All", "data": [10, 20, 40], "fill": false }]
        }"#,
    )
    .expect("trend fixture parses");

    let value = serde_json::to_value(ChartConfig::for_trend(&trend)).expect("config serializes");
    assert_eq!(value["type"], "line");
    assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(
        value["data"]["datasets"][0],
        serde_json::json!({ "label": "All", "data": [10, 20, 40], "fill": false })
    );
}

#[test]
fn two_identical_fetch_passes_double_the_rendered_feed() {
    let batch: Vec<Post> = serde_json::from_str(
        r#"[
            {
                "url": "https://mastodon.social/@bbc/111",
                "created_at": "2024-03-01T08:00:00Z",
                "content": "<p>headline</p>",
                "account": { "username": "bbc", "display_name": "BBC", "avatar": "https://a/b.png" }
            },
            {
                "url": "https://mastodon.social/@dw/222",
                "created_at": "2024-03-01T08:02:00Z",
                "content": "<p>zweite meldung</p>",
                "account": { "username": "dw" },
                "reblog": {
                    "url": "https://example.org/@orig/9",
                    "created_at": "2024-02-29T21:00:00Z",
                    "content": "<p>original</p>",
                    "account": { "username": "orig" },
                    "media_attachments": [
                        { "type": "image", "url": "https://m/f.png", "preview_url": "https://m/p.png" }
                    ]
                }
            }
        ]"#,
    )
    .expect("feed fixture parses");

    let mut state = FeedState::default();
    state.absorb(batch.clone());
    state.absorb(batch);

    // The endpoint has no cursor and the feed no dedup: the same list lands
    // twice and the container doubles.
    assert_eq!(state.posts.len(), 4);
    assert_eq!(state.completed_passes, 2);
    assert_eq!(state.posts[1].visible_attachments().len(), 1);
    assert_eq!(state.posts[1].handle(), "dw@mastodon.social");
}
