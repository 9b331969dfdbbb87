#![cfg(test)]
/*!
Stylesheet lint for the web bundle.

The feed and chart components address the theme purely by class name, so a
rename in `assets/main.css` fails silently at runtime. This embeds the
stylesheet at compile time and asserts the selectors the Rust components rely
on are still present. When a selector is renamed on purpose, update the
component markup and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Selectors the components in `ui` render against.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-dashboard",
    ".masthead__title",
    // Chart panels
    ".dashboard__charts",
    ".dashboard__panel",
    ".dashboard__panel--trend",
    ".dashboard__panel-title",
    ".dashboard__chart",
    // Feed card
    ".feed-card",
    ".feed-card__header",
    ".feed-card__meta",
    ".feed-card__placeholder",
    ".feed-card__items",
    // One toot
    ".toot {",
    ".toot__avatar",
    ".toot__name",
    ".toot__date",
    ".toot__content",
    ".toot__media",
    ".toot__media-item",
    ".toot__source",
    // Responsive block sanity check
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors in the web theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_500,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars) - \
         did the file get truncated?"
    );
}
