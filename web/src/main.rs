use dioxus::prelude::*;

use ui::core::page_data;
use ui::views::Dashboard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The charting collaborator; consumed only through its config-object
/// contract.
const CHART_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Server-embedded page data is read once here and handed down as props;
    // components never reach for the globals themselves.
    let snapshot = use_hook(page_data::stats_snapshot);
    let trend = use_hook(page_data::follower_trend);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "{CHART_SCRIPT}" }

        header { class: "masthead",
            h1 { class: "masthead__title", "Tootboard" }
            p { class: "masthead__subtitle", "Media and journalists on the fediverse, live." }
        }

        Dashboard { snapshot, trend }
    }
}
