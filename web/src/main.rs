use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::SideNavigationStyles;
use ui::theme::THEME_CSS;
use ui::views::Workspace;

const FAVICON: Asset = asset!("/assets/favicon.svg");

const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

fn main() {
    dioxus::logger::init(LOG_LEVEL).expect("failed to initialise logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        SideNavigationStyles {}

        Workspace {}
    }
}
