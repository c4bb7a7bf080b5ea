use crate::nav::{MenuEntry, NavIntent, NavSelection, SECTIONS};
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

// Panel stylesheet (asset for web/dev, inlined for release native builds)
const SIDE_NAV_CSS: Asset = asset!("/assets/styling/side_navigation.css");
pub const SIDE_NAV_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/side_navigation.css"
));

/// Registers the panel stylesheet with the document. Mount once near the root.
#[component]
pub fn SideNavigationStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SIDE_NAV_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SIDE_NAV_CSS_INLINE}" }
        }
    }
}

/// Stateful side panel.
///
/// Owns the current selection (reset to Dashboard on every mount) and reports
/// clicks to the host: `on_navigate` receives the entry id for page entries,
/// `on_logout` fires with no payload for the logout entry. Both handlers are
/// optional so the panel can be mounted on its own.
#[component]
pub fn SideNavigation(
    on_navigate: Option<EventHandler<String>>,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut selection = use_signal(NavSelection::default);

    let on_select = move |entry: &'static MenuEntry| {
        let intent = selection.write().select(entry);
        match intent {
            NavIntent::Navigate(id) => {
                debug!(id, "side navigation: navigate");
                if let Some(handler) = on_navigate {
                    handler.call(id.to_string());
                }
            }
            NavIntent::Logout => {
                info!("side navigation: logout requested");
                if let Some(handler) = on_logout {
                    handler.call(());
                }
            }
        }
    };

    rsx! {
        NavPanel { active: selection().active(), on_select }
    }
}

/// Stateless renderer: both sections, every entry, `active` highlighted.
#[component]
pub fn NavPanel(active: &'static str, on_select: EventHandler<&'static MenuEntry>) -> Element {
    rsx! {
        nav { class: "side-navigation", aria_label: "Side navigation",
            div { class: "nav-background" }
            for section in SECTIONS.iter() {
                div { key: "{section.title}", class: "nav-section",
                    h3 { class: "section-title", "{section.title}" }
                    ul { class: "nav-list",
                        for entry in section.entries.iter() {
                            {render_nav_item(entry, entry.id == active, on_select)}
                        }
                    }
                }
            }
        }
    }
}

fn render_nav_item(
    entry: &'static MenuEntry,
    is_active: bool,
    on_select: EventHandler<&'static MenuEntry>,
) -> Element {
    let item_class = if is_active { "nav-item active" } else { "nav-item" };
    let icon_class = if is_active {
        "nav-icon active-icon"
    } else {
        "nav-icon"
    };

    rsx! {
        li {
            key: "{entry.id}",
            class: item_class,
            onclick: move |_| on_select.call(entry),
            if is_active {
                div { class: "nav-indicator" }
            }
            div { class: icon_class,
                img { src: entry.icon_for(is_active), alt: entry.label }
            }
            span { class: "nav-text", "{entry.label}" }
        }
    }
}
