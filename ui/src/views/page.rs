use crate::nav::entries;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Content area for the entry the panel last navigated to.
#[component]
pub fn PageView(id: String) -> Element {
    match entries::lookup(&id) {
        Ok(entry) => rsx! {
            section { class: "page page-{entry.id}",
                h1 { "{entry.label}" }
                p { class: "page__hint", "Nothing to show here yet." }
            }
        },
        Err(err) => {
            warn!(%err, "page view: unresolved navigation target");
            rsx! {
                section { class: "page page--missing",
                    p { "{err}" }
                }
            }
        }
    }
}
