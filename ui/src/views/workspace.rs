use crate::components::SideNavigation;
use crate::nav::DEFAULT_ENTRY_ID;
use crate::views::{PageView, SignedOut};
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Page(String),
    SignedOut,
}

/// Shared layout used by every platform shell: side panel plus content area.
///
/// A logout unmounts the panel and shows [`SignedOut`]; resuming mounts a fresh
/// panel, so the selection starts over on the dashboard.
#[component]
pub fn Workspace() -> Element {
    let mut screen = use_signal(|| Screen::Page(DEFAULT_ENTRY_ID.to_string()));

    match screen() {
        Screen::Page(id) => rsx! {
            div { class: "workspace",
                SideNavigation {
                    on_navigate: move |id: String| screen.set(Screen::Page(id)),
                    on_logout: move |_| screen.set(Screen::SignedOut),
                }
                main { class: "workspace__content",
                    PageView { id }
                }
            }
        },
        Screen::SignedOut => rsx! {
            div { class: "workspace",
                main { class: "workspace__content",
                    SignedOut {
                        on_resume: move |_| screen.set(Screen::Page(DEFAULT_ENTRY_ID.to_string())),
                    }
                }
            }
        },
    }
}
