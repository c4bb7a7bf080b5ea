use dioxus::prelude::*;

#[component]
pub fn SignedOut(on_resume: EventHandler<()>) -> Element {
    rsx! {
        section { class: "page signed-out",
            h1 { "Signed out" }
            p { class: "page__hint", "You have left the workspace." }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| on_resume.call(()),
                "Back to dashboard"
            }
        }
    }
}
