use dioxus::prelude::*;

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}
