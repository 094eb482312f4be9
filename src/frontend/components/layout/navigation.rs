use crate::frontend::services::controller::ViewState;
use dioxus::prelude::*;

#[component]
pub fn Navigation(active: ViewState, on_select: EventHandler<ViewState>) -> Element {
    rsx! {
        nav { class: "nav-items",
            for view in ViewState::ALL {
                button {
                    key: "{view.label()}",
                    class: if view == active { "nav-item active" } else { "nav-item" },
                    onclick: move |_| on_select.call(view),
                    span { class: "nav-text", "{view.label()}" }
                }
            }
        }
    }
}
