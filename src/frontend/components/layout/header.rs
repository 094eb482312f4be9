use crate::frontend::components::layout::Navigation;
use crate::frontend::services::controller::ViewState;
use dioxus::prelude::*;

#[component]
pub fn Header(
    email: String,
    active: ViewState,
    on_select: EventHandler<ViewState>,
    on_sign_out: EventHandler<()>,
    sign_out_error: String,
) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "header-inner",
                div { class: "brand",
                    div { class: "brand-mark", "⚡" }
                    h1 { class: "brand-name", "Hire AI" }
                }
                div { class: "header-actions",
                    Navigation { active, on_select }
                    div { class: "user-box",
                        span { class: "user-email", "{email}" }
                        button {
                            class: "sign-out-button",
                            onclick: move |_| on_sign_out.call(()),
                            "Sign Out"
                        }
                    }
                }
            }
            if !sign_out_error.is_empty() {
                div { class: "error-message error-visible", role: "alert", "{sign_out_error}" }
            }
        }
    }
}
