//! Sign-in page component.

use crate::backend::utils::route::HOME_PATH;
use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::context::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn Auth() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInView {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

/// Email sign-in form. Leaves for the home page once a user is present.
#[component]
pub fn SignInView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_context::<AuthState>();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move || {
        if submitting() {
            return;
        }
        let email_value = email.read().clone();
        let mut auth = auth;

        error.set(None);
        submitting.set(true);
        spawn(async move {
            if let Err(e) = auth.sign_in(email_value).await {
                error.set(Some(e.to_string()));
            }
            submitting.set(false);
        });
    };

    let on_keydown = {
        let mut submit = submit;
        move |e: KeyboardEvent| {
            if e.key() == Key::Enter {
                submit();
            }
        }
    };

    // Covers both an existing session and a successful sign-in
    use_effect(move || {
        if auth.user.read().is_some() {
            on_navigate.call(HOME_PATH.to_string());
        }
    });

    rsx! {
        AuthLayout {
            main { class: "auth-card",
                h1 { class: "welcome-text", "Welcome to Hire AI" }
                p { class: "auth-subtitle", "Sign in with your work email to continue." }
                input {
                    class: "auth-input",
                    r#type: "email",
                    value: "{email()}",
                    placeholder: "you@company.com",
                    autofocus: true,
                    oninput: move |e| {
                        email.set(e.value());
                        error.set(None);
                    },
                    onkeydown: on_keydown,
                }
                button {
                    class: "primary-button",
                    disabled: submitting(),
                    onclick: {
                        let mut submit = submit;
                        move |_| submit()
                    },
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
                div {
                    class: if error().is_some() { "error-message error-visible" } else { "error-message error-hidden" },
                    {error().unwrap_or_default()}
                }
            }
        }
    }
}
