//! Main page component with authentication guard.

use crate::backend::services::CandidateRecord;
use crate::backend::utils::css::ResourceLoader;
use crate::frontend::components::layout::{Footer, Header, Hero, LoadingScreen};
use crate::frontend::components::panels::{
    CandidateResults, OutreachTemplates, ResumeUpload, SearchInterface,
};
use crate::frontend::pages::Auth;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::controller::{
    Navigate, Panel, Screen, ScreenGate, ViewState, resolve_screen, select_panel, shows_hero,
    sign_out_and_redirect,
};
use dioxus::prelude::*;
use dioxus_router::navigator;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn Index() -> Element {
    let nav = navigator();

    rsx! {
        HomeView {
            on_navigate: move |path: String| nav.navigate(&path),
            auth_screen: rsx! { Auth {} },
        }
    }
}

/// Picks Loading, Auth or Main from the session and redirects on entering Auth.
#[component]
pub fn HomeView(on_navigate: EventHandler<String>, auth_screen: Element) -> Element {
    let auth = use_context::<AuthState>();
    let gate = use_hook(|| Rc::new(RefCell::new(ScreenGate::default())));
    let mut active_tab = use_signal(ViewState::default);
    let mut candidates = use_signal(Vec::<CandidateRecord>::new);
    let mut sign_out_error = use_signal(String::new);

    // Re-runs only when the user or loading signals change
    let effect_gate = gate.clone();
    use_effect(move || {
        let session = auth.session();
        effect_gate.borrow_mut().observe(&session, &on_navigate);
    });

    let session = auth.session();
    let identity = match (resolve_screen(&session), session.identity) {
        (Screen::Main, Some(identity)) => identity,
        (Screen::Loading, _) => return rsx! { LoadingScreen {} },
        _ => return auth_screen,
    };

    let on_sign_out = move |_: ()| {
        let mut auth = auth;
        let gate = gate.clone();
        sign_out_error.set(String::new());
        spawn(async move {
            match sign_out_and_redirect(&mut auth, &on_navigate).await {
                Ok(()) => gate.borrow_mut().mark_redirected(),
                Err(e) => sign_out_error.set(e.to_string()),
            }
        });
    };

    rsx! {
        MainScreen {
            email: identity.email,
            view: active_tab(),
            candidates: candidates(),
            sign_out_error: sign_out_error(),
            on_select: move |tab| active_tab.set(tab),
            on_candidates: move |next| candidates.set(next),
            on_sign_out,
        }
    }
}

#[component]
pub fn MainScreen(
    email: String,
    view: ViewState,
    candidates: Vec<CandidateRecord>,
    sign_out_error: String,
    on_select: EventHandler<ViewState>,
    on_candidates: EventHandler<Vec<CandidateRecord>>,
    on_sign_out: EventHandler<()>,
) -> Element {
    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_css("main") }

        div { class: "desktop",
            Header {
                email,
                active: view,
                on_select,
                on_sign_out,
                sign_out_error,
            }

            if shows_hero(view, candidates.len()) {
                Hero {}
            }

            main { class: "content",
                match select_panel(view) {
                    Panel::Search => rsx! {
                        SearchInterface { candidates: candidates.clone(), on_candidates }
                    },
                    Panel::Upload => rsx! { ResumeUpload {} },
                    Panel::Results => rsx! { CandidateResults { candidates: candidates.clone() } },
                    Panel::Outreach => rsx! { OutreachTemplates {} },
                }
            }

            Footer {}
        }
    }
}
