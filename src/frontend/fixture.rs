//! Headless mounting for component tests.

use crate::backend::services::{SessionStore, UserSession};
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// Renders the component under test, given the recorded navigation callback.
pub type View = fn(EventHandler<String>) -> Element;

type AuthSlot = Rc<RefCell<Option<AuthState>>>;
type Navigations = Rc<RefCell<Vec<String>>>;

#[derive(Props, Clone)]
struct FixtureProps {
    view: View,
    user: Option<UserSession>,
    loading: bool,
    session_path: PathBuf,
    auth: AuthSlot,
    navigations: Navigations,
}

impl PartialEq for FixtureProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
    }
}

#[allow(non_snake_case)]
fn Fixture(props: FixtureProps) -> Element {
    let user = use_signal(|| props.user.clone());
    let loading = use_signal(|| props.loading);
    let store = use_signal(|| SessionStore::new(props.session_path.clone()));
    let auth = use_context_provider(|| AuthState {
        user,
        loading,
        store,
    });
    props.auth.replace(Some(auth));

    let navigations = props.navigations.clone();
    let on_navigate = use_callback(move |path: String| navigations.borrow_mut().push(path));
    (props.view)(on_navigate)
}

/// Runs `f` with the dom's runtime and root scope current.
pub fn in_scope<O>(dom: &VirtualDom, f: impl FnOnce() -> O) -> O {
    dom.in_runtime(|| dom.in_scope(ScopeId::ROOT, f))
}

/// A `VirtualDom` with `AuthState` in context and navigations recorded.
pub struct Mounted {
    dom: VirtualDom,
    auth: AuthSlot,
    navigations: Navigations,
}

impl Mounted {
    pub fn new(view: View, user: Option<&str>, loading: bool) -> Self {
        Self::with_session_path(view, user, loading, PathBuf::from("unused-session.json"))
    }

    pub fn with_session_path(
        view: View,
        user: Option<&str>,
        loading: bool,
        session_path: PathBuf,
    ) -> Self {
        let auth = AuthSlot::default();
        let navigations = Navigations::default();
        let mut dom = VirtualDom::new_with_props(
            Fixture,
            FixtureProps {
                view,
                user: user.map(UserSession::new),
                loading,
                session_path,
                auth: auth.clone(),
                navigations: navigations.clone(),
            },
        );
        dom.rebuild_in_place();
        Self {
            dom,
            auth,
            navigations,
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn auth(&self) -> AuthState {
        (*self.auth.borrow()).expect("fixture rendered")
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn in_scope<O>(&self, f: impl FnOnce() -> O) -> O {
        in_scope(&self.dom, f)
    }

    pub fn signed_in_email(&self) -> Option<String> {
        let auth = self.auth();
        self.in_scope(|| (*auth.user.peek()).clone().map(|user| user.email))
    }

    pub fn set_session(&self, user: Option<&str>, loading: bool) {
        let mut auth = self.auth();
        let user = user.map(UserSession::new);
        self.in_scope(move || {
            auth.user.set(user);
            auth.loading.set(loading);
        });
    }

    /// Renders and runs effects and tasks until nothing is pending.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            let busy = tokio::time::timeout(Duration::from_millis(20), self.dom.wait_for_work())
                .await
                .is_ok();
            self.dom.render_immediate_to_vec();
            if !busy {
                break;
            }
        }
    }

    /// Spawns `task` on the root scope and drives the dom until it finishes.
    pub async fn run<T: 'static>(&mut self, task: impl Future<Output = T> + 'static) -> T {
        let out = Rc::new(RefCell::new(None));
        let slot = out.clone();
        self.in_scope(|| {
            spawn(async move {
                slot.replace(Some(task.await));
            })
        });

        for _ in 0..100 {
            if out.borrow().is_some() {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(20), self.dom.wait_for_work()).await;
            self.dom.render_immediate_to_vec();
        }
        out.take().expect("task finished")
    }
}
