//! Screen and panel selection for the main page.
//!
//! Kept free of Dioxus types so the redirect and sign-out rules can be
//! exercised with fakes.

use crate::backend::utils::route::AUTH_PATH;
use crate::utils::AuthResult;

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// Snapshot of the authentication provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub identity: Option<Identity>,
    pub resolving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Auth,
    Main,
}

pub fn resolve_screen(session: &AuthSession) -> Screen {
    if session.resolving {
        Screen::Loading
    } else if session.identity.is_none() {
        Screen::Auth
    } else {
        Screen::Main
    }
}

/// Tab picked in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Home,
    Upload,
    Candidates,
    Outreach,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [Self::Home, Self::Upload, Self::Candidates, Self::Outreach];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Upload => "Upload",
            Self::Candidates => "Candidates",
            Self::Outreach => "Outreach",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    Upload,
    Results,
    Outreach,
}

pub const fn select_panel(view: ViewState) -> Panel {
    match view {
        ViewState::Home => Panel::Search,
        ViewState::Upload => Panel::Upload,
        ViewState::Candidates => Panel::Results,
        ViewState::Outreach => Panel::Outreach,
    }
}

/// The hero is only shown on Home before any candidates have been found.
pub fn shows_hero(view: ViewState, candidate_count: usize) -> bool {
    view == ViewState::Home && candidate_count == 0
}

/// Client-side route transitions.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// The part of the authentication provider the page acts on.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_out(&mut self) -> AuthResult<()>;
}

/// Remembers the last screen so entering Auth navigates exactly once.
#[derive(Debug, Default)]
pub struct ScreenGate {
    last: Option<Screen>,
}

impl ScreenGate {
    /// Call on every change of the session. Returns the screen to render.
    pub fn observe<N: Navigate>(&mut self, session: &AuthSession, nav: &N) -> Screen {
        let screen = resolve_screen(session);
        if screen == Screen::Auth && self.last != Some(Screen::Auth) {
            log::debug!("No signed-in user, redirecting to {AUTH_PATH}");
            nav.navigate(AUTH_PATH);
        }
        self.last = Some(screen);
        screen
    }

    /// Records a redirect to the auth page made outside the gate, such as after sign-out.
    pub fn mark_redirected(&mut self) {
        self.last = Some(Screen::Auth);
    }
}

/// Signs out, then redirects. Nothing is navigated if sign-out fails.
pub async fn sign_out_and_redirect<A, N>(auth: &mut A, nav: &N) -> AuthResult<()>
where
    A: AuthProvider,
    N: Navigate,
{
    if let Err(e) = auth.sign_out().await {
        log::warn!("{e}");
        return Err(e);
    }
    nav.navigate(AUTH_PATH);
    Ok(())
}
