//! Authentication context and state management.

use crate::backend::services::{SessionStore, UserSession};
use crate::frontend::services::controller::{AuthProvider, AuthSession, Identity, Navigate};
use crate::utils::{AuthError, AuthResult};
use dioxus::prelude::*;
use dioxus_router::Navigator;

#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: Signal<Option<UserSession>>,
    pub loading: Signal<bool>,
    pub store: Signal<SessionStore>,
}

impl AuthState {
    fn store(&self) -> SessionStore {
        self.store.peek().clone()
    }

    /// Loads the persisted session, then marks authentication as resolved.
    pub async fn restore(&mut self) {
        let store = self.store();
        match store.load().await {
            Ok(Some(session)) => {
                log::info!("Restored session for {}", session.email);
                self.user.set(Some(session));
            }
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring unreadable session {}: {e}", store.path().display()),
        }
        self.loading.set(false);
    }

    /// Signs in with an email and saves the session.
    pub async fn sign_in(&mut self, email: String) -> AuthResult<()> {
        let email = email.trim().to_string();
        if !UserSession::is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }

        let session = UserSession::new(email);
        if let Err(e) = self.store().save(&session).await {
            log::warn!("Failed to save session: {e}");
            return Err(AuthError::storage(e));
        }

        log::info!("Signed in as {}", session.email);
        self.user.set(Some(session));
        Ok(())
    }

    /// Snapshot for screen resolution. Subscribes the caller to both signals.
    pub fn session(&self) -> AuthSession {
        AuthSession {
            identity: self.user.read().as_ref().map(|user| Identity {
                email: user.email.clone(),
            }),
            resolving: *self.loading.read(),
        }
    }
}

impl AuthProvider for AuthState {
    /// The user stays signed in if the session file cannot be removed.
    async fn sign_out(&mut self) -> AuthResult<()> {
        self.store().clear().await.map_err(AuthError::sign_out)?;
        self.user.set(None);
        log::info!("Signed out");
        Ok(())
    }
}

impl Navigate for Navigator {
    fn navigate(&self, path: &str) {
        self.replace(path.to_string());
    }
}

impl Navigate for EventHandler<String> {
    fn navigate(&self, path: &str) {
        self.call(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::fixture::Mounted;
    use std::path::Path;

    fn mount(user: Option<&str>, loading: bool, session_path: &Path) -> Mounted {
        Mounted::with_session_path(|_| rsx! {}, user, loading, session_path.to_path_buf())
    }

    #[tokio::test]
    async fn failed_sign_out_keeps_the_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::create_dir(&path).unwrap();
        let mut mounted = mount(Some("a@b.com"), false, &path);
        let mut auth = mounted.auth();

        let result = mounted.run(async move { auth.sign_out().await }).await;

        assert!(matches!(result, Err(AuthError::SignOut(_))));
        assert_eq!(mounted.signed_in_email().as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn sign_out_removes_session_then_clears_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        SessionStore::new(&path)
            .save(&UserSession::new("a@b.com"))
            .await
            .unwrap();
        let mut mounted = mount(Some("a@b.com"), false, &path);
        let mut auth = mounted.auth();

        mounted.run(async move { auth.sign_out().await }).await.unwrap();

        assert_eq!(mounted.signed_in_email(), None);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn corrupt_session_resolves_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let mut mounted = mount(None, true, &path);
        let mut auth = mounted.auth();

        mounted.run(async move { auth.restore().await }).await;

        let session = mounted.in_scope(|| auth.session());
        assert_eq!(session, AuthSession { identity: None, resolving: false });
    }

    #[tokio::test]
    async fn restore_loads_saved_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        SessionStore::new(&path)
            .save(&UserSession::new("a@b.com"))
            .await
            .unwrap();
        let mut mounted = mount(None, true, &path);
        let mut auth = mounted.auth();

        mounted.run(async move { auth.restore().await }).await;

        assert!(!mounted.in_scope(|| *auth.loading.peek()));
        assert_eq!(mounted.signed_in_email().as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut mounted = mount(None, false, &path);
        let mut auth = mounted.auth();

        let result = mounted
            .run(async move { auth.sign_in("not-an-email".to_string()).await })
            .await;

        assert_eq!(result, Err(AuthError::InvalidEmail));
        assert!(!path.exists());
        assert_eq!(mounted.signed_in_email(), None);
    }

    #[tokio::test]
    async fn sign_in_saves_trimmed_email() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut mounted = mount(None, false, &path);
        let mut auth = mounted.auth();

        mounted
            .run(async move { auth.sign_in("  a@b.com ".to_string()).await })
            .await
            .unwrap();

        assert_eq!(mounted.signed_in_email().as_deref(), Some("a@b.com"));
        let saved = SessionStore::new(&path).load().await.unwrap().unwrap();
        assert_eq!(saved.email, "a@b.com");
    }
}
