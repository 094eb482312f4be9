//! Signed-in session persistence.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl UserSession {
    /// Creates a session for `email`, stamped now.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }

    /// Validates if an email address is plausible enough to sign in with.
    pub fn is_valid_email(email: &str) -> bool {
        if email.is_empty() || email.len() > 254 || email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }
}

/// JSON file holding at most one [`UserSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session from disk. An absent file is not an error.
    pub async fn load(&self) -> Result<Option<UserSession>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).await?;
        let session = serde_json::from_str(&json)?;
        Ok(Some(session))
    }

    /// Saves the session to disk.
    pub async fn save(&self, session: &UserSession) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).await?;

        Ok(())
    }

    /// Deletes the session file.
    pub async fn clear(&self) -> Result<()> {
        if fs::try_exists(&self.path).await? {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}
