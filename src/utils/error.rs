//! Error handling.

use std::fmt;

/// Failures surfaced by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Tearing down the session failed; the user is still signed in.
    SignOut(String),
    /// The sign-in email did not pass validation.
    InvalidEmail,
    /// The session could not be persisted.
    Storage(String),
}

impl AuthError {
    pub fn sign_out(err: impl fmt::Display) -> Self {
        Self::SignOut(err.to_string())
    }

    pub fn storage(err: impl fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignOut(reason) => write!(f, "Sign out failed: {reason}"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::Storage(reason) => write!(f, "Failed to save session: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

pub type AuthResult<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_reason() {
        let err = AuthError::sign_out("permission denied");
        assert_eq!(err.to_string(), "Sign out failed: permission denied");

        let err = AuthError::storage(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "Failed to save session: disk full");
    }
}
