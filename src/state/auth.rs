//! Authentication capability and credential types.
//!
//! DESIGN
//! ======
//! The login form talks to an injected `Authenticate` implementation, so
//! the comparison logic is testable in isolation and no secret lives in
//! the UI tree. The only production implementation compares against one
//! hardcoded pair; it is a placeholder, not an authentication design.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use thiserror::Error;

/// Transient credentials held in form state, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authentication failure taxonomy.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied pair does not match.
    #[error("incorrect credentials")]
    InvalidCredentials,
    /// Anything unexpected from the authenticating backend.
    #[error("authentication failed: {0}")]
    Backend(String),
}

/// Capability for checking a credential pair.
pub trait Authenticate {
    /// Check `credentials`, returning `Ok(())` on a match.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` on a mismatch, `AuthError::Backend`
    /// for unexpected failures.
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Shared handle to the app-wide authenticator, provided via context.
pub type AuthHandle = Arc<dyn Authenticate + Send + Sync>;

/// Placeholder authenticator holding one hardcoded pair.
pub struct FixedCredentialAuthenticator {
    email: &'static str,
    password: &'static str,
}

impl FixedCredentialAuthenticator {
    /// The demo account from the original deployment.
    pub fn demo() -> Self {
        Self {
            email: "jane@edunova.com",
            password: "password123",
        }
    }
}

impl Authenticate for FixedCredentialAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.email == self.email && credentials.password == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
