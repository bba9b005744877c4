//! In-memory sign-in flag for the current tab.
//!
//! Set on a successful login, cleared on sign-out, never persisted.
//! Routes are not gated on it; it only drives account-menu presentation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether the demo user has signed in during this page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub signed_in: bool,
}

impl SessionState {
    /// Record a successful login.
    pub fn sign_in(&mut self) {
        self.signed_in = true;
    }

    /// Drop the sign-in flag.
    pub fn sign_out(&mut self) {
        self.signed_in = false;
    }
}
