//! Session token state
//!
//! A `Session` is the single source of truth for the current authentication
//! token. It is a cheaply cloneable handle: every clone sees the same cell,
//! so the client, its facades, and external bootstrap code (restoring a
//! token saved elsewhere) all observe one token per logical session.

use std::sync::{Arc, RwLock};

/// Shared holder for the current session token
///
/// The token is an opaque string; no format validation or expiry tracking
/// happens here. Absent at construction, set by a successful login, cleared
/// by logout or a failed session validation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create a session with no token
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pre-loaded with a token
    ///
    /// Used by bootstrap code that restored a token from external storage.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(Some(token.into()));
        session
    }

    /// Replace the current token unconditionally
    ///
    /// `None` clears it. Visible to all subsequent request builds on every
    /// clone of this handle; requests already materialized keep the headers
    /// they were built with.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    /// The current token, if any
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Clear the current token
    pub fn clear(&self) {
        self.set_token(None);
    }

    /// Whether a token is currently present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_and_get_round_trip() {
        let session = Session::new();
        session.set_token(Some("tok-123".to_string()));
        assert_eq!(session.token(), Some("tok-123".to_string()));
        assert!(session.is_authenticated());

        session.set_token(None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn replace_is_unconditional() {
        let session = Session::with_token("first");
        session.set_token(Some("second".to_string()));
        assert_eq!(session.token(), Some("second".to_string()));
    }

    #[test]
    fn clones_share_the_same_cell() {
        let session = Session::new();
        let handle = session.clone();
        session.set_token(Some("shared".to_string()));
        assert_eq!(handle.token(), Some("shared".to_string()));

        handle.clear();
        assert!(!session.is_authenticated());
    }
}
