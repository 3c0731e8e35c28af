//! Bearer credentials and the credential store port.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Bearer credentials for the remote backend.
///
/// Both halves are opaque strings; no format validation is performed. Absence
/// is a valid state (signed out), distinct from a present-but-expired token —
/// the latter is only discovered when the gateway reports an authorization
/// failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self { token: Some(token.into()), user_id: Some(user_id.into()) }
    }

    /// A session can only authorize requests when both halves are present.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.user_id.is_some()
    }
}

/// Persistent storage for the active [`Session`].
///
/// All session reads and writes go through this port; nothing else touches
/// the underlying storage.
pub trait CredentialStore {
    fn get(&self) -> Session;
    fn set(&self, session: &Session);
    fn clear(&self);
}
