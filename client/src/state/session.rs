//! Session state and the localStorage credential store adapter.
//!
//! All token/user-id reads and writes go through [`BrowserCredentials`];
//! nothing else in the client touches storage directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chat::session::{CredentialStore, Session};

/// Credential store backed by browser localStorage under the `token` and
/// `userId` keys. Absence is a valid state. On the server (SSR) every read
/// yields an empty session and writes are inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentials {
    fn get(&self) -> Session {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return Session::default();
            };
            Session {
                token: storage.get_item(crate::consts::TOKEN_KEY).ok().flatten(),
                user_id: storage.get_item(crate::consts::USER_ID_KEY).ok().flatten(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Session::default()
        }
    }

    fn set(&self, session: &Session) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return;
            };
            match &session.token {
                Some(token) => {
                    let _ = storage.set_item(crate::consts::TOKEN_KEY, token);
                }
                None => {
                    let _ = storage.remove_item(crate::consts::TOKEN_KEY);
                }
            }
            match &session.user_id {
                Some(user_id) => {
                    let _ = storage.set_item(crate::consts::USER_ID_KEY, user_id);
                }
                None => {
                    let _ = storage.remove_item(crate::consts::USER_ID_KEY);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(crate::consts::TOKEN_KEY);
                let _ = storage.remove_item(crate::consts::USER_ID_KEY);
            }
        }
    }
}

/// Session state shared via context: the credentials as last observed.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Session,
}

impl SessionState {
    /// Read the persisted session (on mount).
    #[must_use]
    pub fn load() -> Self {
        Self { session: BrowserCredentials.get() }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }
}
