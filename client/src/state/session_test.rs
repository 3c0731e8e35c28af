use chat::session::CredentialStore;

use super::*;

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_session_state_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
}

// =============================================================
// BrowserCredentials (non-hydrate: inert storage)
// =============================================================

#[test]
fn store_without_browser_yields_empty_session() {
    let store = BrowserCredentials;
    let session = store.get();
    assert!(session.token.is_none());
    assert!(session.user_id.is_none());
}
