use super::*;

// =============================================================
// Session presence
// =============================================================

#[test]
fn default_session_is_signed_out() {
    let session = Session::default();
    assert!(session.token.is_none());
    assert!(session.user_id.is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn session_with_both_halves_is_signed_in() {
    assert!(Session::new("tok", "user-1").is_signed_in());
}

#[test]
fn session_with_token_only_is_not_signed_in() {
    let session = Session { token: Some("tok".to_owned()), user_id: None };
    assert!(!session.is_signed_in());
}
