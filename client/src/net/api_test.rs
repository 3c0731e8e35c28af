use chat::gateway::GatewayError;
use serde_json::json;

use super::*;

// =============================================================
// Rejected token (authenticated calls only)
// =============================================================

#[test]
fn rejected_token_on_authenticated_call_maps_to_unauthorized() {
    for status in [401, 403] {
        let err = response_error(status, Some(json!({ "detail": "token expired" })), true);
        assert_eq!(err, GatewayError::Unauthorized);
    }
}

#[test]
fn signin_rejection_surfaces_server_detail() {
    // A wrong-password 401 on the unauthenticated sign-in call must show the
    // server's reason, not the canned re-authenticate message.
    let err = response_error(401, Some(json!({ "detail": "wrong password" })), false);
    assert_eq!(err, GatewayError::Failed("wrong password".to_owned()));
}

// =============================================================
// Sign-up error detail
// =============================================================

#[test]
fn signup_conflict_surfaces_detail_verbatim() {
    let err = response_error(400, Some(json!({ "detail": "email taken" })), false);
    assert_eq!(err, GatewayError::Failed("email taken".to_owned()));
    // The notice shown to the user is the error's display form, verbatim.
    assert_eq!(err.to_string(), "email taken");
}

#[test]
fn missing_detail_falls_back_to_status() {
    let err = response_error(500, Some(json!({ "error": "oops" })), true);
    assert_eq!(err, GatewayError::Failed("request failed with status 500".to_owned()));

    let err = response_error(400, None, false);
    assert_eq!(err, GatewayError::Failed("request failed with status 400".to_owned()));
}
