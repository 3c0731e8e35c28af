use super::*;

// =============================================================
// Notice stack
// =============================================================

#[test]
fn default_ui_has_no_notices() {
    let state = UiState::default();
    assert!(state.notices.is_empty());
}

#[test]
fn push_appends_in_order_with_distinct_ids() {
    let mut state = UiState::default();
    state.success("created");
    state.error("email taken");

    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].kind, NoticeKind::Success);
    assert_eq!(state.notices[1].kind, NoticeKind::Error);
    assert_eq!(state.notices[1].message, "email taken");
    assert_ne!(state.notices[0].id, state.notices[1].id);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = UiState::default();
    state.success("one");
    state.error("two");
    let keep = state.notices[1].id.clone();
    let drop = state.notices[0].id.clone();

    state.dismiss(&drop);

    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, keep);
}
