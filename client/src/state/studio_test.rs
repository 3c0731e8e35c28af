use super::*;

// =============================================================
// StudioState defaults
// =============================================================

#[test]
fn default_studio_starts_idle_with_greeting() {
    let state = StudioState::default();
    assert!(!state.orchestrator.in_flight());
    assert_eq!(state.orchestrator.conversation.entries.len(), 1);
    assert!(state.preview_image.is_none());
}

#[test]
fn preview_falls_back_to_placeholder() {
    let mut state = StudioState::default();
    assert_eq!(state.preview(), crate::consts::PLACEHOLDER_IMAGE);

    state.preview_image = Some("https://img/42.jpeg".to_owned());
    assert_eq!(state.preview(), "https://img/42.jpeg");
}
