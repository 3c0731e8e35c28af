//! Studio state: the chat orchestrator plus the preview pane selection.

#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

use chat::orchestrator::Orchestrator;

/// State for the design studio page, shared via context.
///
/// The orchestrator owns the transcript, prompt, mode, and send phase; the
/// preview image is purely presentational (which generated image the user
/// last clicked open).
#[derive(Clone, Debug, Default)]
pub struct StudioState {
    pub orchestrator: Orchestrator,
    pub preview_image: Option<String>,
}

impl StudioState {
    /// Image shown in the preview pane, falling back to the placeholder.
    #[must_use]
    pub fn preview(&self) -> String {
        self.preview_image
            .clone()
            .unwrap_or_else(|| crate::consts::PLACEHOLDER_IMAGE.to_owned())
    }
}
