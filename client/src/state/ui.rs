//! UI state: transient user-visible notifications.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Kind of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-visible notification (toast).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// UI state for the notice stack.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notices: Vec<Notice>,
}

impl UiState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push(Notice {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self, id: &str) {
        self.notices.retain(|notice| notice.id != id);
    }
}
