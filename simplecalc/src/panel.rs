//! View state of the calculator panel

use crate::compute::{self, Operation};
use simplecore::widgets::NOTICE_TITLE;

/// A pending modal notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// The three fields of the panel plus any open notice.
///
/// `first` and `second` are edited directly by the text boxes. `result` only
/// changes through [`PanelState::press`].
#[derive(Debug, Default)]
pub struct PanelState {
    pub first: String,
    pub second: String,
    result: String,
    notice: Option<Notice>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while a notice is open; the panel ignores input until dismissed.
    pub fn is_blocked(&self) -> bool {
        self.notice.is_some()
    }

    /// Handle a press of the button for `op`.
    pub fn press(&mut self, op: Operation) {
        if self.is_blocked() {
            return;
        }

        match compute::evaluate(op, &self.first, &self.second) {
            Ok(text) => {
                tracing::debug!(operation = op.label(), result = %text, "computed");
                self.result = text;
            }
            Err(err) => {
                tracing::warn!(operation = op.label(), error = %err, "rejected input");
                self.notice = Some(Notice {
                    title: NOTICE_TITLE.to_string(),
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
