use serde::{Deserialize, Serialize};

/// Severity of a one-request notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    /// Something the user submitted could not be used.
    Error,
    /// Informational confirmation.
    Notice,
}

/// User-facing message shown on the next rendered page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Message severity.
    pub kind: FlashKind,
    /// Message text.
    pub message: String,
}

impl FlashMessage {
    /// Creates an error flash.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Creates a notice flash.
    #[must_use]
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Notice,
            message: message.into(),
        }
    }
}
