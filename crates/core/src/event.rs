//! User-facing notices emitted by state transitions.
//!
//! Domain mutations never talk to a toast/notification system directly;
//! they return the notices they want shown and the caller dispatches them.

use serde::{Deserialize, Serialize};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible message emitted by a state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = Notice::success("listo");
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(ok.message, "listo");

        let err = Notice::error("falló");
        assert_eq!(err.level, NoticeLevel::Error);
    }
}
