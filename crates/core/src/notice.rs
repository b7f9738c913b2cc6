//! User-facing notifications.
//!
//! Hosts show these instead of propagating errors: every failure a user can
//! cause is recoverable and ends in a message.

use crate::Error;
use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Notice for copying `output` to the clipboard.
    ///
    /// The clipboard write belongs to the host; this only decides whether
    /// there is anything to copy.
    pub fn for_copy(output: &str) -> Self {
        if output.is_empty() {
            Self::error("No text to copy")
        } else {
            Self::info("Text copied to clipboard!")
        }
    }

    /// Notice for clearing the input and output.
    pub fn cleared() -> Self {
        Self::info("All text cleared")
    }

    /// Notice for a clipboard write the host could not complete.
    pub fn copy_failed() -> Self {
        Self::error("Copy failed - please copy manually")
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        Self::error(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notices() {
        let notice = Notice::from(&Error::EmptyInput);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Please enter some text to process");

        let notice = Notice::from(&Error::UnsupportedFile("a.pdf".to_string()));
        assert_eq!(notice.message, "Please select a text file (.txt)");
    }

    #[test]
    fn test_copy_notice() {
        assert_eq!(Notice::for_copy(""), Notice::error("No text to copy"));
        assert_eq!(
            Notice::for_copy("a\n\nb"),
            Notice::info("Text copied to clipboard!")
        );
    }

    #[test]
    fn test_clear_and_copy_failure_notices() {
        let cleared = Notice::cleared();
        assert_eq!(cleared.level, NoticeLevel::Info);
        assert_eq!(cleared.message, "All text cleared");

        let failed = Notice::copy_failed();
        assert!(failed.is_error());
        assert_eq!(failed.message, "Copy failed - please copy manually");
    }

    #[test]
    fn test_notice_serializes_lowercase_level() {
        let json = serde_json::to_string(&Notice::success("done")).unwrap();
        assert_eq!(json, r#"{"level":"success","message":"done"}"#);
    }
}
