//! System clipboard access
//!
//! Thin wrapper over `arboard`. Failures are reported, not propagated: the
//! caller turns [`ClipboardError`] into a status-line fallback message.

use thiserror::Error;

/// Fallback message shown when the clipboard cannot be reached
pub const COPY_FALLBACK_MESSAGE: &str =
    "Failed to copy. Please manually select and copy the text.";

/// Message shown after a successful copy
pub const COPY_SUCCESS_MESSAGE: &str = "Questions and Answers copied to clipboard!";

/// Errors raised while delivering text to the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Could not open a clipboard handle
    #[error("Failed to access clipboard: {0}")]
    Unavailable(arboard::Error),

    /// The write itself failed
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(arboard::Error),
}

/// Deliver `text` to the system clipboard
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard.set_text(text).map_err(ClipboardError::WriteFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_names_the_underlying_failure() {
        let err = ClipboardError::Unavailable(arboard::Error::ContentNotAvailable);
        assert!(err.to_string().starts_with("Failed to access clipboard:"));
    }
}
