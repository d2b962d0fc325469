//! System clipboard access for the "copy link" share target.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to access clipboard: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
