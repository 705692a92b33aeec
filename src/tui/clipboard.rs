//! Clipboard helper for copying the board to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per copy and dropped right after.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Outcome of a copy request, phrased for a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    Success { description: String, length: usize },
    Empty,
    Error(String),
}

impl CopyResult {
    pub fn toast_message(&self) -> String {
        match self {
            Self::Success {
                description,
                length,
            } => format!("✓ Copied {} ({} chars)", description, length),
            Self::Empty => "Nothing to copy".to_string(),
            Self::Error(msg) => format!("✗ {}", msg),
        }
    }
}

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux) or on permission errors.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Copy `text` if there is any, describing the result for the user
pub fn copy(text: Option<String>, description: &str) -> CopyResult {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return CopyResult::Empty;
    };

    match copy_to_clipboard(&text) {
        Ok(()) => CopyResult::Success {
            description: description.to_string(),
            length: text.chars().count(),
        },
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            CopyResult::Error("Failed to copy".to_string())
        }
    }
}
