//! Interactive trait for components that handle keyboard input
//!
//! The App routes key events to the focused component. Whatever the
//! component leaves alone bubbles back up for view-level handling.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global: Ctrl+C, F1-F4, Ctrl+Y)
///    │
///    ▼
/// Focused component ── Handled::Yes ──▶ done
///    │
///    │ Handled::No
///    ▼
/// App (view fallbacks: Tab, Enter, Esc)
/// ```
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hint for the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
