//! Core component trait
//!
//! Rendering needs each component's own data (board rows, log entries,
//! field values), so render functions live on the components themselves.
//! What they share is identity and the render context.

use crate::tui::theme::Theme;

/// Unique identifier for a focusable component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    NameField,
    EmailField,
    Leaderboard,
    Logs,
}

impl ComponentId {
    /// Focus order inside the arena view (Tab behavior)
    pub const ARENA_ORDER: [ComponentId; 3] = [
        ComponentId::NameField,
        ComponentId::EmailField,
        ComponentId::Leaderboard,
    ];

    /// Whether this component edits text
    pub fn is_text_input(&self) -> bool {
        matches!(self, ComponentId::NameField | ComponentId::EmailField)
    }

    /// Next component in the arena focus ring
    pub fn next_focus(self) -> Self {
        let order = Self::ARENA_ORDER;
        match order.iter().position(|&id| id == self) {
            Some(i) => order[(i + 1) % order.len()],
            None => self,
        }
    }

    /// Previous component in the arena focus ring (Shift+Tab)
    pub fn prev_focus(self) -> Self {
        let order = Self::ARENA_ORDER;
        match order.iter().position(|&id| id == self) {
            Some(i) => order[(i + order.len() - 1) % order.len()],
            None => self,
        }
    }
}

/// Immutable context passed to components during rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: Option<ComponentId>,

    /// Frames drawn so far, drives the cursor blink
    pub frame: u64,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: Option<ComponentId>, frame: u64) -> Self {
        Self {
            theme,
            focus,
            frame,
        }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == Some(id)
    }

    /// Cursor shows for half of every 32-frame cycle
    pub fn cursor_visible(&self) -> bool {
        self.frame % 32 < 16
    }
}

/// Base trait for UI components
pub trait Component {
    fn id(&self) -> ComponentId;
}
