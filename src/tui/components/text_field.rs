//! Single-line text input
//!
//! The value itself lives in the form controller; the field only keeps
//! its cursor (a char index) and edits whatever string it is handed.
//! The cursor is clamped on every use since a submit can clear the value
//! underneath it.

use crate::tui::traits::{Component, ComponentId, Handled, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TextField {
    id: ComponentId,
    label: &'static str,
    placeholder: &'static str,
    cursor: usize,
}

impl TextField {
    pub fn new(id: ComponentId, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            placeholder,
            cursor: 0,
        }
    }

    /// Cursor position in chars, clamped to `value`
    pub fn cursor(&self, value: &str) -> usize {
        self.cursor.min(value.chars().count())
    }

    /// Apply an editing key to `value`
    ///
    /// Enter, Tab and Esc are left for the form to handle.
    pub fn edit(&mut self, value: &mut String, key: KeyEvent) -> Handled {
        let len = value.chars().count();
        let cursor = self.cursor(value);

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                value.insert(byte_index(value, cursor), c);
                self.cursor = cursor + 1;
            }
            KeyCode::Backspace => {
                if cursor > 0 {
                    value.remove(byte_index(value, cursor - 1));
                    self.cursor = cursor - 1;
                }
            }
            KeyCode::Delete => {
                if cursor < len {
                    value.remove(byte_index(value, cursor));
                }
                self.cursor = cursor;
            }
            KeyCode::Left => self.cursor = cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            _ => return Handled::No,
        }
        Handled::Yes
    }

    /// Draw the field; `error` paints the border in the error color
    pub fn render(&self, f: &mut Frame, area: Rect, value: &str, error: bool, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id);

        let border_style = if error {
            Style::default().fg(theme.error)
        } else {
            theme.border_style(focused)
        };
        let title = if error {
            format!(" {} ✗ ", self.label)
        } else {
            format!(" {} ", self.label)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(border_style)
            .title(title);

        let inner_width = area.width.saturating_sub(2) as usize;
        let line = if value.is_empty() && !focused {
            Line::from(Span::styled(self.placeholder, theme.muted_style()))
        } else {
            self.value_line(value, inner_width, focused && ctx.cursor_visible(), ctx)
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }

    /// Visible slice of the value with the cursor cell reversed
    fn value_line(
        &self,
        value: &str,
        width: usize,
        show_cursor: bool,
        ctx: &RenderContext,
    ) -> Line<'static> {
        let chars: Vec<char> = value.chars().collect();
        let cursor = self.cursor(value);

        // Keep the cursor on screen for values wider than the field
        let start = (cursor + 1).saturating_sub(width.max(1));
        let before: String = chars[start..cursor].iter().collect();
        let at: String = chars.get(cursor).map_or(" ".to_string(), |c| c.to_string());
        let after: String = chars
            .iter()
            .skip(cursor + 1)
            .take(width.saturating_sub(cursor - start + 1))
            .collect();

        let base = ctx.theme.base_style();
        let at_style = if show_cursor {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        };

        Line::from(vec![
            Span::styled(before, base),
            Span::styled(at, at_style),
            Span::styled(after, base),
        ])
    }
}

impl Component for TextField {
    fn id(&self) -> ComponentId {
        self.id
    }
}

/// Byte offset of the `char_idx`-th char
fn byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map_or(value.len(), |(i, _)| i)
}
