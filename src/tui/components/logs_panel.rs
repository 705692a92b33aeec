//! Logs panel component
//!
//! Shows the tracing events captured by `TuiLogLayer`, newest at the
//! bottom. Follows new entries until the user scrolls up.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::LogEntry;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    scroll: ScrollState,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    /// Sync with the current buffer contents (call each frame)
    pub fn sync_entries(&mut self, count: usize, viewport_height: usize) {
        self.scroll.update_dimensions(count, viewport_height);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, entries: &[LogEntry], ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        self.sync_entries(entries.len(), area.height.saturating_sub(2) as usize);

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| ListItem::new(format_log_entry(entry)).style(theme.log_style(entry.level)))
            .collect();

        let title = if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(focused))
                .title(title)
                .title_style(theme.title_style()),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓ PgUp/PgDn:scroll  End:follow")
    }
}

/// One log line as displayed
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 14, 5, 9).unwrap(),
            level: LogLevel::Warn,
            target: "arena_board".to_string(),
            message: "gate jammed".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "[14:05:09] WARN  gate jammed");
    }

    #[test]
    fn test_follows_until_scrolled_up() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(50, 10);
        assert_eq!(panel.visible_range(), (40, 50));

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        panel.handle_key(up);
        panel.sync_entries(60, 10);
        assert_eq!(panel.visible_range(), (39, 49));

        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        panel.handle_key(end);
        panel.sync_entries(61, 10);
        assert_eq!(panel.visible_range(), (51, 61));
    }
}
