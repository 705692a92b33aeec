//! Leaderboard panel
//!
//! Draws the rows the renderer left on the `BoardDisplay`: rank, name and
//! the score as currently shown (mid count-up it lags the real score).

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::arena::BoardDisplay;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Modifier,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Rows taken by the table header
const HEADER_HEIGHT: usize = 1;

pub struct LeaderboardPanel {
    scroll: ScrollState,
}

impl LeaderboardPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
        }
    }

    /// Sync scroll dimensions with the board (call before drawing)
    pub fn sync_rows(&mut self, rows: usize, area: Rect) {
        let viewport = (area.height.saturating_sub(2) as usize).saturating_sub(HEADER_HEIGHT);
        self.scroll.update_dimensions(rows, viewport);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, display: &BoardDisplay, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        self.sync_rows(display.rows().len(), area);

        let title = if display.rows().is_empty() {
            " Leaderboard ".to_string()
        } else {
            format!(" Leaderboard ({}) ", display.rows().len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(title)
            .title_style(theme.title_style());

        if display.is_empty_visible() {
            let placeholder = Paragraph::new("No challengers yet.")
                .alignment(Alignment::Center)
                .style(theme.muted_style())
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let rows: Vec<Row> = display.rows()[start..end]
            .iter()
            .map(|row| {
                let cells = vec![
                    Cell::from(format!("{:>3}", row.rank)).style(theme.rank_style(row.rank)),
                    Cell::from(row.name.clone()),
                    Cell::from(format!("{:>5}", row.shown_score)),
                ];
                if row.highlighted {
                    Row::new(cells).style(theme.highlight_style())
                } else {
                    Row::new(cells).style(theme.base_style())
                }
            })
            .collect();

        let header = Row::new(vec!["  #", "Name", "Score"])
            .style(theme.muted_style().add_modifier(Modifier::BOLD));

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Fill(1),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(block);

        f.render_widget(table, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

impl Default for LeaderboardPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LeaderboardPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Leaderboard
    }
}

impl Scrollable for LeaderboardPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LeaderboardPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓ PgUp/PgDn:scroll  Ctrl+Y:copy")
    }
}
