// Status bar component
//
// Footer line: board totals and theme on the left, key hints and the
// copyright year on the right.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Board totals as shown in the footer
pub fn summary(entries: usize, top_score: Option<u8>, compact: bool) -> String {
    let top = top_score.map_or_else(|| "-".to_string(), |s| s.to_string());
    if compact {
        format!(" ⚔ {} │ ▲ {}", entries, top)
    } else {
        let noun = if entries == 1 { "challenger" } else { "challengers" };
        format!(" ⚔ {} {} │ top score {}", entries, noun, top)
    }
}

/// Copyright notice with the current year
pub fn copyright() -> String {
    format!("© {} ", chrono::Local::now().year())
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let compact = !bp.at_least(Breakpoint::Normal);

    let left = if compact {
        summary(app.board.len(), app.board.top_score(), true)
    } else {
        format!(
            "{} │ {}",
            summary(app.board.len(), app.board.top_score(), false),
            app.theme_kind.name()
        )
    };

    let right = if bp.at_least(Breakpoint::Wide) {
        format!("{}  {}", app.focus_hint(), copyright())
    } else {
        copyright()
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.theme.border_style(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right.chars().count() as u16)])
        .split(inner);

    f.render_widget(
        Paragraph::new(left).style(app.theme.status_style()),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .style(app.theme.muted_style()),
        chunks[1],
    );
}
