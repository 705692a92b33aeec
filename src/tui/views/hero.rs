// Hero view - the landing card

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BANNER: [&str; 3] = [
    "▄▀█ █▀█ █▀▀ █▄░█ ▄▀█",
    "█▀█ █▀▄ ██▄ █░▀█ █▀█",
    "",
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme.title_style())))
        .collect();

    lines.push(Line::from(Span::styled(
        "Enter the arena. Survive the index.",
        theme.base_style().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        "Sign up, get seeded, watch the board reshuffle.",
        theme.muted_style(),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[ ⏎  Enter the Arena ]",
        theme.highlight_style(),
    )));

    // Center the card vertically
    let height = lines.len() as u16;
    let top = inner.height.saturating_sub(height) / 2;
    let card = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(inner)[1];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), card);
}
