// Title bar component
//
// App name with one tab per view; the active view is drawn in the accent.

use crate::config::VERSION;
use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut spans = vec![Span::styled(" ⚔ Arena Board ", theme.title_style())];
    for view in View::all() {
        let label = format!(" {}:{} ", view.key_hint(), view.name());
        let style = if *view == app.view {
            theme
                .base_style()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme.muted_style()
        };
        spans.push(Span::styled(label, style));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title_top(Line::from(format!(" v{} ", VERSION)).right_aligned()),
    );

    f.render_widget(title, area);
}
