// Views module - screen-level rendering
//
// Each view fills the content slot between the title and status bars:
// - Hero: title card and the call to action
// - Arena: sign-up form and leaderboard
// - Logs: captured tracing output

mod arena;
mod hero;

use super::app::{App, View};
use super::traits::RenderContext;
use crate::tui::components::{status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(8),    // content
            Constraint::Length(2), // status
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    match app.view {
        View::Hero => hero::render(f, chunks[1], app),
        View::Arena => arena::render(f, chunks[1], app),
        View::Logs => {
            let entries = app.log_buffer.get_all();
            // Built from fields so the panel can be borrowed mutably
            let ctx = RenderContext::new(&app.theme, app.focus(), app.frame_count);
            app.logs_panel.render(f, chunks[1], &entries, &ctx);
        }
    }

    status_bar::render(f, chunks[2], app);

    // Toast goes on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
