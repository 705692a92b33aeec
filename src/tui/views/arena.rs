// Arena view - sign-up form beside (or above) the leaderboard

use crate::tui::app::App;
use crate::tui::components::form_panel;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Height the form needs: two fields, hint, two status lines, borders
const FORM_HEIGHT: u16 = 11;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let bp = Breakpoint::from_width(area.width);

    let chunks = if bp.side_by_side() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(4)])
            .split(area)
    };

    let ctx = RenderContext::new(&app.theme, app.focus(), app.frame_count);
    form_panel::render(
        f,
        chunks[0],
        &app.form,
        &app.name_field,
        &app.email_field,
        &ctx,
    );
    app.leaderboard_panel
        .render(f, chunks[1], &app.display, &ctx);
}
