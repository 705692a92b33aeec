// Form panel component
//
// Name and email fields, the submit hint and the status line left by the
// last submission.

use crate::arena::{FormController, StatusKind};
use crate::tui::components::text_field::TextField;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(
    f: &mut Frame,
    area: Rect,
    form: &FormController,
    name_field: &TextField,
    email_field: &TextField,
    ctx: &RenderContext,
) {
    let theme = ctx.theme;
    let focused = ctx.focus.is_some_and(|id| id.is_text_input());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(focused))
        .title(" Enter the Arena ")
        .title_style(theme.title_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(1), // hint
            Constraint::Min(1),    // status
        ])
        .split(inner);

    name_field.render(f, chunks[0], &form.name.value, form.name.error, ctx);
    email_field.render(f, chunks[1], &form.email.value, form.email.error, ctx);

    let hint = Line::from(vec![
        Span::styled(" ⏎ ", theme.base_style().fg(theme.accent)),
        Span::styled("lock in your registration", theme.muted_style()),
    ]);
    f.render_widget(Paragraph::new(hint), chunks[2]);

    if let Some(status) = form.status() {
        let (icon, style) = match status.kind {
            StatusKind::Success => ("✓", theme.success_style()),
            StatusKind::Error => ("✗", theme.error_style()),
        };
        let line = Line::from(Span::styled(format!(" {} {}", icon, status.message), style));
        f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), chunks[3]);
    }
}
