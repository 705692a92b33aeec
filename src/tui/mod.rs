// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, frame ticks)
// - Key routing: global keys, then the focused component, then the view

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::arena::ScoreSource;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use traits::{ComponentId, Handled, Interactive};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether or not the loop failed.
pub async fn run_tui(
    log_buffer: LogBuffer,
    config: &Config,
    scores: Box<dyn ScoreSource>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(log_buffer, config, scores);

    let result = run_event_loop(&mut terminal, &mut app).await;
    app.shutdown();

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on two sources with tokio::select!:
/// 1. Keyboard input
/// 2. Frame ticks, which run scheduled animation tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut frame_interval = tokio::time::interval(app.frame_interval);
    // A slow frame shouldn't trigger a burst of catch-up frames
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, Instant::now());
                    }
                }
            } => {}

            _ = frame_interval.tick() => {
                app.on_frame(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → View → Focused component
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key, now) {
        return;
    }

    match app.view {
        View::Hero => match key.code {
            KeyCode::Enter => app.enter_arena(),
            KeyCode::Esc => app.quit(),
            _ => {}
        },
        View::Arena => handle_arena_key(app, key, now),
        View::Logs => {
            if app.logs_panel.handle_key(key) == Handled::No && key.code == KeyCode::Esc {
                app.set_view(View::Hero);
            }
        }
    }
}

/// Global keys work the same regardless of view - returns true if handled
fn handle_global_keys(app: &mut App, key: &KeyEvent, now: Instant) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('y') if ctrl => app.copy_board(now),
        KeyCode::F(1) => app.set_view(View::Hero),
        KeyCode::F(2) => app.enter_arena(),
        KeyCode::F(3) => app.set_view(View::Logs),
        KeyCode::F(4) => app.next_theme(),
        _ => return false,
    }
    true
}

/// Arena keys: focus movement and submit, everything else goes to the
/// focused component
fn handle_arena_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Esc => {
            app.set_view(View::Hero);
            return;
        }
        KeyCode::Enter if app.arena_focus.is_text_input() => {
            app.submit(now);
            return;
        }
        _ => {}
    }

    match app.arena_focus {
        ComponentId::NameField => {
            app.name_field.edit(&mut app.form.name.value, key);
        }
        ComponentId::EmailField => {
            app.email_field.edit(&mut app.form.email.value, key);
        }
        ComponentId::Leaderboard => {
            app.leaderboard_panel.handle_key(key);
        }
        ComponentId::Logs => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::render::{COUNT_UP_DURATION, HIGHLIGHT_DURATION};
    use crate::arena::score::ScriptedScores;
    use crate::arena::StatusKind;
    use crate::tui::theme::ThemeKind;

    fn app_with(scores: impl IntoIterator<Item = u8>) -> App {
        App::new(
            LogBuffer::new(),
            &Config::default(),
            Box::new(ScriptedScores::new(scores)),
        )
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_str(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    /// Hero → arena → fill both fields → submit
    fn sign_up(app: &mut App, name: &str, email: &str, now: Instant) {
        app.enter_arena();
        type_str(app, name, now);
        press(app, KeyCode::Tab, now);
        type_str(app, email, now);
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn test_hero_enter_focuses_name_field() {
        let mut app = app_with(Vec::new());
        assert_eq!(app.view, View::Hero);
        assert_eq!(app.focus(), None);

        press(&mut app, KeyCode::Enter, Instant::now());
        assert_eq!(app.view, View::Arena);
        assert_eq!(app.focus(), Some(ComponentId::NameField));
    }

    #[test]
    fn test_starts_with_empty_placeholder() {
        let app = app_with(Vec::new());
        assert!(app.display.is_empty_visible());
        assert!(app.scheduler.is_idle());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app_with(Vec::new());
        let now = Instant::now();
        app.enter_arena();

        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.focus(), Some(ComponentId::EmailField));
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.focus(), Some(ComponentId::Leaderboard));
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.focus(), Some(ComponentId::NameField));
        press(&mut app, KeyCode::BackTab, now);
        assert_eq!(app.focus(), Some(ComponentId::Leaderboard));
    }

    #[test]
    fn test_successful_sign_up_animates_top_row() {
        let mut app = app_with([64]);
        let now = Instant::now();
        sign_up(&mut app, "Frank", "frank@example.com", now);

        assert_eq!(app.board.len(), 1);
        let status = app.form.status().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(app.form.name.value.is_empty());
        assert!(app.form.email.value.is_empty());

        let row = &app.display.rows()[0];
        assert!(row.highlighted);
        assert_eq!(row.shown_score, 0);

        app.on_frame(now + COUNT_UP_DURATION);
        assert_eq!(app.display.rows()[0].shown_score, 64);
        assert!(app.display.rows()[0].highlighted);

        app.on_frame(now + HIGHLIGHT_DURATION);
        assert!(!app.display.rows()[0].highlighted);
        assert!(app.scheduler.is_idle());
    }

    #[test]
    fn test_rejected_sign_up_flags_fields() {
        let mut app = app_with([64]);
        let now = Instant::now();
        sign_up(&mut app, "Eve", "not-an-email", now);

        assert!(app.board.is_empty());
        assert!(app.form.email.error);
        assert!(!app.form.name.error);
        assert_eq!(app.form.status().unwrap().kind, StatusKind::Error);
        // Values stay for correction
        assert_eq!(app.form.name.value, "Eve");
        assert!(app.display.is_empty_visible());
    }

    #[test]
    fn test_enter_on_leaderboard_does_not_submit() {
        let mut app = app_with([64]);
        let now = Instant::now();
        app.enter_arena();
        type_str(&mut app, "Frank", now);
        app.arena_focus = ComponentId::Leaderboard;
        press(&mut app, KeyCode::Enter, now);
        assert!(app.board.is_empty());
        assert!(app.form.status().is_none());
    }

    #[test]
    fn test_esc_returns_to_hero_then_quits() {
        let mut app = app_with(Vec::new());
        let now = Instant::now();
        app.enter_arena();

        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.view, View::Hero);
        assert!(!app.should_quit);

        // Only Esc leaves from the hero view
        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_function_keys_switch_views_and_theme() {
        let mut app = app_with(Vec::new());
        let now = Instant::now();

        press(&mut app, KeyCode::F(3), now);
        assert_eq!(app.view, View::Logs);
        assert_eq!(app.focus(), Some(ComponentId::Logs));

        press(&mut app, KeyCode::F(2), now);
        assert_eq!(app.view, View::Arena);

        press(&mut app, KeyCode::F(4), now);
        assert_eq!(app.theme_kind, ThemeKind::Ember);

        press(&mut app, KeyCode::F(1), now);
        assert_eq!(app.view, View::Hero);
    }

    #[test]
    fn test_ctrl_c_quits_from_a_field() {
        let mut app = app_with(Vec::new());
        let now = Instant::now();
        app.enter_arena();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key_event(&mut app, ctrl_c, now);
        assert!(app.should_quit);
        assert!(app.form.name.value.is_empty());
    }

    #[test]
    fn test_shutdown_cancels_pending_animation() {
        let mut app = app_with([64]);
        let now = Instant::now();
        sign_up(&mut app, "Frank", "frank@example.com", now);
        assert!(!app.scheduler.is_idle());
        assert_eq!(app.form.last_render().in_flight(&app.scheduler), 2);

        app.shutdown();
        assert!(app.scheduler.is_idle());
        let handles = app.form.last_render();
        assert!(handles.count_up.as_ref().is_some_and(|h| h.is_cancelled()));
        assert!(handles.highlight.as_ref().is_some_and(|h| h.is_cancelled()));
        // Nothing left to move the row
        app.on_frame(now + HIGHLIGHT_DURATION);
        assert!(app.display.rows()[0].highlighted);
        assert_eq!(app.display.rows()[0].shown_score, 0);
    }

    #[test]
    fn test_board_text_uses_final_scores() {
        let mut app = app_with([64]);
        let now = Instant::now();
        assert_eq!(app.board_text(now), None);

        sign_up(&mut app, "Frank", "frank@example.com", now);
        let text = app.board_text(now).unwrap();
        assert!(text.contains("Frank"));
        assert!(text.contains("64"));
        // The live row is still mid count-up
        assert_eq!(app.display.rows()[0].shown_score, 0);
    }

    #[test]
    fn test_toast_expires_on_frame() {
        let mut app = app_with(Vec::new());
        let now = Instant::now();
        app.show_toast("Nothing to copy", now);
        app.on_frame(now + Duration::from_millis(500));
        assert!(app.toast.is_some());
        app.on_frame(now + Duration::from_secs(2));
        assert!(app.toast.is_none());
    }
}
