// TUI application state
//
// App owns the whole session: the form, the leaderboard, the display
// surface the renderer writes into, and the frame scheduler that animates
// it. Key handling lives in tui/mod.rs and calls into the methods here.

use super::clipboard;
use super::components::leaderboard_panel::LeaderboardPanel;
use super::components::logs_panel::LogsPanel;
use super::components::text_field::TextField;
use super::components::Toast;
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, Interactive, Scrollable};
use crate::arena::render::{self, BoardDisplay};
use crate::arena::{FormController, FrameScheduler, Leaderboard, ScoreSource};
use crate::config::Config;
use crate::logging::LogBuffer;
use std::time::{Duration, Instant};

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Hero,
    Arena,
    Logs,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Hero, View::Arena, View::Logs]
    }

    /// Display name for the title bar tabs
    pub fn name(&self) -> &'static str {
        match self {
            View::Hero => "Hero",
            View::Arena => "Arena",
            View::Logs => "Logs",
        }
    }

    /// Function key that opens this view
    pub fn key_hint(&self) -> &'static str {
        match self {
            View::Hero => "F1",
            View::Arena => "F2",
            View::Logs => "F3",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub view: View,

    /// Focused component inside the arena view
    pub arena_focus: ComponentId,

    pub form: FormController,
    pub board: Leaderboard,

    /// Surface the renderer writes rows into; the scheduler animates it
    pub display: BoardDisplay,
    pub scheduler: FrameScheduler<BoardDisplay>,

    pub name_field: TextField,
    pub email_field: TextField,
    pub leaderboard_panel: LeaderboardPanel,
    pub logs_panel: LogsPanel,

    /// Log buffer for the logs view
    pub log_buffer: LogBuffer,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub toast: Option<Toast>,

    pub should_quit: bool,

    /// Frames run so far
    pub frame_count: u64,

    /// Time between frame ticks
    pub frame_interval: Duration,
}

impl App {
    pub fn new(log_buffer: LogBuffer, config: &Config, scores: Box<dyn ScoreSource>) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using Arena", config.theme);
            ThemeKind::default()
        });

        let board = Leaderboard::new(scores);
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        render::render(
            &mut display,
            board.entries(),
            false,
            &mut scheduler,
            Instant::now(),
        );

        Self {
            view: View::default(),
            arena_focus: ComponentId::NameField,
            form: FormController::new(),
            board,
            display,
            scheduler,
            name_field: TextField::new(ComponentId::NameField, "Gladiator name", "who dares?"),
            email_field: TextField::new(
                ComponentId::EmailField,
                "Secure channel",
                "you@example.com",
            ),
            leaderboard_panel: LeaderboardPanel::new(),
            logs_panel: LogsPanel::new(),
            log_buffer,
            theme_kind,
            theme: theme_kind.theme(),
            toast: None,
            should_quit: false,
            frame_count: 0,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(config.frame_rate.max(1))),
        }
    }

    /// Component receiving keys in the current view
    pub fn focus(&self) -> Option<ComponentId> {
        match self.view {
            View::Hero => None,
            View::Arena => Some(self.arena_focus),
            View::Logs => Some(ComponentId::Logs),
        }
    }

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!("View {} -> {}", self.view.name(), view.name());
        }
        self.view = view;
    }

    /// Hero call-to-action: jump to the arena with the name field ready
    pub fn enter_arena(&mut self) {
        self.set_view(View::Arena);
        self.arena_focus = ComponentId::NameField;
    }

    pub fn focus_next(&mut self) {
        self.arena_focus = self.arena_focus.next_focus();
    }

    pub fn focus_prev(&mut self) {
        self.arena_focus = self.arena_focus.prev_focus();
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::debug!("Theme switched to {}", self.theme_kind.name());
    }

    /// Submit the form as it stands
    pub fn submit(&mut self, now: Instant) {
        let outcome = self.form.submit(
            &mut self.board,
            &mut self.display,
            &mut self.scheduler,
            now,
        );
        if outcome.is_ok() {
            // The freshly highlighted row is the top one
            self.leaderboard_panel.scroll_to_top();
        }
    }

    /// Advance one frame: run scheduled tasks and drop an expired toast
    pub fn on_frame(&mut self, now: Instant) {
        if !self.scheduler.is_idle() {
            self.scheduler.run_frame(&mut self.display, now);
        }
        self.frame_count = self.frame_count.wrapping_add(1);

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now));
    }

    /// Board as plain text with final scores, or None while empty
    pub fn board_text(&mut self, now: Instant) -> Option<String> {
        if self.board.is_empty() {
            return None;
        }
        // Fresh surface: no highlight, no count-up, nothing scheduled
        let mut snapshot = BoardDisplay::new();
        render::render(
            &mut snapshot,
            self.board.entries(),
            false,
            &mut self.scheduler,
            now,
        );
        Some(snapshot.to_text())
    }

    /// Copy the board to the clipboard and report it in a toast
    pub fn copy_board(&mut self, now: Instant) {
        let text = self.board_text(now);
        let result = clipboard::copy(text, "leaderboard");
        self.show_toast(result.toast_message(), now);
    }

    /// Keybind hint for the status bar
    pub fn focus_hint(&self) -> &'static str {
        match self.focus() {
            None => "Enter:enter the arena  F2:arena  F3:logs  F4:theme  Esc:quit",
            Some(ComponentId::NameField | ComponentId::EmailField) => {
                "Enter:submit  Tab:next field  Esc:back"
            }
            Some(ComponentId::Leaderboard) => self
                .leaderboard_panel
                .focus_hint()
                .unwrap_or_default(),
            Some(ComponentId::Logs) => self.logs_panel.focus_hint().unwrap_or_default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Stop the in-flight animation before the terminal goes away
    pub fn shutdown(&mut self) {
        let handles = self.form.last_render();
        let in_flight = handles.in_flight(&self.scheduler);
        handles.cancel();
        tracing::info!(
            entries = self.board.len(),
            cancelled = in_flight,
            "Arena closed"
        );
    }
}
