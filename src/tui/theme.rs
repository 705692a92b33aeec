// Theme system for the TUI
//
// Color themes that can be switched at runtime with F4.
// Each theme defines colors for every element of the board.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Arena,
    Ember,
    Frost,
    Mono,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Arena,
            ThemeKind::Ember,
            ThemeKind::Frost,
            ThemeKind::Mono,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Look up a theme by display name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Arena => "Arena",
            ThemeKind::Ember => "Ember",
            ThemeKind::Frost => "Frost",
            ThemeKind::Mono => "Mono",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Arena => Theme::arena(),
            ThemeKind::Ember => Theme::ember(),
            ThemeKind::Frost => Theme::frost(),
            ThemeKind::Mono => Theme::mono(),
        }
    }
}

/// Color theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_type: BorderType,

    // Base colors
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // UI elements
    pub title: Color,
    pub accent: Color,
    pub status_bar: Color,

    // Form feedback
    pub success: Color,
    pub error: Color,

    // Leaderboard
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub podium: [Color; 3],

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::arena()
    }
}

impl Theme {
    /// Sand and blood, the default
    pub fn arena() -> Self {
        Self {
            border_type: BorderType::Rounded,

            fg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Rgb(230, 57, 70),

            title: Color::Rgb(230, 57, 70),
            accent: Color::Rgb(244, 162, 97),
            status_bar: Color::Rgb(244, 162, 97),

            success: Color::Green,
            error: Color::Rgb(230, 57, 70),

            highlight_fg: Color::Black,
            highlight_bg: Color::Rgb(244, 162, 97),
            podium: [
                Color::Rgb(255, 215, 0),
                Color::Rgb(192, 192, 192),
                Color::Rgb(205, 127, 50),
            ],

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    pub fn ember() -> Self {
        Self {
            border_type: BorderType::Thick,

            fg: Color::Rgb(255, 236, 209),
            muted: Color::Rgb(120, 90, 70),
            border: Color::Rgb(150, 75, 40),
            border_focused: Color::Rgb(255, 120, 30),

            title: Color::Rgb(255, 120, 30),
            accent: Color::Rgb(255, 190, 60),
            status_bar: Color::Rgb(255, 190, 60),

            success: Color::Rgb(180, 220, 90),
            error: Color::Rgb(255, 70, 50),

            highlight_fg: Color::Black,
            highlight_bg: Color::Rgb(255, 120, 30),
            podium: [
                Color::Rgb(255, 200, 40),
                Color::Rgb(230, 200, 170),
                Color::Rgb(200, 110, 60),
            ],

            log_error: Color::Rgb(255, 70, 50),
            log_warn: Color::Rgb(255, 190, 60),
            log_info: Color::Rgb(255, 236, 209),
            log_debug: Color::Rgb(150, 75, 40),
            log_trace: Color::Rgb(120, 90, 70),
        }
    }

    pub fn frost() -> Self {
        Self {
            border_type: BorderType::Rounded,

            fg: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),

            title: Color::Rgb(136, 192, 208),
            accent: Color::Rgb(129, 161, 193),
            status_bar: Color::Rgb(143, 188, 187),

            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),

            highlight_fg: Color::Rgb(46, 52, 64),
            highlight_bg: Color::Rgb(136, 192, 208),
            podium: [
                Color::Rgb(235, 203, 139),
                Color::Rgb(229, 233, 240),
                Color::Rgb(208, 135, 112),
            ],

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(76, 86, 106),
        }
    }

    /// No color beyond the terminal's own palette
    pub fn mono() -> Self {
        Self {
            border_type: BorderType::Plain,

            fg: Color::Reset,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::White,

            title: Color::White,
            accent: Color::White,
            status_bar: Color::Gray,

            success: Color::White,
            error: Color::White,

            highlight_fg: Color::Black,
            highlight_bg: Color::White,
            podium: [Color::White, Color::White, Color::White],

            log_error: Color::White,
            log_warn: Color::White,
            log_info: Color::Gray,
            log_debug: Color::DarkGray,
            log_trace: Color::DarkGray,
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style, brighter when the panel has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    /// Freshly inserted top row
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Rank color: podium colors for the top three, plain after that
    pub fn rank_style(&self, rank: usize) -> Style {
        match rank {
            1..=3 => Style::default()
                .fg(self.podium[rank - 1])
                .add_modifier(Modifier::BOLD),
            _ => self.base_style(),
        }
    }

    /// Color for a log severity
    pub fn log_style(&self, level: LogLevel) -> Style {
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        Style::default().fg(color)
    }
}
