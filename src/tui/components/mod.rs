// Components module - reusable UI building blocks
//
// Shell components are drawn in every view:
// - Title bar: app name and view tabs
// - Status bar: board totals, theme, key hints, year
// - Toast: transient overlay
//
// Arena components:
// - Text field / form panel: the sign-up form
// - Leaderboard panel: the ranked board
//
// Logs panel backs the logs view.

pub mod form_panel;
pub mod leaderboard_panel;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod text_field;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
