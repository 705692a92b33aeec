// Arena module - sign-up validation, scoring and the leaderboard
//
// Everything here is display-agnostic. The TUI and the headless runner
// both drive the same FormController against the same Leaderboard.
//
// Flow of a submission:
//   FormController::submit -> validate -> Leaderboard::insert
//     -> render::render (rebuilds BoardDisplay, queues animations)
//   FrameScheduler::run_frame (once per frame) -> highlight / count-up tasks

pub mod form;
pub mod render;
pub mod schedule;
pub mod score;
pub mod store;
pub mod validate;

pub use form::{FormController, StatusKind};
pub use render::BoardDisplay;
pub use schedule::FrameScheduler;
pub use score::{RandomScore, ScoreSource};
pub use store::Leaderboard;
