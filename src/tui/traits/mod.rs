//! Component trait system for the TUI
//!
//! Panels declare their capabilities through traits instead of App
//! knowing how to scroll or route keys for each of them.
//!
//! ```text
//!                    App (routes keys, owns state)
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//!    ┌───────────┐      ┌─────────────┐      ┌──────────┐
//!    │ TextField │      │ Leaderboard │      │   Logs   │
//!    │ name/email│      │    Panel    │      │  Panel   │
//!    └───────────┘      └─────────────┘      └──────────┘
//! ```
//!
//! - [`Component`] - identity
//! - [`Scrollable`] - components with scrollable content
//! - [`Interactive`] - components that handle keyboard input

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;
