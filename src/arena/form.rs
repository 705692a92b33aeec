//! Registration form controller
//!
//! Owns the two input fields and the status line. A submission is handled
//! to completion in one call: validate, insert, render, clear. There is no
//! "submitting" lock; the next submission is accepted right away.

use super::render::{self, BoardDisplay, RenderHandles};
use super::schedule::FrameScheduler;
use super::store::{Entry, Leaderboard};
use super::validate::{validate_submission, ValidationError};
use std::time::Instant;

/// Message shown after a successful registration
pub const SUCCESS_MESSAGE: &str = "Registration locked. Your survival index has been seeded.";

/// One text input plus its error flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub error: bool,
}

impl Field {
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Status line under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

/// Where the controller is in a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct FormController {
    pub name: Field,
    pub email: Field,
    status: Option<FormStatus>,
    phase: FormPhase,
    /// Tasks queued by the last successful render
    last_render: RenderHandles,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both field values (headless input, tests)
    pub fn fill(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name.value = name.into();
        self.email.value = email.into();
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(FormStatus {
            kind,
            message: message.into(),
        });
    }

    fn transition(&mut self, phase: FormPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "Form phase");
        self.phase = phase;
    }

    /// Handle one submission
    ///
    /// On success the new entry is inserted, the board re-rendered with the
    /// top row highlighted, and both fields cleared. On failure the store is
    /// left untouched and the offending fields are flagged.
    pub fn submit(
        &mut self,
        board: &mut Leaderboard,
        display: &mut BoardDisplay,
        scheduler: &mut FrameScheduler<BoardDisplay>,
        now: Instant,
    ) -> Result<Entry, ValidationError> {
        self.transition(FormPhase::Validating);
        self.name.error = false;
        self.email.error = false;

        let outcome = match validate_submission(&self.name.value, &self.email.value) {
            Ok(submission) => {
                self.transition(FormPhase::Success);
                self.set_status(StatusKind::Success, SUCCESS_MESSAGE);

                let entry = board.insert(submission.name);
                // The re-render replaces every row the old tasks pointed at
                self.last_render.cancel();
                self.last_render = render::render(display, board.entries(), true, scheduler, now);

                self.name.clear();
                self.email.clear();

                tracing::info!(name = %entry.name, score = entry.score, "Challenger registered");
                Ok(entry)
            }
            Err(err) => {
                self.transition(FormPhase::Error);
                self.set_status(StatusKind::Error, err.to_string());
                self.name.error = err.flags_name();
                self.email.error = err.flags_email();

                tracing::debug!(error = ?err, "Registration rejected");
                Err(err)
            }
        };

        self.transition(FormPhase::Idle);
        outcome
    }

    /// Handles for the animation queued by the last successful submission
    pub fn last_render(&self) -> &RenderHandles {
        &self.last_render
    }
}
