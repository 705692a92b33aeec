// Headless mode - line-oriented sign-ups without a terminal UI
//
// Each non-blank stdin line is one submission, `name,email`, split at the
// last comma so names may contain commas. Status lines are printed as
// they happen and the final board at EOF. With JSON output the status
// lines move to stderr so stdout carries only the array.

use crate::arena::render::{self, BoardDisplay};
use crate::arena::{FormController, FrameScheduler, Leaderboard, ScoreSource, StatusKind};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Split a submission line into (name, email)
///
/// Returns None for blank lines. A line without a comma is all name.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.rsplit_once(',') {
        Some((name, email)) => Some((name.trim(), email.trim())),
        None => Some((line, "")),
    }
}

/// Board row as written in JSON output
#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    name: &'a str,
    score: u8,
}

/// Everything a headless session owns
pub struct HeadlessSession {
    form: FormController,
    board: Leaderboard,
    display: BoardDisplay,
    scheduler: FrameScheduler<BoardDisplay>,
}

impl HeadlessSession {
    pub fn new(scores: Box<dyn ScoreSource>) -> Self {
        Self {
            form: FormController::new(),
            board: Leaderboard::new(scores),
            display: BoardDisplay::new(),
            scheduler: FrameScheduler::new(),
        }
    }

    /// Submit one line; returns the status line to print, if any
    pub fn submit_line(&mut self, line: &str) -> Option<String> {
        let (name, email) = parse_line(line)?;
        self.form.fill(name, email);

        let outcome = self.form.submit(
            &mut self.board,
            &mut self.display,
            &mut self.scheduler,
            Instant::now(),
        );
        // Animations have no audience here
        self.form.last_render().cancel();
        self.scheduler.run_frame(&mut self.display, Instant::now());

        let status = self.form.status()?;
        let line = match (status.kind, outcome) {
            (StatusKind::Success, Ok(entry)) => format!(
                "✓ {} [{} seeded at {}]",
                status.message, entry.name, entry.score
            ),
            _ => format!("✗ {}", status.message),
        };
        Some(line)
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// Final board as a text table
    pub fn board_text(&mut self) -> String {
        render::render(
            &mut self.display,
            self.board.entries(),
            false,
            &mut self.scheduler,
            Instant::now(),
        );
        self.display.to_text()
    }

    /// Final board as pretty JSON
    pub fn board_json(&self) -> Result<String> {
        let ranked: Vec<RankedEntry> = self
            .board
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| RankedEntry {
                rank: i + 1,
                name: &e.name,
                score: e.score,
            })
            .collect();
        serde_json::to_string_pretty(&ranked).context("Failed to serialize leaderboard")
    }
}

/// Drive a session from `reader` until EOF
///
/// The board goes to `out`. Status lines go to `out` as well, or to
/// `diag` when `json` is set.
pub async fn run<R, W, D>(
    reader: R,
    out: &mut W,
    diag: &mut D,
    session: &mut HeadlessSession,
    json: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    D: Write,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        if let Some(status) = session.submit_line(&line) {
            if json {
                writeln!(diag, "{}", status).context("Failed to write status")?;
            } else {
                writeln!(out, "{}", status).context("Failed to write output")?;
            }
        }
    }

    tracing::info!(entries = session.board().len(), "Input exhausted");

    if json {
        writeln!(out, "{}", session.board_json()?).context("Failed to write output")?;
    } else {
        writeln!(out).context("Failed to write output")?;
        write!(out, "{}", session.board_text()).context("Failed to write output")?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Headless entry point: stdin in, stdout out
pub async fn run_stdio(scores: Box<dyn ScoreSource>, json: bool) -> Result<()> {
    let mut session = HeadlessSession::new(scores);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    run(stdin, &mut stdout, &mut stderr, &mut session, json).await
}
