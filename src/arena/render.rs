//! Leaderboard rendering
//!
//! [`render`] projects the current ranking onto a [`BoardDisplay`], which is
//! the display surface the front-ends draw from. Every call rebuilds the
//! rows from scratch; there is no diffing.
//!
//! When asked to highlight the first row, two cosmetic tasks are queued on
//! the frame scheduler: a timeout that clears the highlight, and a per-frame
//! count-up that eases the shown score from 0 to the real one.

use super::schedule::{FrameScheduler, FrameStatus, FrameTask, TaskHandle};
use super::store::Entry;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long the top row stays highlighted after an insert
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

/// How long the score count-up takes
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(700);

/// Identity of one rendered row
///
/// Fresh ids are minted on every render, so tasks aimed at a row from an
/// older render simply find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// One line of the rendered leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: RowId,
    /// 1-based position
    pub rank: usize,
    pub name: String,
    /// Stored score
    pub score: u8,
    /// Score currently on screen (lags `score` while counting up)
    pub shown_score: u8,
    pub highlighted: bool,
}

/// Rendered leaderboard: the row list plus its empty-state placeholder
#[derive(Debug)]
pub struct BoardDisplay {
    rows: Vec<DisplayRow>,
    empty_visible: bool,
    next_row_id: u64,
}

impl BoardDisplay {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            empty_visible: true,
            next_row_id: 0,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Whether the "no entries" placeholder is showing
    pub fn is_empty_visible(&self) -> bool {
        self.empty_visible
    }

    /// Look up a live row by id
    pub fn row_mut(&mut self, id: RowId) -> Option<&mut DisplayRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    fn mint_id(&mut self) -> RowId {
        self.next_row_id += 1;
        RowId(self.next_row_id)
    }

    /// Plain-text table of the rows, as shown on screen
    pub fn to_text(&self) -> String {
        if self.empty_visible {
            return String::from("No challengers yet.\n");
        }

        let name_width = self
            .rows
            .iter()
            .map(|row| row.name.width())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        let mut out = format!("{:>4}  {:<name_width$}  {:>5}\n", "#", "Name", "Score");
        for row in &self.rows {
            // Pad by display width so wide glyphs still line up
            let padding = name_width.saturating_sub(row.name.width());
            out.push_str(&format!(
                "{:>4}  {}{}  {:>5}\n",
                row.rank,
                row.name,
                " ".repeat(padding),
                row.shown_score
            ));
        }
        out
    }
}

impl Default for BoardDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles for the cosmetic tasks a render queued
#[derive(Debug, Default)]
pub struct RenderHandles {
    pub highlight: Option<TaskHandle>,
    pub count_up: Option<TaskHandle>,
}

impl RenderHandles {
    /// Stop both tasks if they are still in flight
    pub fn cancel(&self) {
        if let Some(handle) = &self.highlight {
            handle.cancel();
        }
        if let Some(handle) = &self.count_up {
            handle.cancel();
        }
    }

    /// How many of the tasks are still queued and not cancelled
    pub fn in_flight<C>(&self, scheduler: &FrameScheduler<C>) -> usize {
        [&self.highlight, &self.count_up]
            .into_iter()
            .flatten()
            .filter(|handle| scheduler.is_scheduled(handle))
            .count()
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`
fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Ease-out cubic count from 0 to `target`
///
/// Reaches `target` exactly once `elapsed >= duration`.
pub fn eased_score(target: u8, elapsed: Duration, duration: Duration) -> u8 {
    let p = progress(elapsed, duration);
    let eased = 1.0 - (1.0 - p).powi(3);
    (f64::from(target) * eased).round() as u8
}

/// Per-frame task that counts a row's shown score up to its real score
struct CountUp {
    row: RowId,
    target: u8,
    started: Instant,
}

impl FrameTask<BoardDisplay> for CountUp {
    fn on_frame(&mut self, display: &mut BoardDisplay, now: Instant) -> FrameStatus {
        let elapsed = now.saturating_duration_since(self.started);

        if let Some(row) = display.row_mut(self.row) {
            row.shown_score = eased_score(self.target, elapsed, COUNT_UP_DURATION);
        }

        if progress(elapsed, COUNT_UP_DURATION) >= 1.0 {
            FrameStatus::Done
        } else {
            FrameStatus::Continue
        }
    }
}

/// Rebuild `display` from `entries`
///
/// With `highlight_first`, the rank-1 row is highlighted for
/// [`HIGHLIGHT_DURATION`] and its score counts up over
/// [`COUNT_UP_DURATION`].
pub fn render(
    display: &mut BoardDisplay,
    entries: &[Entry],
    highlight_first: bool,
    scheduler: &mut FrameScheduler<BoardDisplay>,
    now: Instant,
) -> RenderHandles {
    display.rows.clear();

    if entries.is_empty() {
        display.empty_visible = true;
        return RenderHandles::default();
    }
    display.empty_visible = false;

    for (index, entry) in entries.iter().enumerate() {
        let id = display.mint_id();
        display.rows.push(DisplayRow {
            id,
            rank: index + 1,
            name: entry.name.clone(),
            score: entry.score,
            shown_score: entry.score,
            highlighted: false,
        });
    }

    if !highlight_first {
        return RenderHandles::default();
    }

    let top = &mut display.rows[0];
    let row = top.id;
    let target = top.score;
    top.highlighted = true;
    top.shown_score = 0;

    let highlight = scheduler.set_timeout(
        HIGHLIGHT_DURATION,
        move |display: &mut BoardDisplay| {
            if let Some(row) = display.row_mut(row) {
                row.highlighted = false;
            }
        },
        now,
    );

    let count_up = scheduler.request_frame(CountUp {
        row,
        target,
        started: now,
    });

    RenderHandles {
        highlight: Some(highlight),
        count_up: Some(count_up),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u8) -> Entry {
        Entry {
            name: name.to_string(),
            score,
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn summary(display: &BoardDisplay) -> Vec<(usize, String, u8)> {
        display
            .rows()
            .iter()
            .map(|r| (r.rank, r.name.clone(), r.score))
            .collect()
    }

    #[test]
    fn test_empty_shows_placeholder() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let handles = render(&mut display, &[], true, &mut scheduler, Instant::now());

        assert!(display.is_empty_visible());
        assert!(display.rows().is_empty());
        assert!(handles.highlight.is_none());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_rows_carry_rank_name_score() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let entries = [entry("Dave", 85), entry("Carol", 40)];
        render(&mut display, &entries, false, &mut scheduler, Instant::now());

        assert!(!display.is_empty_visible());
        assert_eq!(
            summary(&display),
            vec![(1, "Dave".to_string(), 85), (2, "Carol".to_string(), 40)]
        );
        assert!(display.rows().iter().all(|r| r.shown_score == r.score));
        assert!(display.rows().iter().all(|r| !r.highlighted));
    }

    #[test]
    fn test_render_is_idempotent_without_highlight() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let entries = [entry("A", 9), entry("B", 9), entry("C", 1)];
        let now = Instant::now();

        render(&mut display, &entries, false, &mut scheduler, now);
        let first = summary(&display);
        render(&mut display, &entries, false, &mut scheduler, now);
        render(&mut display, &entries, false, &mut scheduler, now);
        assert_eq!(summary(&display), first);
        assert_eq!(display.to_text(), {
            let mut again = BoardDisplay::new();
            render(&mut again, &entries, false, &mut scheduler, now);
            again.to_text()
        });
    }

    #[test]
    fn test_rerender_mints_new_row_ids() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let entries = [entry("A", 1)];
        let now = Instant::now();

        render(&mut display, &entries, false, &mut scheduler, now);
        let old = display.rows()[0].id;
        render(&mut display, &entries, false, &mut scheduler, now);
        assert_ne!(display.rows()[0].id, old);
        assert!(display.row_mut(old).is_none());
    }

    #[test]
    fn test_highlight_clears_after_one_second() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        let entries = [entry("Top", 50), entry("Next", 10)];
        render(&mut display, &entries, true, &mut scheduler, t0);

        assert!(display.rows()[0].highlighted);
        assert!(!display.rows()[1].highlighted);

        scheduler.run_frame(&mut display, t0 + ms(999));
        assert!(display.rows()[0].highlighted);

        scheduler.run_frame(&mut display, t0 + ms(1000));
        assert!(!display.rows()[0].highlighted);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_count_up_eases_to_exact_score() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        render(&mut display, &[entry("Max", 100)], true, &mut scheduler, t0);

        assert_eq!(display.rows()[0].shown_score, 0);

        scheduler.run_frame(&mut display, t0 + ms(350));
        // 1 - 0.5^3 = 0.875
        assert_eq!(display.rows()[0].shown_score, 88);

        let pending = scheduler.run_frame(&mut display, t0 + ms(700));
        assert_eq!(display.rows()[0].shown_score, 100);
        // Only the highlight timeout remains
        assert_eq!(pending, 1);
    }

    #[test]
    fn test_count_up_is_monotonic() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        render(&mut display, &[entry("Max", 73)], true, &mut scheduler, t0);

        let mut last = 0;
        for frame in 0..=50 {
            scheduler.run_frame(&mut display, t0 + ms(frame * 16));
            let shown = display.rows()[0].shown_score;
            assert!(shown >= last);
            last = shown;
        }
        assert_eq!(last, 73);
    }

    #[test]
    fn test_eased_score_endpoints() {
        assert_eq!(eased_score(100, Duration::ZERO, COUNT_UP_DURATION), 0);
        assert_eq!(eased_score(100, COUNT_UP_DURATION, COUNT_UP_DURATION), 100);
        assert_eq!(eased_score(100, ms(5000), COUNT_UP_DURATION), 100);
        assert_eq!(eased_score(0, ms(350), COUNT_UP_DURATION), 0);
        assert_eq!(eased_score(42, ms(10), Duration::ZERO), 42);
    }

    #[test]
    fn test_cancelled_count_up_freezes() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();
        let handles = render(&mut display, &[entry("Max", 100)], true, &mut scheduler, t0);

        scheduler.run_frame(&mut display, t0 + ms(100));
        assert_eq!(handles.in_flight(&scheduler), 2);
        let frozen = display.rows()[0].shown_score;
        handles.cancel();
        assert_eq!(handles.in_flight(&scheduler), 0);
        scheduler.run_frame(&mut display, t0 + ms(700));

        assert_eq!(display.rows()[0].shown_score, frozen);
        assert!(display.rows()[0].highlighted);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_stale_tasks_do_not_touch_new_rows() {
        let mut display = BoardDisplay::new();
        let mut scheduler = FrameScheduler::new();
        let t0 = Instant::now();

        render(&mut display, &[entry("Old", 60)], true, &mut scheduler, t0);
        // Re-render without highlight before the first animation finished
        render(&mut display, &[entry("Old", 60)], false, &mut scheduler, t0 + ms(10));

        scheduler.run_frame(&mut display, t0 + ms(100));
        assert_eq!(display.rows()[0].shown_score, 60);
        assert!(!display.rows()[0].highlighted);
    }

    #[test]
    fn test_to_text() {
        let mut display = BoardDisplay::new();
        assert_eq!(display.to_text(), "No challengers yet.\n");

        let mut scheduler = FrameScheduler::new();
        render(
            &mut display,
            &[entry("Dave", 85), entry("Carol", 40)],
            false,
            &mut scheduler,
            Instant::now(),
        );
        let text = display.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Dave"));
        assert!(lines[1].trim_end().ends_with("85"));
        assert!(lines[2].starts_with("   2"));
    }
}
