//! Frame-driven task scheduling
//!
//! A small, single-threaded stand-in for a display refresh loop. Work is
//! queued as either a per-frame task (called on every frame until it says
//! it is done) or a one-shot timeout. The owner drives everything by
//! calling [`FrameScheduler::run_frame`] once per rendered frame.
//!
//! Every scheduled item yields a [`TaskHandle`]. Cancelling the handle
//! drops the task before its next run, which gives display teardown a
//! deterministic way to stop in-flight animations.
//!
//! Time is always passed in explicitly, so tests can step frames without
//! sleeping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What a per-frame task wants after running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Run again next frame
    Continue,
    /// Finished, drop the task
    Done,
}

/// Work that runs once per frame against a shared context
pub trait FrameTask<C> {
    fn on_frame(&mut self, ctx: &mut C, now: Instant) -> FrameStatus;
}

impl<C, F> FrameTask<C> for F
where
    F: FnMut(&mut C, Instant) -> FrameStatus,
{
    fn on_frame(&mut self, ctx: &mut C, now: Instant) -> FrameStatus {
        self(ctx, now)
    }
}

/// Cancellation handle for a scheduled task
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    /// Stop the task; it will not run again
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

type Callback<C> = Box<dyn FnOnce(&mut C)>;

enum TaskKind<C> {
    Frame(Box<dyn FrameTask<C>>),
    Timeout { due: Instant, callback: Callback<C> },
}

struct Scheduled<C> {
    id: u64,
    cancelled: Arc<AtomicBool>,
    kind: TaskKind<C>,
}

/// Queue of per-frame tasks and timeouts over a context `C`
pub struct FrameScheduler<C> {
    tasks: Vec<Scheduled<C>>,
    next_id: u64,
}

impl<C> FrameScheduler<C> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    fn push(&mut self, kind: TaskKind<C>) -> TaskHandle {
        self.next_id += 1;
        let cancelled = Arc::new(AtomicBool::new(false));
        self.tasks.push(Scheduled {
            id: self.next_id,
            cancelled: cancelled.clone(),
            kind,
        });
        TaskHandle {
            id: self.next_id,
            cancelled,
        }
    }

    /// Run `task` on every frame until it returns [`FrameStatus::Done`]
    pub fn request_frame(&mut self, task: impl FrameTask<C> + 'static) -> TaskHandle {
        self.push(TaskKind::Frame(Box::new(task)))
    }

    /// Run `callback` once, on the first frame at or after `now + delay`
    pub fn set_timeout(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut C) + 'static,
        now: Instant,
    ) -> TaskHandle {
        self.push(TaskKind::Timeout {
            due: now + delay,
            callback: Box::new(callback),
        })
    }

    /// Advance one frame. Returns how many tasks are still pending.
    pub fn run_frame(&mut self, ctx: &mut C, now: Instant) -> usize {
        let due = std::mem::take(&mut self.tasks);
        let mut kept = Vec::with_capacity(due.len());

        for mut task in due {
            if task.cancelled.load(Ordering::SeqCst) {
                tracing::trace!(task = task.id, "Dropping cancelled task");
                continue;
            }

            let keep = match &mut task.kind {
                TaskKind::Frame(frame) => frame.on_frame(ctx, now) == FrameStatus::Continue,
                TaskKind::Timeout { due, .. } => now < *due,
            };

            if keep {
                kept.push(task);
            } else if let TaskKind::Timeout { callback, .. } = task.kind {
                callback(ctx);
            }
        }

        self.tasks = kept;
        self.tasks.len()
    }

    /// Whether `handle` still refers to a live task
    pub fn is_scheduled(&self, handle: &TaskHandle) -> bool {
        !handle.is_cancelled() && self.tasks.iter().any(|t| t.id == handle.id)
    }

    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| !t.cancelled.load(Ordering::SeqCst))
            .count()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl<C> Default for FrameScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_frame_task_runs_until_done() {
        let mut scheduler: FrameScheduler<u32> = FrameScheduler::new();
        let mut ticks = 0u32;
        let t0 = Instant::now();

        scheduler.request_frame(|count: &mut u32, _now: Instant| {
            *count += 1;
            if *count >= 3 {
                FrameStatus::Done
            } else {
                FrameStatus::Continue
            }
        });

        assert_eq!(scheduler.run_frame(&mut ticks, t0), 1);
        assert_eq!(scheduler.run_frame(&mut ticks, t0 + ms(16)), 1);
        assert_eq!(scheduler.run_frame(&mut ticks, t0 + ms(32)), 0);
        assert_eq!(ticks, 3);

        // Nothing left to run
        scheduler.run_frame(&mut ticks, t0 + ms(48));
        assert_eq!(ticks, 3);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_timeout_fires_once_at_deadline() {
        let mut scheduler: FrameScheduler<Vec<&'static str>> = FrameScheduler::new();
        let mut log = Vec::new();
        let t0 = Instant::now();

        let handle = scheduler.set_timeout(ms(100), |log| log.push("fired"), t0);
        assert!(scheduler.is_scheduled(&handle));

        scheduler.run_frame(&mut log, t0 + ms(99));
        assert!(log.is_empty());

        scheduler.run_frame(&mut log, t0 + ms(100));
        assert_eq!(log, vec!["fired"]);
        assert!(!scheduler.is_scheduled(&handle));

        scheduler.run_frame(&mut log, t0 + ms(500));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_cancelled_task_never_runs_again() {
        let mut scheduler: FrameScheduler<u32> = FrameScheduler::new();
        let mut ticks = 0;
        let t0 = Instant::now();

        let handle = scheduler.request_frame(|count: &mut u32, _: Instant| {
            *count += 1;
            FrameStatus::Continue
        });
        scheduler.run_frame(&mut ticks, t0);
        assert_eq!(ticks, 1);

        handle.cancel();
        assert_eq!(scheduler.pending(), 0);
        scheduler.run_frame(&mut ticks, t0 + ms(16));
        assert_eq!(ticks, 1);
        assert!(!scheduler.is_scheduled(&handle));
    }

    #[test]
    fn test_cancel_timeout_before_due() {
        let mut scheduler: FrameScheduler<bool> = FrameScheduler::new();
        let mut fired = false;
        let t0 = Instant::now();

        let handle = scheduler.set_timeout(ms(10), |fired| *fired = true, t0);
        handle.cancel();
        scheduler.run_frame(&mut fired, t0 + ms(20));
        assert!(!fired);
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut scheduler: FrameScheduler<()> = FrameScheduler::new();
        let t0 = Instant::now();
        let a = scheduler.set_timeout(ms(1), |_| {}, t0);
        let b = scheduler.set_timeout(ms(1), |_| {}, t0);
        a.cancel();
        assert!(!b.is_cancelled());
        assert!(!scheduler.is_scheduled(&a));
        assert!(scheduler.is_scheduled(&b));
        assert_eq!(scheduler.pending(), 1);
    }
}
