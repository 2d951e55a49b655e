//! Repeating timers behind an injectable interface.
//!
//! [`TokioScheduler`] drives real time; [`ManualClock`] is a deterministic
//! clock for tests that only moves when [`ManualClock::advance`] is called.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Callback invoked on every tick.
pub type TickFn = Box<dyn FnMut() + Send + 'static>;

/// Something that can run a callback immediately and then once per period.
pub trait Scheduler: Send + Sync + 'static {
    /// Invoke `tick` once now and then every `period` until the returned
    /// handle is cancelled or dropped.
    fn schedule(&self, period: Duration, tick: TickFn) -> TimerHandle;
}

/// Ownership of a running timer. Dropping it stops the timer.
#[derive(Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    task: Option<tokio::task::AbortHandle>,
}

impl TimerHandle {
    fn new(cancelled: Arc<AtomicBool>, task: Option<tokio::task::AbortHandle>) -> Self {
        Self { cancelled, task }
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Whether the timer has been stopped.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Scheduler backed by `tokio::time::interval`.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, period: Duration, mut tick: TickFn) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // A slow tick pushes the next one back rather than bursting.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                tick();
            }
        });

        TimerHandle::new(cancelled, Some(task.abort_handle()))
    }
}

struct ManualTimer {
    next_due: Duration,
    period: Duration,
    cancelled: Arc<AtomicBool>,
    tick: Option<TickFn>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    timers: Vec<ManualTimer>,
}

/// A fake clock for deterministic tests.
///
/// Time starts at zero. Callbacks run synchronously on the thread calling
/// [`ManualClock::schedule`] or [`ManualClock::advance`].
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers that have not been cancelled.
    pub fn active_timers(&self) -> usize {
        self.lock()
            .timers
            .iter()
            .filter(|t| !t.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Move time forward, firing every tick that falls due on the way in
    /// due-time order.
    pub fn advance(&self, by: Duration) {
        let target = self.lock().now + by;

        loop {
            // Take the earliest due callback out so it runs without the lock held.
            let (index, mut tick) = {
                let mut state = self.lock();
                state
                    .timers
                    .retain(|t| !t.cancelled.load(Ordering::SeqCst));

                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.next_due <= target && t.tick.is_some())
                    .min_by_key(|(_, t)| t.next_due)
                    .map(|(i, _)| i);

                let Some(index) = next else {
                    state.now = target;
                    return;
                };

                let timer = &mut state.timers[index];
                let due = timer.next_due;
                timer.next_due += timer.period;
                let Some(tick) = timer.tick.take() else {
                    continue;
                };
                state.now = due;
                (index, tick)
            };

            tick();

            let mut state = self.lock();
            if let Some(timer) = state.timers.get_mut(index) {
                timer.tick = Some(tick);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        // A panicking callback poisons nothing we care about.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Scheduler for ManualClock {
    fn schedule(&self, period: Duration, mut tick: TickFn) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));

        tick();

        let mut state = self.lock();
        let next_due = state.now + period;
        state.timers.push(ManualTimer {
            next_due,
            period,
            cancelled: cancelled.clone(),
            tick: Some(tick),
        });

        TimerHandle::new(cancelled, None)
    }
}
