//! Periodic fetch cycles bound to the lifetime of a stream.

use std::future::Future;
use std::time::Duration;

use iced::futures::Stream;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};

use crate::scheduler::Scheduler;

/// Runs a fetch cycle on every tick of a [`Scheduler`] timer.
pub struct Poller<S> {
    scheduler: S,
    period: Duration,
}

enum Event<T> {
    Tick,
    Finished(Result<T, JoinError>),
}

impl<S: Scheduler> Poller<S> {
    /// Create a poller that ticks every `period`.
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self { scheduler, period }
    }

    /// Start polling and yield each cycle's output as it completes.
    ///
    /// The timer starts on the first poll of the stream. Cycles are spawned
    /// onto the tokio runtime and may overlap; outputs arrive in completion
    /// order. Dropping the stream cancels the timer and aborts every cycle
    /// still in flight.
    pub fn stream<F, Fut, T>(self, mut cycle: F) -> impl Stream<Item = T> + Send + 'static
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        async_stream::stream! {
            let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();

            tracing::debug!(period = ?self.period, "Starting poller");

            let _timer = self.scheduler.schedule(
                self.period,
                Box::new(move || {
                    let _ = tick_tx.send(());
                }),
            );
            let mut in_flight = JoinSet::new();

            loop {
                let event = tokio::select! {
                    Some(()) = tick_rx.recv() => Event::Tick,
                    Some(finished) = in_flight.join_next(), if !in_flight.is_empty() => {
                        Event::Finished(finished)
                    }
                    else => break,
                };

                match event {
                    Event::Tick => {
                        if !in_flight.is_empty() {
                            tracing::debug!(in_flight = in_flight.len(), "Previous cycle still running");
                        }
                        in_flight.spawn(cycle());
                    }
                    Event::Finished(Ok(output)) => yield output,
                    Event::Finished(Err(e)) => {
                        tracing::error!(error = %e, "Fetch cycle task failed");
                    }
                }
            }
        }
    }
}
