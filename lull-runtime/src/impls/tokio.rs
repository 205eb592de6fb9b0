// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use core::time::Duration;

#[cfg(feature = "runtime-tokio")]
use crate::timer::{TimeInstant, TimerCallback, TimerService};

/// Timer service backed by the current tokio runtime.
///
/// Each scheduled callback becomes a spawned task that sleeps and then runs
/// the callback; the handle aborts that task. The clock is
/// [`tokio::time::Instant`], so paused test time
/// (`tokio::time::{pause, advance}`) moves both the sleeps and the clock.
///
/// Must be used from within a tokio runtime; `schedule_after` panics
/// otherwise, same as `tokio::spawn`.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

/// Handle to a scheduled [`TokioTimer`] callback.
#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioHandle(tokio::task::JoinHandle<()>);

#[cfg(feature = "runtime-tokio")]
impl TimeInstant for tokio::time::Instant {
    fn checked_duration_since(&self, earlier: Self) -> Option<Duration> {
        tokio::time::Instant::checked_duration_since(self, earlier)
    }
}

#[cfg(feature = "runtime-tokio")]
impl TimerService for TokioTimer {
    type Handle = TokioHandle;
    type Instant = tokio::time::Instant;

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        TokioHandle(task)
    }

    fn cancel(&self, handle: &Self::Handle) {
        // Aborting a finished task is a no-op, which gives the idempotent
        // cancel the trait asks for.
        handle.0.abort();
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}
