// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic virtual-time timer service.
//!
//! [`ManualTimer`] owns a clock that starts at zero and only moves when the
//! caller says so: [`ManualTimer::advance`] moves it forward and fires every
//! callback whose deadline falls inside the step, on the calling thread, in
//! deadline order (ties in scheduling order). [`ManualTimer::rewind`] moves
//! the clock backwards without touching scheduled deadlines, which lets
//! tests exercise clock-skew handling.
//!
//! # Example
//!
//! ```
//! use lull_runtime::impls::manual::ManualTimer;
//! use lull_runtime::timer::TimerService;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let timer = ManualTimer::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = fired.clone();
//!
//! timer.schedule_after(Duration::from_millis(50), Box::new(move || {
//!     flag.store(true, Ordering::SeqCst);
//! }));
//!
//! timer.advance(Duration::from_millis(49));
//! assert!(!fired.load(Ordering::SeqCst));
//! timer.advance(Duration::from_millis(1));
//! assert!(fired.load(Ordering::SeqCst));
//! ```

use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::timer::{TimeInstant, TimerCallback, TimerService};

/// A point on a [`ManualTimer`]'s clock, as an offset from its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualInstant(Duration);

impl ManualInstant {
    /// The instant `millis` after the timer started.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Whole milliseconds since the timer started.
    #[must_use]
    pub const fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl TimeInstant for ManualInstant {
    fn checked_duration_since(&self, earlier: Self) -> Option<Duration> {
        self.0.checked_sub(earlier.0)
    }
}

/// Handle to a callback scheduled on a [`ManualTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualHandle(u64);

struct Scheduled {
    id: u64,
    deadline: Duration,
    callback: TimerCallback,
}

struct TimerState {
    now: Duration,
    next_id: u64,
    queue: Vec<Scheduled>,
}

/// Virtual-time timer service driven explicitly by the caller.
///
/// Cheap to clone; all clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualTimer {
    inner: Arc<Mutex<TimerState>>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: Vec::new(),
        }
    }
}

impl ManualTimer {
    /// Create a timer whose clock reads zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `duration`, firing every due callback.
    ///
    /// Callbacks run on the calling thread, in deadline order with ties
    /// broken by scheduling order. Callbacks scheduled while advancing are
    /// fired in the same step if their deadline falls inside it. During a
    /// callback, `now()` reads the callback's own deadline.
    pub fn advance(&self, duration: Duration) {
        let target = self.inner.lock().now + duration;
        loop {
            let due = {
                let mut state = self.inner.lock();
                let next = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.deadline <= target)
                    .min_by_key(|(_, entry)| (entry.deadline, entry.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let entry = state.queue.remove(index);
                        state.now = state.now.max(entry.deadline);
                        Some(entry)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            // The lock is released before firing, so a callback may freely
            // schedule or cancel on this same timer.
            match due {
                Some(entry) => {
                    trace!(id = entry.id, at_ms = entry.deadline.as_millis() as u64, "manual timer fired");
                    (entry.callback)();
                }
                None => break,
            }
        }
    }

    /// Move the clock backwards by `duration`, saturating at zero.
    ///
    /// Scheduled deadlines are untouched, so consumers observe a clock that
    /// jumped backwards relative to timestamps they recorded earlier.
    pub fn rewind(&self, duration: Duration) {
        let mut state = self.inner.lock();
        state.now = state.now.saturating_sub(duration);
        trace!(now_ms = state.now.as_millis() as u64, "manual timer rewound");
    }

    /// Number of callbacks currently scheduled.
    #[must_use]
    pub fn scheduled(&self) -> usize {
        self.inner.lock().queue.len()
    }
}

impl TimerService for ManualTimer {
    type Handle = ManualHandle;
    type Instant = ManualInstant;

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        let mut state = self.inner.lock();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now + delay;
        state.queue.push(Scheduled {
            id,
            deadline,
            callback,
        });
        trace!(id, deadline_ms = deadline.as_millis() as u64, "manual timer scheduled");
        ManualHandle(id)
    }

    fn cancel(&self, handle: &Self::Handle) {
        let mut state = self.inner.lock();
        state.queue.retain(|entry| entry.id != handle.0);
    }

    fn now(&self) -> Self::Instant {
        ManualInstant(self.inner.lock().now)
    }
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("ManualTimer")
            .field("now", &state.now)
            .field("scheduled", &state.queue.len())
            .finish()
    }
}
