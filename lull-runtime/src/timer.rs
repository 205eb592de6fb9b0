// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;

/// A deferred callback handed to a timer service.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// A point in time as observed by a timer service's clock.
///
/// Unlike [`std::time::Instant`], implementations are allowed to move
/// backwards (wall clocks, rewound virtual clocks). Subtraction is therefore
/// checked: `checked_duration_since` returns `None` when `earlier` is in
/// fact later, which callers treat as clock skew.
pub trait TimeInstant: Copy + Debug + Ord + Send + Sync + 'static {
    /// The time elapsed from `earlier` to `self`, or `None` if the clock
    /// moved backwards in between.
    fn checked_duration_since(&self, earlier: Self) -> Option<Duration>;
}

impl TimeInstant for std::time::Instant {
    fn checked_duration_since(&self, earlier: Self) -> Option<Duration> {
        std::time::Instant::checked_duration_since(self, earlier)
    }
}

/// A schedule-once timer service plus clock.
///
/// This is the only dependency of the invocation controllers. Contract:
///
/// - `schedule_after` accepts a zero delay; the callback still runs
///   deferred, never from inside `schedule_after` itself.
/// - `cancel` is best-effort and idempotent: cancelling a handle whose
///   callback already ran, or cancelling it twice, is a no-op.
/// - For a single owner, callbacks run in the order they were scheduled.
///
/// Implementations are cheap to clone; clones observe the same clock.
pub trait TimerService: Clone + Send + Sync + Debug + 'static {
    /// Identifies one scheduled callback for cancellation.
    type Handle: Send + 'static;

    /// The clock's notion of "now".
    type Instant: TimeInstant;

    /// Schedule `callback` to run once, `delay` from now.
    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Handle;

    /// Best-effort cancellation of a scheduled callback.
    fn cancel(&self, handle: &Self::Handle);

    /// Read the current time.
    fn now(&self) -> Self::Instant;
}
