// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use lull_core::{BoxAction, LullError, Result, Wait};
use lull_runtime::timer::{TimeInstant, TimerCallback, TimerService};

/// Edge configuration for a [`Throttle`].
///
/// Both edges default to enabled. A throttle with both disabled could never
/// fire, so that combination is rejected on invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThrottleOptions {
    /// Fire immediately on the first call of a throttle window.
    pub leading: bool,
    /// Fire once more at the end of a window if calls arrived during it.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl ThrottleOptions {
    /// Leading edge only: no end-of-window catch-up fire.
    #[must_use]
    pub const fn leading_only() -> Self {
        Self {
            leading: true,
            trailing: false,
        }
    }

    /// Trailing edge only: the call starting a window never itself fires.
    #[must_use]
    pub const fn trailing_only() -> Self {
        Self {
            leading: false,
            trailing: true,
        }
    }

    /// Reject configurations that can never fire.
    ///
    /// # Errors
    ///
    /// [`LullError::InvalidConfiguration`] when both edges are disabled.
    pub fn validate(&self) -> Result<()> {
        if !self.leading && !self.trailing {
            return Err(LullError::invalid_configuration(
                "throttle with leading and trailing both disabled can never fire",
            ));
        }
        Ok(())
    }
}

/// Mutable record owned by one throttle controller.
///
/// `previous` is the time of the most recent actual execution (`None`
/// initially and after cancel). `saved` is populated iff a trailing fire is
/// pending; later calls in the window overwrite it. `epoch` is bumped on
/// every cancel and reschedule so a callback that lost a cancel race
/// recognizes itself as stale.
struct ThrottleState<C, A, R, H, I> {
    action: Option<BoxAction<C, A, R>>,
    pending: Option<H>,
    previous: Option<I>,
    saved: Option<(C, A)>,
    epoch: u64,
}

/// Throttle controller: executes the wrapped action at most once per `wait`
/// interval.
///
/// Cheap to clone; all clones share the same state record. See the
/// [module documentation](crate::throttle) for the edge semantics.
pub struct Throttle<C, A, R, T: TimerService> {
    timer: T,
    wait: Wait,
    options: ThrottleOptions,
    state: Arc<Mutex<ThrottleState<C, A, R, T::Handle, T::Instant>>>,
}

impl<C, A, R, T: TimerService> Clone for Throttle<C, A, R, T> {
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            wait: self.wait,
            options: self.options,
            state: Arc::clone(&self.state),
        }
    }
}

impl<C, A, R, T> Throttle<C, A, R, T>
where
    C: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    T: TimerService,
{
    /// Create a throttle controller around `action`.
    ///
    /// `wait` is the window length. The wait and the options are validated
    /// on invocation, not here.
    pub fn new(
        action: impl FnMut(C, A) -> R + Send + 'static,
        wait: impl Into<Wait>,
        options: ThrottleOptions,
        timer: T,
    ) -> Self {
        Self {
            timer,
            wait: wait.into(),
            options,
            state: Arc::new(Mutex::new(ThrottleState {
                action: Some(Box::new(action)),
                pending: None,
                previous: None,
                saved: None,
                epoch: 0,
            })),
        }
    }

    /// Request an invocation with the given context and arguments.
    ///
    /// Returns `Some(result)` when this call itself executed the action
    /// (window elapsed, never started, or clock skew) and `None` otherwise;
    /// the result of a deferred trailing fire is not observable.
    ///
    /// # Errors
    ///
    /// [`LullError::InvalidConfiguration`] when both edges are disabled,
    /// [`LullError::InvalidArgument`] when the wait is not a valid duration
    /// or the wrapped action is not callable.
    pub fn call(&self, context: C, args: A) -> Result<Option<R>> {
        self.options.validate()?;
        let wait = self.wait.to_duration()?;
        let mut state = self.state.lock();
        if state.action.is_none() {
            return Err(LullError::invalid_argument(
                "wrapped action is not callable",
            ));
        }

        let now = self.timer.now();
        if state.previous.is_none() && !self.options.leading {
            // Suppress the initial leading fire; the window starts counting.
            state.previous = Some(now);
        }

        // One condition covers "window elapsed", "window never started" and
        // a clock that moved backwards since the last execution.
        let elapsed = state
            .previous
            .map(|previous| now.checked_duration_since(previous));
        let due = match elapsed {
            None => true,
            Some(None) => true,
            Some(Some(elapsed)) => elapsed >= wait,
        };

        if due {
            state.epoch += 1;
            if let Some(handle) = state.pending.take() {
                self.timer.cancel(&handle);
            }
            state.saved = None;
            state.previous = Some(now);
            let Some(mut action) = state.action.take() else {
                return Ok(None);
            };
            drop(state);
            trace!("throttle: leading-edge fire");
            let result = action(context, args);
            self.state.lock().action = Some(action);
            return Ok(Some(result));
        }

        if state.pending.is_none() && self.options.trailing {
            state.saved = Some((context, args));
            state.epoch += 1;
            let epoch = state.epoch;
            let remaining = match elapsed {
                Some(Some(elapsed)) => wait - elapsed,
                // Not due implies a measured elapsed below the wait.
                _ => wait,
            };

            let shared = Arc::clone(&self.state);
            let timer = self.timer.clone();
            let leading = self.options.leading;
            let callback: TimerCallback = Box::new(move || {
                let mut state = shared.lock();
                if state.epoch != epoch {
                    return;
                }
                // Bookkeeping is completed before the action runs, so a
                // panicking action leaves the record consistent.
                state.pending = None;
                state.previous = if leading { Some(timer.now()) } else { None };
                let Some((context, args)) = state.saved.take() else {
                    return;
                };
                let Some(mut action) = state.action.take() else {
                    return;
                };
                drop(state);
                trace!("throttle: trailing-edge fire");
                let _ = action(context, args);
                shared.lock().action = Some(action);
            });
            let handle = self.timer.schedule_after(remaining, callback);
            state.pending = Some(handle);
            trace!(
                remaining_ms = remaining.as_millis() as u64,
                "throttle: trailing-edge fire scheduled"
            );
            return Ok(None);
        }

        if state.pending.is_some() {
            // Later calls inside the window silently overwrite the
            // context/arguments the trailing fire will use.
            state.saved = Some((context, args));
        }
        Ok(None)
    }

    /// Drop any pending trailing fire and forget the last execution time.
    ///
    /// Resets the record to its initial idle shape; once this returns, no
    /// deferred fire from prior state will occur. The next call starts a
    /// fresh window. Idempotent.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        state.epoch += 1;
        if let Some(handle) = state.pending.take() {
            self.timer.cancel(&handle);
            trace!("throttle: pending trailing fire cancelled");
        }
        state.saved = None;
        state.previous = None;
    }

    /// Whether a trailing fire is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}

/// Build a [`Throttle`] on the default tokio timer.
///
/// Mirrors `Throttle::new` with the timer filled in; must be called from
/// within a tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<C, A, R>(
    action: impl FnMut(C, A) -> R + Send + 'static,
    wait: impl Into<Wait>,
    options: ThrottleOptions,
) -> Throttle<C, A, R, crate::DefaultTimer>
where
    C: Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Throttle::new(action, wait, options, crate::DefaultTimer::default())
}
