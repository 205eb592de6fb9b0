// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use lull_core::{BoxAction, LullError, Result, Wait};
use lull_runtime::timer::{TimerCallback, TimerService};

/// Mutable record owned by one debounce controller.
///
/// `pending` holds the handle of the scheduled delayed invocation; at most
/// one is outstanding at any time. `saved` carries the latest call's
/// context/arguments for the deferred fire (unused in immediate mode).
/// `epoch` is bumped on every cancel and reschedule so that a timer
/// callback which lost a cancel race recognizes itself as stale.
struct DebounceState<C, A, R, H> {
    action: Option<BoxAction<C, A, R>>,
    pending: Option<H>,
    saved: Option<(C, A)>,
    last_result: Option<R>,
    epoch: u64,
}

/// Debounce controller: delays the wrapped action until a quiet period of
/// `wait` has elapsed since the last invocation request.
///
/// Cheap to clone; all clones share the same state record. See the
/// [module documentation](crate::debounce) for semantics and an example.
pub struct Debounce<C, A, R, T: TimerService> {
    timer: T,
    wait: Wait,
    immediate: bool,
    state: Arc<Mutex<DebounceState<C, A, R, T::Handle>>>,
}

impl<C, A, R, T: TimerService> Clone for Debounce<C, A, R, T> {
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            wait: self.wait,
            immediate: self.immediate,
            state: Arc::clone(&self.state),
        }
    }
}

impl<C, A, R, T> Debounce<C, A, R, T>
where
    C: Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    T: TimerService,
{
    /// Create a debounce controller around `action`.
    ///
    /// `wait` is the quiet-period length; `immediate` switches the fire
    /// from the trailing edge of a burst to its leading edge. The wait is
    /// validated on invocation, not here.
    pub fn new(
        action: impl FnMut(C, A) -> R + Send + 'static,
        wait: impl Into<Wait>,
        immediate: bool,
        timer: T,
    ) -> Self {
        Self {
            timer,
            wait: wait.into(),
            immediate,
            state: Arc::new(Mutex::new(DebounceState {
                action: Some(Box::new(action)),
                pending: None,
                saved: None,
                last_result: None,
                epoch: 0,
            })),
        }
    }

    /// Request an invocation with the given context and arguments.
    ///
    /// Returns the action's last known result, which may be stale or `None`
    /// until the first fire completes. In immediate mode the first call of
    /// a burst executes the action synchronously and returns its fresh
    /// result.
    ///
    /// # Errors
    ///
    /// [`LullError::InvalidArgument`] if the wait is not a valid duration
    /// or the wrapped action is not callable.
    pub fn call(&self, context: C, args: A) -> Result<Option<R>> {
        let wait = self.wait.to_duration()?;
        let mut state = self.state.lock();
        if state.action.is_none() {
            return Err(LullError::invalid_argument(
                "wrapped action is not callable",
            ));
        }

        // Every request resets the quiet-period clock.
        let was_pending = state.pending.is_some();
        if let Some(handle) = state.pending.take() {
            self.timer.cancel(&handle);
        }
        state.epoch += 1;
        let epoch = state.epoch;

        let mut fire = None;
        if self.immediate {
            if !was_pending {
                if let Some(action) = state.action.take() {
                    fire = Some((action, context, args));
                }
            }
            // Mid-burst immediate calls only reset the timer.
        } else {
            // The deferred fire uses whatever was saved last.
            state.saved = Some((context, args));
        }

        let callback: TimerCallback = if self.immediate {
            // The timer's only role in immediate mode is to mark the end of
            // the quiet period.
            let shared = Arc::clone(&self.state);
            Box::new(move || {
                let mut state = shared.lock();
                if state.epoch == epoch {
                    state.pending = None;
                }
            })
        } else {
            let shared = Arc::clone(&self.state);
            Box::new(move || {
                let mut state = shared.lock();
                if state.epoch != epoch {
                    return;
                }
                // Bookkeeping is completed before the action runs, so a
                // panicking action leaves the record consistent.
                state.pending = None;
                let Some((context, args)) = state.saved.take() else {
                    return;
                };
                let Some(mut action) = state.action.take() else {
                    return;
                };
                drop(state);
                trace!("debounce: trailing-edge fire");
                let result = action(context, args);
                let mut state = shared.lock();
                state.last_result = Some(result);
                state.action = Some(action);
            })
        };
        let handle = self.timer.schedule_after(wait, callback);
        state.pending = Some(handle);
        trace!(wait_ms = wait.as_millis() as u64, "debounce: quiet-period timer scheduled");

        if let Some((mut action, context, args)) = fire {
            drop(state);
            trace!("debounce: leading-edge fire");
            let result = action(context, args);
            let mut state = self.state.lock();
            state.action = Some(action);
            state.last_result = Some(result.clone());
            return Ok(Some(result));
        }

        Ok(state.last_result.clone())
    }

    /// Drop any pending fire without executing the action.
    ///
    /// Resets the record to its initial idle shape; once this returns, no
    /// deferred fire from prior state will occur. Idempotent.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        state.epoch += 1;
        if let Some(handle) = state.pending.take() {
            self.timer.cancel(&handle);
            trace!("debounce: pending fire cancelled");
        }
        state.saved = None;
        state.last_result = None;
    }

    /// Whether a delayed invocation is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}

/// Build a [`Debounce`] on the default tokio timer.
///
/// Mirrors `Debounce::new` with the timer filled in; must be called from
/// within a tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<C, A, R>(
    action: impl FnMut(C, A) -> R + Send + 'static,
    wait: impl Into<Wait>,
    immediate: bool,
) -> Debounce<C, A, R, crate::DefaultTimer>
where
    C: Send + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    Debounce::new(action, wait, immediate, crate::DefaultTimer::default())
}
