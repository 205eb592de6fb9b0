// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use lull_runtime::impls::manual::{ManualInstant, ManualTimer};
use lull_runtime::timer::TimerService;
use parking_lot::Mutex;

/// One recorded execution of a [`Recorder`] action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall<C, A> {
    /// The invocation context the action was executed with.
    pub context: C,
    /// The arguments the action was executed with.
    pub args: A,
    /// The virtual time of the execution, when the recorder carries a timer.
    pub at: Option<ManualInstant>,
}

/// Records every execution of the action it hands out.
///
/// Cheap to clone; all clones share the same log. Built with
/// [`Recorder::with_timer`], each recorded call is stamped with the manual
/// timer's virtual time, so tests can assert *when* a controller fired, not
/// only how often.
pub struct Recorder<C, A> {
    calls: Arc<Mutex<Vec<RecordedCall<C, A>>>>,
    timer: Option<ManualTimer>,
}

impl<C, A> Clone for Recorder<C, A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
            timer: self.timer.clone(),
        }
    }
}

impl<C, A> Default for Recorder<C, A>
where
    C: Send + 'static,
    A: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> Recorder<C, A>
where
    C: Send + 'static,
    A: Send + 'static,
{
    /// Create a recorder without timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            timer: None,
        }
    }

    /// Create a recorder that stamps each call with `timer`'s virtual time.
    #[must_use]
    pub fn with_timer(timer: ManualTimer) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            timer: Some(timer),
        }
    }

    /// Record one execution; returns the total call count afterwards.
    pub fn record(&self, context: C, args: A) -> usize {
        let at = self.timer.as_ref().map(|timer| timer.now());
        let mut calls = self.calls.lock();
        calls.push(RecordedCall { context, args, at });
        calls.len()
    }

    /// An action closure that records into this recorder.
    ///
    /// The closure returns the running call count, which makes it a handy
    /// wrapped action with an observable result.
    pub fn action(&self) -> impl FnMut(C, A) -> usize + Send + 'static {
        let recorder = self.clone();
        move |context, args| recorder.record(context, args)
    }

    /// Number of recorded executions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Snapshot of all recorded executions.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall<C, A>>
    where
        C: Clone,
        A: Clone,
    {
        self.calls.lock().clone()
    }

    /// The arguments of the most recent execution, if any.
    #[must_use]
    pub fn last_args(&self) -> Option<A>
    where
        A: Clone,
    {
        self.calls.lock().last().map(|call| call.args.clone())
    }

    /// The virtual timestamps of all executions, in order.
    ///
    /// Empty stamps are skipped for recorders built without a timer.
    #[must_use]
    pub fn fire_times(&self) -> Vec<ManualInstant> {
        self.calls.lock().iter().filter_map(|call| call.at).collect()
    }
}
