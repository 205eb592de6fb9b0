// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-call guard.
//!
//! [`Once`] lets the wrapped action through exactly once; every later call
//! is a no-op. The action is consumed by the first call, so plain `FnOnce`
//! closures work. No timers, no errors.
//!
//! # Example
//!
//! ```
//! use lull::once;
//!
//! let guard = once(|_: (), name: &str| format!("hello, {name}"));
//!
//! assert_eq!(guard.call((), "alice"), Some("hello, alice".to_string()));
//! assert_eq!(guard.call((), "bob"), None);
//! assert!(guard.has_run());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

/// A guard that executes its wrapped action at most once.
///
/// Cheap to clone; all clones share the guard, so the action still runs
/// only once across them.
pub struct Once<C, A, R> {
    #[allow(clippy::type_complexity)]
    action: Arc<Mutex<Option<Box<dyn FnOnce(C, A) -> R + Send + 'static>>>>,
}

impl<C, A, R> Clone for Once<C, A, R> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
        }
    }
}

impl<C, A, R> Once<C, A, R> {
    /// Create a single-call guard around `action`.
    pub fn new(action: impl FnOnce(C, A) -> R + Send + 'static) -> Self {
        Self {
            action: Arc::new(Mutex::new(Some(Box::new(action)))),
        }
    }

    /// Run the action if it has not run yet.
    ///
    /// Returns `Some(result)` on the first call and `None` afterwards.
    pub fn call(&self, context: C, args: A) -> Option<R> {
        let action = self.action.lock().take();
        action.map(|action| action(context, args))
    }

    /// Whether the action has already been consumed.
    #[must_use]
    pub fn has_run(&self) -> bool {
        self.action.lock().is_none()
    }
}

/// Build a [`Once`] guard around `action`.
pub fn once<C, A, R>(action: impl FnOnce(C, A) -> R + Send + 'static) -> Once<C, A, R> {
    Once::new(action)
}
