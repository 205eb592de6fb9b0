// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The debounce invocation controller.
//!
//! A [`Debounce`] delays execution of the wrapped action until a quiet
//! period of length `wait` has elapsed since the last invocation request:
//!
//! - Every call cancels any pending timer and starts a fresh one, so only
//!   the *last* call of a burst reaches the action, `wait` after the burst
//!   ends, with that call's context and arguments.
//! - In immediate mode the *first* call of a burst runs the action
//!   synchronously instead, and the timer only marks the end of the quiet
//!   period; no other call in the burst executes anything.
//! - [`Debounce::call`] returns the last known result of the action, which
//!   is stale (or `None`) until a fire completes.
//! - [`Debounce::cancel`] drops any pending fire without executing the
//!   action. Idempotent.
//!
//! # Example
//!
//! ```
//! use lull::{Debounce, ManualTimer};
//! use std::time::Duration;
//!
//! # fn main() -> lull::Result<()> {
//! let timer = ManualTimer::new();
//!
//! // Immediate mode: the burst's first call fires synchronously.
//! let debounced = Debounce::new(|_: (), n: u32| n * 2, 100u64, true, timer.clone());
//! assert_eq!(debounced.call((), 5)?, Some(10));
//! assert_eq!(debounced.call((), 6)?, Some(10)); // suppressed, stale result
//!
//! timer.advance(Duration::from_millis(100)); // quiet period reached
//! assert_eq!(debounced.call((), 7)?, Some(14)); // new burst fires again
//! # Ok(())
//! # }
//! ```

mod implementation;

#[cfg(feature = "runtime-tokio")]
pub use implementation::debounce;
pub use implementation::Debounce;
