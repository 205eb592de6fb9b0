// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Timed invocation controllers: debounce and throttle.
//!
//! Both controllers wrap a caller-supplied action and regulate *when* and
//! *how often* it actually executes in response to a high-frequency stream
//! of invocation requests (UI events, sensor callbacks, polling signals):
//!
//! - [`Debounce`] delays execution until a quiet period of length `wait`
//!   has elapsed since the last request; optionally fires on the first
//!   request of a burst instead of at its end.
//! - [`Throttle`] executes the action at most once per `wait` interval,
//!   with independently configurable leading and trailing edges.
//! - [`Once`] (a small relative) lets the action through exactly once.
//!
//! Controllers depend only on the [`TimerService`] abstraction, so they run
//! unchanged against the tokio backend in production and the deterministic
//! [`ManualTimer`] in tests.
//!
//! # Example
//!
//! ```
//! use lull::{Debounce, ManualTimer};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn main() -> lull::Result<()> {
//! let timer = ManualTimer::new();
//! let hits = Arc::new(AtomicU32::new(0));
//!
//! let counter = hits.clone();
//! let debounced = Debounce::new(
//!     move |_ctx: (), query: String| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         query.len()
//!     },
//!     100u64,
//!     false,
//!     timer.clone(),
//! );
//!
//! // A burst of requests: only the last one reaches the action.
//! debounced.call((), "r".to_string())?;
//! debounced.call((), "ru".to_string())?;
//! debounced.call((), "rust".to_string())?;
//! assert_eq!(hits.load(Ordering::SeqCst), 0);
//!
//! timer.advance(Duration::from_millis(100));
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```

pub mod debounce;
pub mod once;
pub mod throttle;

pub use lull_core::{BoxAction, LullError, Result, Wait};
pub use lull_runtime::impls::manual::{ManualInstant, ManualTimer};
#[cfg(feature = "runtime-tokio")]
pub use lull_runtime::impls::tokio::TokioTimer;
pub use lull_runtime::timer::{TimeInstant, TimerCallback, TimerService};

pub use self::debounce::Debounce;
#[cfg(feature = "runtime-tokio")]
pub use self::debounce::debounce;
pub use self::once::{once, Once};
pub use self::throttle::{Throttle, ThrottleOptions};
#[cfg(feature = "runtime-tokio")]
pub use self::throttle::throttle;

/// The timer service the convenience constructors use.
#[cfg(feature = "runtime-tokio")]
pub type DefaultTimer = TokioTimer;
