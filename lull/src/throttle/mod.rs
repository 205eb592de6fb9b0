// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The throttle invocation controller.
//!
//! A [`Throttle`] guarantees the wrapped action executes at most once per
//! `wait` interval. Which calls fire is governed by [`ThrottleOptions`]:
//!
//! | `leading` | `trailing` | behavior |
//! |---|---|---|
//! | true | true | fires on the first call of a burst, and again at window end if more calls occurred |
//! | false | true | only fires at window end, never on the triggering call itself |
//! | true | false | only fires on the call that starts or resumes a window |
//! | false | false | rejected with `InvalidConfiguration` on invocation |
//!
//! Calls that land inside a window while a trailing fire is pending only
//! overwrite the context/arguments the eventual fire will use. A clock that
//! moved backwards since the last execution is treated like an elapsed
//! window: the call fires immediately and restarts the window.
//!
//! # Example
//!
//! ```
//! use lull::{ManualTimer, Throttle, ThrottleOptions};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # fn main() -> lull::Result<()> {
//! let timer = ManualTimer::new();
//! let hits = Arc::new(AtomicU32::new(0));
//!
//! let counter = hits.clone();
//! let throttled = Throttle::new(
//!     move |_: (), _: u32| { counter.fetch_add(1, Ordering::SeqCst); },
//!     100u64,
//!     ThrottleOptions::default(),
//!     timer.clone(),
//! );
//!
//! throttled.call((), 1)?; // leading edge fires
//! timer.advance(Duration::from_millis(50));
//! throttled.call((), 2)?; // within the window: trailing fire scheduled
//! timer.advance(Duration::from_millis(50));
//!
//! assert_eq!(hits.load(Ordering::SeqCst), 2); // t=0 and t=100
//! # Ok(())
//! # }
//! ```

mod implementation;

#[cfg(feature = "runtime-tokio")]
pub use implementation::throttle;
pub use implementation::{Throttle, ThrottleOptions};
