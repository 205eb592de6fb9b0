// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Timer service abstraction for the lull invocation controllers.
//!
//! Controllers are written against the [`timer::TimerService`] trait
//! (schedule-once-after-delay, cancel-by-handle, clock read) instead of any
//! concrete runtime, so they stay deterministic and testable. Two backends
//! are provided under [`impls`]:
//!
//! - `TokioTimer` (feature `runtime-tokio`, default): schedules via spawned
//!   tasks on the current tokio runtime and honors
//!   `tokio::time::{pause, advance}`.
//! - `ManualTimer`: a virtual clock advanced explicitly by the caller,
//!   always available, used by deterministic tests and simulations.

pub mod impls;
pub mod timer;
