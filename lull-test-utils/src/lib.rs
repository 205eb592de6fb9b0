// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Test utilities and fixtures for the lull workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! - [`Recorder`] — a clonable fixture whose [`Recorder::action`] closure
//!   logs every execution (context, arguments, virtual timestamp) so tests
//!   can assert exactly which calls reached the action, and when.
//! - [`helpers`] — channel-draining assertions for tokio paused-time tests.
//!
//! # Example
//!
//! ```
//! use lull_test_utils::Recorder;
//!
//! let recorder = Recorder::new();
//! let mut action = recorder.action();
//!
//! action("ctx", 1);
//! action("ctx", 2);
//!
//! assert_eq!(recorder.count(), 2);
//! assert_eq!(recorder.last_args(), Some(2));
//! ```

pub mod helpers;
pub mod recorder;

pub use helpers::{assert_no_recv, recv_timeout};
pub use recorder::{RecordedCall, Recorder};
