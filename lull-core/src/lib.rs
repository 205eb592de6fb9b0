// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by the lull invocation controllers.
//!
//! This crate carries the pieces that are independent of any timer backend:
//!
//! - [`LullError`] and the [`Result`] alias — the two error kinds a
//!   controller can raise at invocation time.
//! - [`Wait`] — the controllers' wait interval, kept as fractional
//!   milliseconds and validated lazily on first invocation.
//! - [`BoxAction`] — the boxed callable a controller wraps.

pub mod action;
pub mod error;
pub mod wait;

pub use self::action::BoxAction;
pub use self::error::{LullError, Result};
pub use self::wait::Wait;
