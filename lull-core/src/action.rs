// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The boxed callable a controller wraps.
//!
//! An action takes an explicit invocation context `C` (the stand-in for a
//! dynamic receiver) and one argument bundle `A` (callers use tuples for
//! several positional arguments), and returns `R`. It lives boxed inside
//! the controller's state record because both the synchronous invoke path
//! and the deferred timer callback have to reach it.

/// A wrapped action: callable with an invocation context and arguments.
pub type BoxAction<C, A, R> = Box<dyn FnMut(C, A) -> R + Send + 'static>;
