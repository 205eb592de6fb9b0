// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lull invocation controllers.
//!
//! Controllers raise exactly two error kinds, both synchronously on an
//! invocation (never at construction): [`LullError::InvalidArgument`] when
//! the wrapped action is not callable or the wait interval is not a valid
//! duration, and [`LullError::InvalidConfiguration`] when a throttle is
//! built with both edges disabled. Neither is retried by the controller;
//! errors raised by the wrapped action itself are never caught or wrapped.
//!
//! # Examples
//!
//! ```
//! use lull_core::{LullError, Result};
//!
//! fn reject() -> Result<()> {
//!     Err(LullError::invalid_configuration(
//!         "throttle with leading and trailing both disabled can never fire",
//!     ))
//! }
//! ```

/// Root error type for controller invocations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LullError {
    /// An argument given to the controller cannot be used.
    ///
    /// Raised when the wrapped action is not callable (the slot is empty
    /// because a fire is in flight or a previous fire panicked) or when the
    /// wait interval does not describe a valid duration.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Description of the offending argument.
        context: String,
    },

    /// The controller was configured in a way that can never fire.
    ///
    /// Currently only raised for a throttle with `leading` and `trailing`
    /// both disabled.
    #[error("Invalid configuration: {context}")]
    InvalidConfiguration {
        /// Description of the rejected configuration.
        context: String,
    },
}

impl LullError {
    /// Create an `InvalidArgument` error with the given context.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create an `InvalidConfiguration` error with the given context.
    pub fn invalid_configuration(context: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            context: context.into(),
        }
    }

    /// Check whether this error concerns the controller configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Check whether this error concerns a controller argument.
    #[must_use]
    pub const fn is_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for controller operations.
pub type Result<T> = std::result::Result<T, LullError>;
