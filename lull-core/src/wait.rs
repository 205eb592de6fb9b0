// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The controllers' wait interval.
//!
//! [`Wait`] keeps the interval as fractional milliseconds rather than a
//! [`Duration`] so that hosts feeding controllers from loosely-typed
//! configuration can hand over any number they received. Validation is
//! deferred to [`Wait::to_duration`], which the controllers run on
//! invocation: a NaN, negative or non-finite value is rejected there with
//! [`LullError::InvalidArgument`], never at construction.

use core::time::Duration;

use crate::error::{LullError, Result};

/// A wait interval in fractional milliseconds, validated lazily.
///
/// The default is zero milliseconds, matching an omitted wait.
///
/// # Examples
///
/// ```
/// use lull_core::Wait;
/// use std::time::Duration;
///
/// assert_eq!(Wait::default().to_duration().unwrap(), Duration::ZERO);
/// assert_eq!(
///     Wait::from(250u64).to_duration().unwrap(),
///     Duration::from_millis(250)
/// );
/// assert!(Wait::from(-1.0).to_duration().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wait(f64);

impl Wait {
    /// A zero-length wait interval.
    pub const ZERO: Self = Self(0.0);

    /// Create a wait interval from fractional milliseconds, unvalidated.
    #[must_use]
    pub const fn from_millis_f64(millis: f64) -> Self {
        Self(millis)
    }

    /// The raw milliseconds value, which may not be a valid duration.
    #[must_use]
    pub const fn millis(&self) -> f64 {
        self.0
    }

    /// Convert to a [`Duration`], rejecting values that cannot describe one.
    ///
    /// # Errors
    ///
    /// Returns [`LullError::InvalidArgument`] for NaN, negative or
    /// non-finite milliseconds.
    pub fn to_duration(&self) -> Result<Duration> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(LullError::invalid_argument(format!(
                "wait must be a non-negative number of milliseconds, got {}",
                self.0
            )));
        }
        Ok(Duration::from_secs_f64(self.0 / 1000.0))
    }
}

impl Default for Wait {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Duration> for Wait {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f64() * 1000.0)
    }
}

impl From<u64> for Wait {
    fn from(millis: u64) -> Self {
        Self(millis as f64)
    }
}

impl From<f64> for Wait {
    fn from(millis: f64) -> Self {
        Self(millis)
    }
}
