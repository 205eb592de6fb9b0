// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use std::time::Duration;

/// Receive from `rx`, giving up after `timeout_ms` milliseconds.
///
/// Under `tokio::time::pause` the timeout runs on virtual time, so tests
/// never actually block for the timeout.
pub async fn recv_timeout<T>(rx: &async_channel::Receiver<T>, timeout_ms: u64) -> Option<T> {
    tokio::time::timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .and_then(|received| received.ok())
}

/// Assert nothing arrives on `rx` within `timeout_ms` milliseconds.
///
/// # Panics
///
/// Panics when an item is received.
pub async fn assert_no_recv<T: Debug>(rx: &async_channel::Receiver<T>, timeout_ms: u64) {
    if let Ok(Ok(item)) =
        tokio::time::timeout(Duration::from_millis(timeout_ms), rx.recv()).await
    {
        panic!("unexpected item received, expected none: {item:?}");
    }
}
