// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use lull::{throttle, ThrottleOptions};
use lull_test_utils::{assert_no_recv, recv_timeout};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_throttle_leading_and_trailing() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = async_channel::unbounded();
    let throttled = throttle(
        move |_: (), n: u32| {
            tx.try_send(n).unwrap();
        },
        100u64,
        ThrottleOptions::default(),
    );

    // Act & Assert: leading fire is synchronous.
    throttled.call((), 1)?;
    assert_eq!(rx.try_recv().ok(), Some(1));

    // Within the window: suppressed, trailing fire scheduled.
    advance(Duration::from_millis(50)).await;
    throttled.call((), 2)?;
    assert!(rx.try_recv().is_err());

    advance(Duration::from_millis(50)).await;
    assert_eq!(recv_timeout(&rx, 1000).await, Some(2));
    assert_no_recv(&rx, 200).await;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_trailing_only() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = async_channel::unbounded();
    let throttled = throttle(
        move |_: (), n: u32| {
            tx.try_send(n).unwrap();
        },
        100u64,
        ThrottleOptions::trailing_only(),
    );

    // Act & Assert: the triggering call never fires itself.
    throttled.call((), 1)?;
    assert!(rx.try_recv().is_err());

    advance(Duration::from_millis(100)).await;
    assert_eq!(recv_timeout(&rx, 1000).await, Some(1));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_cancel_drops_trailing_fire() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = async_channel::unbounded();
    let throttled = throttle(
        move |_: (), n: u32| {
            tx.try_send(n).unwrap();
        },
        100u64,
        ThrottleOptions::default(),
    );

    // Act & Assert
    throttled.call((), 1)?;
    assert_eq!(rx.try_recv().ok(), Some(1));

    throttled.call((), 2)?;
    throttled.cancel();

    advance(Duration::from_millis(500)).await;
    assert_no_recv(&rx, 200).await;
    Ok(())
}
