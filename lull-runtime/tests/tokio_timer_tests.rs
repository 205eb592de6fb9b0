// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use lull_runtime::impls::tokio::TokioTimer;
use lull_runtime::timer::{TimeInstant, TimerService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test(start_paused = true)]
async fn test_callback_fires_after_delay() {
    let timer = TokioTimer;
    let fired = Arc::new(AtomicBool::new(false));

    let flag = fired.clone();
    timer.schedule_after(
        Duration::from_millis(100),
        Box::new(move || flag.store(true, Ordering::SeqCst)),
    );
    tokio::task::yield_now().await;

    advance(Duration::from_millis(99)).await;
    tokio::task::yield_now().await;
    assert!(!fired.load(Ordering::SeqCst));

    advance(Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    assert!(fired.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_fire() {
    let timer = TokioTimer;
    let fired = Arc::new(AtomicBool::new(false));

    let flag = fired.clone();
    let handle = timer.schedule_after(
        Duration::from_millis(50),
        Box::new(move || flag.store(true, Ordering::SeqCst)),
    );
    timer.cancel(&handle);

    advance(Duration::from_millis(100)).await;
    tokio::task::yield_now().await;
    assert!(!fired.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_fire_is_noop() {
    let timer = TokioTimer;
    let fired = Arc::new(AtomicBool::new(false));

    let flag = fired.clone();
    let handle = timer.schedule_after(
        Duration::from_millis(10),
        Box::new(move || flag.store(true, Ordering::SeqCst)),
    );
    tokio::task::yield_now().await;

    advance(Duration::from_millis(10)).await;
    tokio::task::yield_now().await;
    assert!(fired.load(Ordering::SeqCst));

    timer.cancel(&handle);
    timer.cancel(&handle);
}

#[tokio::test]
async fn test_clock_tracks_paused_time() {
    pause();
    let timer = TokioTimer;

    let before = timer.now();
    advance(Duration::from_millis(250)).await;
    let after = timer.now();

    assert_eq!(
        after.checked_duration_since(before),
        Some(Duration::from_millis(250))
    );
}
