// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull::{LullError, ManualTimer, Throttle, ThrottleOptions};
use lull_test_utils::Recorder;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

#[test]
fn test_both_edges_disabled_rejected_on_invocation() {
    let timer = ManualTimer::new();
    let recorder: Recorder<(), u32> = Recorder::new();
    let options = ThrottleOptions {
        leading: false,
        trailing: false,
    };
    // Construction accepts the configuration; the first call rejects it.
    let throttled = Throttle::new(recorder.action(), 100u64, options, timer);

    let err = throttled.call((), 1).unwrap_err();
    assert!(err.is_configuration());
    assert!(recorder.is_empty());
}

#[test]
fn test_invalid_configuration_is_not_recoverable() {
    let timer = ManualTimer::new();
    let recorder: Recorder<(), u32> = Recorder::new();
    let options = ThrottleOptions {
        leading: false,
        trailing: false,
    };
    let throttled = Throttle::new(recorder.action(), 100u64, options, timer);

    assert!(throttled.call((), 1).is_err());
    assert!(throttled.call((), 2).is_err());
    assert!(recorder.is_empty());
}

#[test]
fn test_negative_wait_rejected_on_invocation() {
    let timer = ManualTimer::new();
    let recorder: Recorder<(), u32> = Recorder::new();
    let throttled = Throttle::new(
        recorder.action(),
        -1.0,
        ThrottleOptions::default(),
        timer,
    );

    assert!(matches!(
        throttled.call((), 1),
        Err(LullError::InvalidArgument { .. })
    ));
}

#[test]
fn test_panicking_trailing_fire_leaves_state_consistent() {
    let timer = ManualTimer::new();
    let throttled = Throttle::new(
        |_: (), _: u32| -> u32 { panic!("action failed") },
        100u64,
        ThrottleOptions::trailing_only(),
        timer.clone(),
    );

    throttled.call((), 1).unwrap();
    assert!(throttled.is_pending());
    let panicked = catch_unwind(AssertUnwindSafe(|| {
        timer.advance(Duration::from_millis(100));
    }));
    assert!(panicked.is_err());

    // Timer handle, window timestamp and saved arguments were cleared
    // before the action ran, exactly as a successful fire would.
    assert!(!throttled.is_pending());
    assert_eq!(timer.scheduled(), 0);

    // The action was lost in the unwind; further calls report it.
    let err = throttled.call((), 2).unwrap_err();
    assert!(err.is_argument());
}

#[test]
fn test_options_validate_directly() {
    assert!(ThrottleOptions::default().validate().is_ok());
    assert!(ThrottleOptions::leading_only().validate().is_ok());
    assert!(ThrottleOptions::trailing_only().validate().is_ok());
    assert!(ThrottleOptions {
        leading: false,
        trailing: false
    }
    .validate()
    .is_err());
}
