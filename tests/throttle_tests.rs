#![cfg(feature = "timer")]
//! Unit tests for the `Throttle` decorator.
//!
//! All tests run on a paused tokio clock and move time with
//! `tokio::time::advance`.

use std::cell::Cell;
use std::time::Duration;
use underbar::decorator::throttle;

const WINDOW: Duration = Duration::from_millis(100);

// =============================================================================
// Leading Edge
// =============================================================================

#[tokio::test(start_paused = true)]
async fn throttle_runs_first_call_immediately() {
    let runs = Cell::new(0);
    let throttled = throttle(
        |value: u32| {
            runs.set(runs.get() + 1);
            value
        },
        WINDOW,
    );

    assert_eq!(throttled.call(1), 1);
    assert_eq!(runs.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn throttle_suppresses_calls_within_window() {
    let runs = Cell::new(0);
    let throttled = throttle(
        |value: u32| {
            runs.set(runs.get() + 1);
            value
        },
        WINDOW,
    );

    throttled.call(1);
    tokio::time::advance(Duration::from_millis(50)).await;
    assert_eq!(throttled.call(2), 1);
    tokio::time::advance(Duration::from_millis(49)).await;
    assert_eq!(throttled.call(3), 1);

    assert_eq!(runs.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn throttle_runs_again_after_window() {
    let runs = Cell::new(0);
    let throttled = throttle(
        |value: u32| {
            runs.set(runs.get() + 1);
            value
        },
        WINDOW,
    );

    throttled.call(1);
    tokio::time::advance(WINDOW).await;
    assert_eq!(throttled.call(2), 2);
    assert_eq!(runs.get(), 2);
}

#[tokio::test(start_paused = true)]
async fn throttle_invokes_at_most_once_per_window() {
    let runs = Cell::new(0);
    let throttled = throttle(|()| runs.set(runs.get() + 1), WINDOW);

    // 10ms steps over one second: one run per 100ms window.
    for _ in 0..100 {
        throttled.call(());
        tokio::time::advance(Duration::from_millis(10)).await;
    }

    assert_eq!(runs.get(), 10);
}

#[tokio::test(start_paused = true)]
async fn throttle_remaining_counts_down() {
    let throttled = throttle(|value: u8| value, WINDOW);
    throttled.call(0);

    tokio::time::advance(Duration::from_millis(30)).await;
    assert_eq!(throttled.remaining(), Duration::from_millis(70));

    tokio::time::advance(Duration::from_millis(100)).await;
    assert_eq!(throttled.remaining(), Duration::ZERO);
    assert_eq!(throttled.wait(), WINDOW);
}
