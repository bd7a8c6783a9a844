use primer::square::{square_delayed, DelayedSquarer, SquareService, TaskState, SQUARE_DELAY};
use primer::SquareError;
use std::time::Duration;
use tokio::time::Instant;
use tower::ServiceExt;

#[tokio::test(start_paused = true)]
async fn concurrent_squares_are_independent() {
    let start = Instant::now();
    let (a, b, c) = tokio::join!(square_delayed(5.0), square_delayed(-3.0), square_delayed(0.0));

    assert_eq!(a, Ok(25.0));
    assert_eq!(b, Err(SquareError::NegativeInput));
    assert_eq!(c, Ok(0.0));
    // All three wait the same fixed delay side by side, not one after another.
    let elapsed = start.elapsed();
    assert!(elapsed >= SQUARE_DELAY);
    assert!(elapsed < SQUARE_DELAY * 2, "waited {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn every_clone_sees_the_same_resolution() {
    let squarer = DelayedSquarer::new();
    let task = squarer.spawn(-3.0);
    let observers: Vec<_> = (0..4).map(|_| tokio::spawn(task.clone())).collect();

    for observer in observers {
        let result = observer.await.expect("observer task panicked");
        assert_eq!(result, Err(SquareError::NegativeInput));
        assert_eq!(result.unwrap_err().to_string(), "Negative number not allowed");
    }
    assert_eq!(task.state(), TaskState::Resolved(Err(SquareError::NegativeInput)));
}

#[tokio::test(start_paused = true)]
async fn late_observer_gets_replayed_result() {
    let task = DelayedSquarer::new().spawn(1.5);
    tokio::time::sleep(SQUARE_DELAY + Duration::from_millis(500)).await;

    let start = Instant::now();
    assert_eq!(task.await, Ok(2.25));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn square_service_resolves_through_tower() {
    let svc = SquareService::default();

    let start = Instant::now();
    let ok = svc.clone().oneshot(12.0).await;
    assert_eq!(ok, Ok(144.0));
    assert!(start.elapsed() >= SQUARE_DELAY);

    let err = svc.oneshot(-0.1).await;
    assert_eq!(err, Err(SquareError::NegativeInput));
}
