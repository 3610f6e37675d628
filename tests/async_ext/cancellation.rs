//! Tests for cancelling a combination and its inputs.

use std::time::Duration;

use or_rail::prelude_async::*;
use tokio::sync::oneshot;
use tokio::time::{sleep, timeout};

/// An input that never finishes on its own; `alive` closes when its task is dropped.
fn hanging(factory: &FutureFactory<String>) -> (OrFuture<i32, String>, oneshot::Receiver<()>) {
    let (guard, alive) = oneshot::channel::<()>();
    let input = factory.future(move || async move {
        let _guard = guard;
        sleep(Duration::from_secs(3600)).await;
        Or::good(1)
    });
    (input, alive)
}

#[tokio::test]
async fn cancel_before_completion_aborts_inputs() {
    let factory = FutureFactory::of_fault_message();
    let (first, first_alive) = hanging(&factory);
    let (second, second_alive) = hanging(&factory);

    let both = (first, second).accumulate();
    assert!(both.cancel());
    assert_eq!(both.state(), CombineState::Cancelled);

    assert!(first_alive.await.is_err());
    assert!(second_alive.await.is_err());
    assert_eq!(both.await, Err(Cancelled));
}

#[tokio::test]
async fn second_cancel_changes_nothing() {
    let factory = FutureFactory::of_fault_message();
    let (input, _alive) = hanging(&factory);

    let all = combined([input]);
    let canceller = all.canceller();

    assert!(canceller.cancel());
    assert!(!canceller.cancel());
    assert_eq!(canceller.state(), CombineState::Cancelled);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_reaches_a_combination_awaited_elsewhere() {
    let factory = FutureFactory::of_fault_message();
    let (first, _first_alive) = hanging(&factory);
    let (second, _second_alive) = hanging(&factory);

    let both = (first, second).with_good(|(a, b)| a + b);
    let canceller = both.canceller();
    let waiter = tokio::spawn(both);

    sleep(Duration::from_millis(10)).await;
    assert!(canceller.cancel());

    let outcome = timeout(Duration::from_secs(5), waiter).await.unwrap().unwrap();
    assert_eq!(outcome, Err(Cancelled));
}

#[tokio::test]
async fn completed_inputs_are_unaffected_by_cancellation() {
    let factory = FutureFactory::of_fault_message();
    let (done_tx, done_rx) = oneshot::channel();
    let done = factory.future(move || async move {
        let _ = done_tx.send(5);
        Or::<i32, String>::good(5)
    });
    let (pending, _alive) = hanging(&factory);

    assert_eq!(done_rx.await, Ok(5));
    let both = (done, pending).accumulate();
    assert!(both.cancel());
    assert_eq!(both.await, Err(Cancelled));
}

#[tokio::test]
async fn an_externally_cancelled_input_cancels_the_combination() {
    let factory = FutureFactory::of_fault_message();
    let (input, _alive) = hanging(&factory);
    let fast = factory.future(|| async { Or::<i32, String>::good(2) });

    input.cancel();
    let both = (input, fast).accumulate();
    let canceller = both.canceller();

    assert_eq!(both.await, Err(Cancelled));
    assert_eq!(canceller.state(), CombineState::Cancelled);
}

#[tokio::test]
async fn dropping_an_unresolved_combination_aborts_inputs() {
    let factory = FutureFactory::of_fault_message();
    let (input, alive) = hanging(&factory);

    let all = combined([input]);
    let canceller = all.canceller();

    drop(all);
    assert_eq!(canceller.state(), CombineState::Cancelled);
    assert!(!canceller.cancel());
    assert!(alive.await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_wakes_a_combination_waiting_on_blocking_inputs() {
    let factory = FutureFactory::of_fault_message();
    let (release, gate) = std::sync::mpsc::channel::<()>();
    let blocked = factory.blocking(move || {
        let _ = gate.recv_timeout(Duration::from_secs(10));
        Or::<i32, String>::good(1)
    });
    let fast = factory.future(|| async { Or::<i32, String>::good(2) });

    let both = (blocked, fast).accumulate();
    let canceller = both.canceller();
    let waiter = tokio::spawn(both);

    sleep(Duration::from_millis(50)).await;
    assert!(canceller.cancel());

    let outcome = timeout(Duration::from_millis(500), waiter).await;
    let _ = release.send(());
    assert_eq!(outcome.unwrap().unwrap(), Err(Cancelled));
}

#[tokio::test]
async fn dropping_an_input_aborts_its_task() {
    let factory = FutureFactory::of_fault_message();
    let (input, alive) = hanging(&factory);

    assert!(!input.is_finished());
    drop(input);
    assert!(alive.await.is_err());
}
