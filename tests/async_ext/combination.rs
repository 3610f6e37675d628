//! Tests for waiting on every input and ordering results by argument position.

use std::time::Duration;

use or_rail::async_ext::zip;
use or_rail::prelude_async::*;
use tokio::sync::oneshot;
use tokio::time::{sleep, timeout};

fn messages() -> FutureFactory<String> {
    FutureFactory::of_fault_message()
}

fn delayed<G>(
    factory: &FutureFactory<String>,
    millis: u64,
    or: Or<G, String>,
) -> OrFuture<G, String>
where
    G: Send + 'static,
{
    factory.future(move || async move {
        sleep(Duration::from_millis(millis)).await;
        or
    })
}

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn parse_name(input: &'static str) -> Or<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Or::bad(format!("'{}' is not a valid name", input))
    } else {
        Or::good(trimmed.to_string())
    }
}

fn parse_age(input: &'static str) -> Or<u32, String> {
    match input.trim().parse::<i64>() {
        Ok(age) if age >= 0 => Or::good(age as u32),
        Ok(age) => Or::bad(format!("'{}' is not a valid age", age)),
        Err(_) => Or::bad(format!("'{}' is not a valid integer", input)),
    }
}

async fn parse_person(name: &'static str, age: &'static str) -> Or<Person, Every<String>> {
    let factory = messages();
    let name = factory.future(move || async move { parse_name(name) });
    let age = factory.future(move || async move { parse_age(age) });

    (name, age).with_good(|(name, age)| Person { name, age }).await.unwrap()
}

#[tokio::test]
async fn all_good_inputs_build_the_value() {
    assert_eq!(
        parse_person("Bridget Jones", "29").await,
        Or::Good(Person { name: "Bridget Jones".to_string(), age: 29 })
    );
}

#[tokio::test]
async fn one_bad_input_is_reported_alone() {
    assert_eq!(
        parse_person("Bridget Jones", "-29").await,
        Or::Bad(Every::of("'-29' is not a valid age".to_string()))
    );
}

#[tokio::test]
async fn every_bad_input_is_reported_in_argument_order() {
    assert_eq!(
        parse_person("", "").await,
        Or::Bad(Every::of_many(
            "'' is not a valid name".to_string(),
            ["'' is not a valid integer".to_string()],
        ))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failures_follow_argument_order_not_completion_order() {
    let factory = messages();
    let slow = delayed(&factory, 50, Or::<i32, _>::bad("E1".to_string()));
    let fast = delayed(&factory, 0, Or::<i32, _>::bad("E2".to_string()));

    let outcome = (slow, fast).accumulate().await.unwrap();
    assert_eq!(outcome, Or::Bad(Every::of_many("E1".to_string(), ["E2".to_string()])));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn goods_follow_argument_order_not_completion_order() {
    let factory = messages();
    let inputs = [40, 0, 20].map(|millis| delayed(&factory, millis, Or::good(millis)));

    assert_eq!(combined(inputs).await.unwrap(), Or::Good(vec![40, 0, 20]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn three_inputs_sum_when_all_are_good() {
    let factory = messages();
    let a = delayed(&factory, 30, Or::good(1));
    let b = delayed(&factory, 10, Or::good(2));
    let c = delayed(&factory, 20, Or::good(3));

    let sum = (a, b, c).with_good(|(a, b, c)| a + b + c).await.unwrap();
    assert_eq!(sum, Or::Good(6));
}

#[tokio::test]
async fn three_inputs_keep_only_the_bad_failures() {
    let factory = messages();
    let a = delayed(&factory, 10, Or::<i32, _>::bad("E1".to_string()));
    let b = delayed(&factory, 0, Or::good(2));
    let c = delayed(&factory, 5, Or::<i32, _>::bad("E3".to_string()));

    let sum = (a, b, c).with_good(|(a, b, c)| a + b + c).await.unwrap();
    assert_eq!(sum, Or::Bad(Every::of_many("E1".to_string(), ["E3".to_string()])));
}

#[tokio::test]
async fn a_fast_failure_waits_for_the_slow_inputs() {
    let factory = messages();
    let (release, gate) = oneshot::channel::<()>();

    let fast = factory.future(|| async { Or::<i32, _>::bad("fast".to_string()) });
    let slow = factory.future(move || async move {
        let _ = gate.await;
        Or::<i32, _>::bad("slow".to_string())
    });

    let mut both = (fast, slow).accumulate();
    assert!(timeout(Duration::from_millis(50), &mut both).await.is_err());
    assert_eq!(both.state(), CombineState::Pending);

    release.send(()).unwrap();
    let outcome = both.await.unwrap();
    assert_eq!(outcome.get_bad().into_vec(), vec!["fast".to_string(), "slow".to_string()]);
}

#[tokio::test]
async fn a_slow_middle_failure_is_not_skipped() {
    let factory = messages();
    let (release, gate) = oneshot::channel::<()>();

    let first = factory.future(|| async { Or::<i32, String>::good(1) });
    let second = factory.future(move || async move {
        let _ = gate.await;
        Or::<i32, _>::bad("slow-error".to_string())
    });
    let third = factory.future(|| async { Or::<i32, String>::good(3) });

    let mut sum = (first, second, third).with_good(|(a, b, c)| a + b + c);
    assert!(timeout(Duration::from_millis(30), &mut sum).await.is_err());
    assert_eq!(sum.state(), CombineState::Pending);

    release.send(()).unwrap();
    assert_eq!(sum.await.unwrap(), Or::Bad(Every::of("slow-error".to_string())));
}

#[tokio::test]
async fn state_is_resolved_after_completion() {
    let factory = messages();
    let mut pair = zip(
        factory.future(|| async { Or::good(1) }),
        factory.future(|| async { Or::good("one") }),
    );
    let canceller = pair.canceller();

    assert_eq!((&mut pair).await.unwrap(), Or::Good((1, "one")));
    assert_eq!(canceller.state(), CombineState::Resolved);
    assert!(!canceller.cancel());
    assert_eq!(pair.state(), CombineState::Resolved);
}

#[tokio::test]
async fn empty_combination_is_good_and_empty() {
    let none: Vec<OrFuture<i32, String>> = Vec::new();
    assert_eq!(combined(none).await.unwrap(), Or::Good(Vec::new()));
}

#[tokio::test]
async fn many_inputs_settle_in_order() {
    let factory = messages();
    let inputs: Vec<_> = (0..32_u64)
        .map(|i| {
            let or = if i % 8 == 0 { Or::bad(format!("E{}", i)) } else { Or::good(i) };
            delayed(&factory, 32 - i, or)
        })
        .collect();

    let outcome = combined(inputs).await.unwrap();
    assert_eq!(
        outcome.get_bad().into_vec(),
        vec!["E0".to_string(), "E8".to_string(), "E16".to_string(), "E24".to_string()]
    );
}
