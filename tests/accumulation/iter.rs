use or_rail::accumulation::{combined, validated_by, when};
use or_rail::{Check, Every, One, Or};

fn parse(s: &str) -> Or<i32, One<String>> {
    match s.parse() {
        Ok(n) => Or::good(n),
        Err(_) => Or::bad(One::of(format!("'{}' is not a number", s))),
    }
}

#[test]
fn combined_collects_all_goods() {
    assert_eq!(combined(["1", "2", "3"].map(parse)), Or::Good(vec![1, 2, 3]));
}

#[test]
fn combined_of_nothing_is_good_and_empty() {
    let empty: Vec<Or<i32, One<String>>> = Vec::new();
    assert_eq!(combined(empty), Or::Good(Vec::new()));
}

#[test]
fn combined_keeps_every_failure_in_order() {
    assert_eq!(
        combined(["x", "2", "y"].map(parse)),
        Or::Bad(Every::of_many(
            "'x' is not a number".to_string(),
            ["'y' is not a number".to_string()],
        ))
    );
}

#[test]
fn validated_by_applies_the_function_to_each_input() {
    assert_eq!(validated_by(vec!["4", "5"], parse), Or::Good(vec![4, 5]));
    assert_eq!(validated_by(vec!["4", "z"], parse).get_bad().len(), 1);
}

#[test]
fn collecting_into_other_containers() {
    use std::collections::BTreeSet;

    let set: Or<BTreeSet<i32>, Every<String>> = ["3", "1", "3"].into_iter().map(parse).collect();
    assert_eq!(set, Or::Good(BTreeSet::from([1, 3])));
}

fn is_round(n: &i32) -> Check<String> {
    Check::from_bool(n % 10 == 0, || format!("{} was not a round number", n))
}

fn is_small(n: &i32) -> Check<String> {
    Check::from_bool(*n < 100, || format!("{} was not less than 100", n))
}

fn is_even(n: &i32) -> Check<String> {
    Check::from_bool(n % 2 == 0, || format!("{} was not even", n))
}

#[test]
fn when_accumulates_all_failing_checks() {
    let checks: [fn(&i32) -> Check<String>; 3] = [is_round, is_small, is_even];

    assert_eq!(when(parse("50"), checks), Or::Good(50));
    assert_eq!(
        when(parse("101"), checks),
        Or::Bad(Every::of_many(
            "101 was not a round number".to_string(),
            ["101 was not less than 100".to_string(), "101 was not even".to_string()],
        ))
    );
}

#[test]
fn when_runs_checks_in_order() {
    let checks: [fn(&i32) -> Check<String>; 2] = [is_even, is_round];
    assert_eq!(
        when(parse("7"), checks).get_bad().into_vec(),
        vec!["7 was not even".to_string(), "7 was not a round number".to_string()]
    );
}

#[test]
fn when_passes_bad_input_through() {
    let checks: [fn(&i32) -> Check<String>; 1] = [|_| Check::Fail("never".to_string())];
    assert_eq!(
        when(parse("q"), checks),
        Or::Bad(Every::of("'q' is not a number".to_string()))
    );
}
