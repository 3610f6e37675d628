use or_rail::accumulation::{with_good, zip, Accumulate};
use or_rail::{Every, One, Or};

fn parse_name(input: &str) -> Or<String, One<String>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Or::bad(One::of(format!("'{}' is not a valid name", input)))
    } else {
        Or::good(trimmed.to_string())
    }
}

fn parse_age(input: &str) -> Or<u32, One<String>> {
    match input.trim().parse::<i64>() {
        Ok(age) if age >= 0 => Or::good(age as u32),
        Ok(age) => Or::bad(One::of(format!("'{}' is not a valid age", age))),
        Err(_) => Or::bad(One::of(format!("'{}' is not a valid integer", input))),
    }
}

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn parse_person(name: &str, age: &str) -> Or<Person, Every<String>> {
    (parse_name(name), parse_age(age)).with_good(|(name, age)| Person { name, age })
}

#[test]
fn all_good_inputs_build_the_value() {
    assert_eq!(
        parse_person("Bridget Jones", "29"),
        Or::Good(Person { name: "Bridget Jones".to_string(), age: 29 })
    );
}

#[test]
fn single_failure_is_reported_alone() {
    assert_eq!(
        parse_person("Bridget Jones", "-29"),
        Or::Bad(Every::of("'-29' is not a valid age".to_string()))
    );
}

#[test]
fn every_failure_is_reported_in_argument_order() {
    assert_eq!(
        parse_person("", ""),
        Or::Bad(Every::of_many(
            "'' is not a valid name".to_string(),
            ["'' is not a valid integer".to_string()],
        ))
    );
}

#[test]
fn combiner_runs_only_when_all_inputs_are_good() {
    let mut calls = 0;
    let _ = (parse_name(""), parse_age("1")).with_good(|_| calls += 1);
    assert_eq!(calls, 0);

    let _ = (parse_name("a"), parse_age("1")).with_good(|_| calls += 1);
    assert_eq!(calls, 1);
}

#[test]
fn three_inputs_keep_the_failures_of_the_bad_ones() {
    let sum = (
        Or::<i32, One<&str>>::bad(One::of("E1")),
        Or::<i32, One<&str>>::good(2),
        Or::<i32, One<&str>>::bad(One::of("E3")),
    )
        .with_good(|(a, b, c)| a + b + c);

    assert_eq!(sum, Or::Bad(Every::of_many("E1", ["E3"])));
}

#[test]
fn three_good_inputs_are_summed() {
    let good = Or::<i32, One<&str>>::good;
    let sum = with_good((good(1), good(2), good(3)), |(a, b, c)| a + b + c);

    assert_eq!(sum, Or::Good(6));
}

#[test]
fn earlier_combinations_are_flattened() {
    let first = Or::<i32, Every<&str>>::bad(Every::of_many("a", ["b"]));
    let second = Or::<i32, One<&str>>::bad(One::of("c"));

    assert_eq!(zip(first, second), Or::Bad(Every::of_many("a", ["b", "c"])));
}

#[test]
fn zip_pairs_good_values() {
    let pair = parse_name("Ann").zip(parse_age("40"));
    assert_eq!(pair, Or::Good(("Ann".to_string(), 40)));
}

#[test]
fn accumulate_returns_the_goods_tuple() {
    let flag = Or::<bool, One<String>>::good(true);
    let goods = (parse_name("Ann"), parse_age("40"), flag).accumulate();
    assert_eq!(goods, Or::Good(("Ann".to_string(), 40, true)));
}

#[test]
fn largest_arity_is_supported() {
    let g = || Or::<u8, One<u8>>::good(1);
    let b = |n: u8| Or::<u8, One<u8>>::bad(One::of(n));

    let total = (
        g(), g(), g(), g(), g(), g(), g(), g(), g(), g(), g(),
        g(), g(), g(), g(), g(), g(), g(), g(), g(), g(), g(),
    )
        .with_good(|t| {
            let (a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p, q, r, s, t_, u, v) = t;
            [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p, q, r, s, t_, u, v]
                .iter()
                .map(|&x| u32::from(x))
                .sum::<u32>()
        });
    assert_eq!(total, Or::Good(22));

    let failures = (
        b(1), g(), g(), g(), g(), g(), g(), g(), g(), g(), g(),
        g(), g(), g(), g(), g(), g(), g(), g(), g(), g(), b(22),
    )
        .accumulate();
    assert_eq!(failures.into_bad().map(Every::into_vec), Some(vec![1, 22]));
}
