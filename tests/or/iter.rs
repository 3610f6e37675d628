use or_rail::Or;

#[test]
fn iter_yields_the_good_value_once() {
    let good = Or::<i32, &str>::good(3);
    assert_eq!(good.iter().collect::<Vec<_>>(), vec![&3]);

    let bad = Or::<i32, &str>::bad("e");
    assert_eq!(bad.iter().count(), 0);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut good = Or::<i32, &str>::good(3);
    for value in good.iter_mut() {
        *value += 1;
    }
    assert_eq!(good, Or::Good(4));
}

#[test]
fn or_values_flatten_into_their_goods() {
    let inputs = vec![Or::<i32, &str>::good(1), Or::bad("e"), Or::good(3)];
    let goods: Vec<i32> = inputs.into_iter().flatten().collect();
    assert_eq!(goods, vec![1, 3]);
}

#[test]
fn borrowed_or_iterates_in_for_loops() {
    let good = Or::<String, &str>::good("x".to_string());
    let mut seen = Vec::new();
    for value in &good {
        seen.push(value.clone());
    }
    assert_eq!(seen, vec!["x".to_string()]);
}
