use or_rail::{Every, IntoEvery, One};

#[test]
fn one_holds_exactly_one_failure() {
    let one = One::of("only");

    assert_eq!(one.len(), 1);
    assert_eq!(one.get(), &"only");
    assert_eq!(one.as_slice(), &["only"]);
    assert_eq!(one.into_inner(), "only");
}

#[test]
fn map_transforms_the_failure() {
    assert_eq!(One::of(2).map(|n| n * 10), One::of(20));
}

#[test]
fn append_widens_to_every() {
    let merged = One::of("a").append(Every::of_many("b", ["c"]));
    assert_eq!(merged.into_vec(), vec!["a", "b", "c"]);
}

#[test]
fn into_every_and_from_agree() {
    assert_eq!(One::of(1).into_every(), Every::from(One::of(1)));
}

#[test]
fn display_wraps_the_value() {
    assert_eq!(One::of("e").to_string(), "One(e)");
}

#[cfg(feature = "serde")]
#[test]
fn one_serializes_as_its_value() {
    let json = serde_json::to_string(&One::of("e")).unwrap();
    assert_eq!(json, r#""e""#);
}
