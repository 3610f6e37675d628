use or_rail::Check;

#[test]
fn from_bool_builds_reason_lazily() {
    let mut built = false;
    let pass = Check::from_bool(true, || {
        built = true;
        "never"
    });

    assert!(pass.is_pass());
    assert!(!built);
    assert_eq!(Check::from_bool(false, || "reason"), Check::Fail("reason"));
}

#[test]
fn and_keeps_the_first_failure() {
    let pass = Check::<&str>::Pass;

    assert_eq!(pass.and(Check::Pass), Check::Pass);
    assert_eq!(pass.and(Check::Fail("second")), Check::Fail("second"));
    assert_eq!(Check::Fail("first").and(Check::Fail("second")), Check::Fail("first"));
}

#[test]
fn into_fail_exposes_the_reason() {
    assert_eq!(Check::Fail("why").into_fail(), Some("why"));
    assert_eq!(Check::<&str>::Pass.into_fail(), None);
    assert!(Check::Fail(1).is_fail());
}
