//! Inheritance merge semantics across base records.

use prefab::{BuildError, Param, ParamKind, Signature, Target, Value, builds};

/// `def star_args(*x)`
fn star_args() -> Target {
    Target::function(
        "demo.star_args",
        Signature::new(vec![Param::required("x", ParamKind::VarPositional)]),
    )
}

/// `def collect(**kwargs)`
fn collect() -> Target {
    Target::function(
        "demo.collect",
        Signature::new(vec![Param::required("kwargs", ParamKind::VarKeyword)]),
    )
}

#[test]
fn later_bases_and_the_request_override_keywords() {
    let target = collect();
    let first = builds(&target).keyword("lr", 1).keyword("momentum", 9).build().unwrap();
    let second = builds(&target).keyword("lr", 2).build().unwrap();

    let derived = builds(&target)
        .keyword("momentum", 3)
        .base(&first)
        .base(&second)
        .build()
        .unwrap();
    assert_eq!(derived.keyword()["lr"], Value::Int(2));
    assert_eq!(derived.keyword()["momentum"], Value::Int(3));
    assert_eq!(derived.keyword().len(), 2);
}

#[test]
fn positionals_concatenate_base_by_base_then_request() {
    let target = star_args();
    let first = builds(&target).positional(1).positional(2).build().unwrap();
    let second = builds(&target).positional(3).build().unwrap();

    let derived = builds(&target)
        .positional(4)
        .base(&first)
        .base(&second)
        .build()
        .unwrap();
    assert_eq!(
        derived.positional(),
        &[Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
    );
}

#[test]
fn building_a_derived_record_leaves_bases_untouched() {
    let target = collect();
    let base = builds(&target).keyword("x", 1).build().unwrap();
    let before = base.clone();

    builds(&target).keyword("x", 2).keyword("y", 3).base(&base).build().unwrap();
    assert_eq!(base, before);
}

#[test]
fn inherited_positionals_are_revalidated_against_the_derived_target() {
    // The base's target captured any number of positionals; the derived
    // target accepts one. Inherited positionals are re-validated, not
    // clipped, against the derived signature.
    let base = builds(&star_args())
        .positional(1)
        .positional(2)
        .positional(3)
        .build()
        .unwrap();

    let narrow = Target::function(
        "demo.one_param",
        Signature::new(vec![Param::required("y", ParamKind::PositionalOrKeyword)]),
    );
    let err = builds(&narrow).base(&base).build().unwrap_err();
    assert_eq!(
        err,
        BuildError::TooManyPositionalArguments {
            target: "one_param".into(),
            supplied: 3,
            max_accepted: 1,
        }
    );
}

#[test]
fn derived_flags_come_from_the_request_not_the_bases() {
    let target = collect();
    let base = builds(&target).keyword("x", 1).partial(true).build().unwrap();

    let derived = builds(&target)
        .partial(true)
        .convert(prefab::Convert::All)
        .base(&base)
        .build()
        .unwrap();
    assert!(derived.is_partial());
    assert_eq!(derived.convert(), prefab::Convert::All);
    // The base keeps its own flags.
    assert_eq!(base.convert(), prefab::Convert::None);
}
