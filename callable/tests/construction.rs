//! Argument forwarding from the entry point to constructors.

mod common;

use callable::{Args, CallableExt, NamedArgs};
use common::{
    Combo, KeywordOpt, KeywordReq, KeywordRest, KwPath, NoParams, PositionalOpt, PositionalReq,
    PrivateInit, RestCombo, RestPositional,
};
use serde_json::json;

fn named(pairs: serde_json::Value) -> NamedArgs {
    match pairs {
        serde_json::Value::Object(map) => map,
        _ => NamedArgs::new(),
    }
}

#[test]
fn test_no_params() {
    assert_eq!(NoParams::invoke(Args::new()).unwrap(), "ok");
}

#[test]
fn test_required_positional() {
    assert_eq!(PositionalReq::invoke(Args::new().arg(3)).unwrap(), 3);

    let err = PositionalReq::invoke(Args::new()).unwrap_err();
    assert!(err.is_construction());
}

#[test]
fn test_optional_positional() {
    assert_eq!(PositionalOpt::invoke(Args::new()).unwrap(), 5);
    assert_eq!(PositionalOpt::invoke(Args::new().arg(9)).unwrap(), 9);
}

#[test]
fn test_rest_positional() {
    assert_eq!(
        RestPositional::invoke(Args::positional_only([1, 2, 3])).unwrap(),
        6
    );
    assert_eq!(RestPositional::invoke(Args::new()).unwrap(), 0);
}

#[test]
fn test_required_keyword() {
    assert_eq!(KeywordReq::invoke(Args::new().named("x", 10)).unwrap(), 10);

    let err = KeywordReq::invoke(Args::new()).unwrap_err();
    assert!(err.is_construction());
    assert_eq!(
        err.to_string(),
        "Cannot instantiate KeywordReq: missing keyword: :x"
    );
}

#[test]
fn test_optional_keyword() {
    assert_eq!(KeywordOpt::invoke(Args::new()).unwrap(), 7);
    assert_eq!(KeywordOpt::invoke(Args::new().named("x", 3)).unwrap(), 3);
}

#[test]
fn test_keyword_rest() {
    let args = Args::new().named("foo", 1).named("bar", 2);
    let opts = KeywordRest::invoke(args).unwrap();
    assert_eq!(opts, named(json!({ "foo": 1, "bar": 2 })));

    assert!(KeywordRest::invoke(Args::new()).unwrap().is_empty());
}

#[test]
fn test_mixed_positional_and_keyword() {
    let args = Args::new().arg(1).named("c", 3).named("e", 5);
    let vals = Combo::invoke(args).unwrap();
    assert_eq!(vals, json!([1, 2, 3, 4, { "e": 5 }]));
}

#[test]
fn test_rest_positional_and_rest_keyword() {
    let args = Args::new().arg(1).arg(2).named("foo", "bar");
    let (nums, opts) = RestCombo::invoke(args).unwrap();
    assert_eq!(nums, vec![json!(1), json!(2)]);
    assert_eq!(opts, named(json!({ "foo": "bar" })));
}

#[test]
fn test_empty_named_args_are_not_forwarded() {
    let (had_named, opts) = KwPath::invoke(Args::new()).unwrap();
    assert!(!had_named);
    assert!(opts.is_empty());

    let (had_named, opts) = KwPath::invoke(Args::new().named("foo", 1)).unwrap();
    assert!(had_named);
    assert_eq!(opts, named(json!({ "foo": 1 })));
}

#[test]
fn test_constructor_helper_stays_private() {
    assert_eq!(PrivateInit::invoke(Args::new().arg(4)).unwrap(), 8);
}

#[test]
fn test_named_args_where_no_keywords_declared() {
    let args = Args::new().arg(1).named("x", 2);
    let err = PositionalReq::invoke(args).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot instantiate PositionalReq: unknown keyword: :x"
    );
}

#[test]
fn test_type_mismatch_is_a_construction_error() {
    let err = PositionalReq::invoke(Args::new().arg("three")).unwrap_err();
    assert!(err.is_construction());
    let message = err.to_string();
    assert!(message.starts_with("Cannot instantiate PositionalReq: invalid value for argument 0"));
}

#[test]
fn test_to_fn_maps_over_argument_sets() {
    let results: Vec<i64> = [1, 2, 3]
        .into_iter()
        .map(|n| Args::new().arg(n))
        .map(PrivateInit::to_fn())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(results, vec![2, 4, 6]);
}
