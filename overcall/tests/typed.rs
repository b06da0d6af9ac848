//! Handlers with typed parameters.

use overcall::{
    BoxError, Options, Overload, Rest, Value, args,
    schema::{integer, number, optional, string},
    typed,
};

mod common;
use common::tag;

#[test]
fn test_typed_handler_receives_converted_parameters() {
    let engine: Overload<Value, String> = overcall::overload(
        (string(), integer()),
        typed(|word: String, times: i64| Ok::<_, BoxError>(word.repeat(times as usize))),
    );
    assert_eq!(engine.invoke(args!["ab", 3]).unwrap(), "ababab");
}

#[test]
fn test_typed_handler_with_rest_tail() {
    let engine: Overload<Value, f64> = overcall::overload_rest(
        (string(),),
        number(),
        typed(|_label: String, values: Rest<f64>| Ok::<_, BoxError>(values.iter().sum::<f64>())),
    );
    assert_eq!(engine.invoke(args!["sum", 1, 2, 3.5]).unwrap(), 6.5);
    assert_eq!(engine.invoke(args!["sum"]).unwrap(), 0.0);
}

#[test]
fn test_typed_handler_reports_conversion_failure() {
    // `optional` lets `undefined` through, which a `String` parameter rejects.
    let engine: Overload<Value, String> = overcall::overload(
        (optional(string()),),
        typed(|name: String| Ok::<_, BoxError>(name)),
    );
    assert_eq!(engine.invoke(args!["x"]).unwrap(), "x");
    assert_eq!(
        engine.invoke(args![()]).unwrap_err().to_string(),
        "argument at position 0 has type undefined, expected string"
    );
}

#[test]
fn test_typed_and_raw_handlers_mix() {
    let engine: Overload<Value> = Overload::new()
        .overload((number(),), |args: Vec<Value>| Ok(args[0].clone()), Options::default())
        .overload(
            (string(),),
            typed(|s: String| Ok::<_, BoxError>(Value::from(s.to_uppercase()))),
            Options::default(),
        );
    assert_eq!(tag(engine.invoke(args!["abc"])), "ABC");
    assert_eq!(engine.invoke(args![7]).unwrap(), Value::from(7));
}

#[test]
fn test_zero_parameter_handler() {
    let engine: Overload<Value> =
        overcall::overload((), typed(|| Ok::<_, BoxError>(Value::from("nothing"))));
    assert_eq!(tag(engine.invoke(args![])), "nothing");
}
