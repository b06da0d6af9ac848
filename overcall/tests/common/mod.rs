#![allow(dead_code)]

use overcall::{BoxError, Handler, Options, Overload, Value, schema::{number, string}};

// ============================================================================
// Test Handlers
// ============================================================================

/// Returns a fixed tag, identifying which overload ran.
pub struct Tagged(pub &'static str);

impl Handler<Value, Value, BoxError> for Tagged {
    fn call(&self, _args: Vec<Value>) -> Result<Value, BoxError> {
        Ok(Value::from(self.0))
    }
}

/// Returns the arguments it received as an array.
pub struct Echo;

impl Handler<Value, Value, BoxError> for Echo {
    fn call(&self, args: Vec<Value>) -> Result<Value, BoxError> {
        Ok(Value::Array(args))
    }
}

/// Always fails with the given message.
pub struct Failing(pub &'static str);

impl Handler<Value, Value, BoxError> for Failing {
    fn call(&self, _args: Vec<Value>) -> Result<Value, BoxError> {
        Err(self.0.into())
    }
}

// ============================================================================
// Engines
// ============================================================================

/// `(string, number) -> "string-number"` and `(number, string) -> "number-string"`.
pub fn mixed() -> Overload<Value> {
    Overload::new()
        .overload((string(), number()), Tagged("string-number"), Options::default())
        .overload((number(), string()), Tagged("number-string"), Options::default())
}

pub fn tag(value: Result<Value, BoxError>) -> String {
    match value {
        Ok(Value::String(tag)) => tag,
        Ok(other) => panic!("expected a tag, got {other}"),
        Err(err) => panic!("dispatch failed: {err}"),
    }
}
