//! Schema combinators.
//!
//! Combinators wrap other schemas to widen what they accept ([`optional`],
//! [`nullable`], [`union`]) or to change what they output ([`transform`],
//! [`coerce_number`]). A schema's output replaces the raw argument in the
//! list handed to the handler, which is how overloads normalize their inputs.

use super::{BoxSchema, Issue, Schema};
use crate::value::Value;

/// Accepts `undefined` or anything the inner schema accepts.
pub struct Optional<S> {
    inner: S,
}

impl<S: Schema<Value>> Schema<Value> for Optional<S> {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        match value {
            Value::Undefined => Ok(Value::Undefined),
            other => self.inner.parse(other),
        }
    }
}

/// Accepts `undefined` or anything `inner` accepts.
pub fn optional<S: Schema<Value>>(inner: S) -> Optional<S> {
    Optional { inner }
}

/// Accepts `null` or anything the inner schema accepts.
pub struct Nullable<S> {
    inner: S,
}

impl<S: Schema<Value>> Schema<Value> for Nullable<S> {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        match value {
            Value::Null => Ok(Value::Null),
            other => self.inner.parse(other),
        }
    }
}

/// Accepts `null` or anything `inner` accepts.
pub fn nullable<S: Schema<Value>>(inner: S) -> Nullable<S> {
    Nullable { inner }
}

/// Accepts a value matching any alternative; the first match wins.
pub struct Union<V = Value> {
    options: Vec<BoxSchema<V>>,
}

impl<V: 'static> Schema<V> for Union<V> {
    fn parse(&self, value: &V) -> Result<V, Issue> {
        let mut last = None;
        for option in &self.options {
            match option.parse(value) {
                Ok(output) => return Ok(output),
                Err(issue) => last = Some(issue),
            }
        }
        Err(last.map_or(
            Issue {
                expected: "never",
                received: "value",
            },
            |issue| Issue {
                expected: "union member",
                received: issue.received,
            },
        ))
    }
}

/// Accepts a value matching any of `options`, tried in order.
///
/// When every option rejects, the issue carries the last option's
/// `received` tag. An empty union rejects everything with
/// `expected: "never"` and `received: "value"`, since a generic `V` has no
/// type tag.
pub fn union<V: 'static>(options: Vec<BoxSchema<V>>) -> Union<V> {
    Union { options }
}

/// A schema backed by a plain check function.
pub struct Custom<F> {
    expected: &'static str,
    check: F,
}

impl<F> Schema<Value> for Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        if (self.check)(value) {
            Ok(value.clone())
        } else {
            Err(Issue::new(self.expected, value))
        }
    }
}

/// Accepts values for which `check` returns `true`.
///
/// `expected` names the accepted shape in rejection issues.
pub fn custom<F>(expected: &'static str, check: F) -> Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Custom { expected, check }
}

/// Runs a mapping over the output of the inner schema.
pub struct Transform<S, F> {
    inner: S,
    mapper: F,
}

impl<V, S, F> Schema<V> for Transform<S, F>
where
    V: 'static,
    S: Schema<V>,
    F: Fn(V) -> V + Send + Sync + 'static,
{
    fn parse(&self, value: &V) -> Result<V, Issue> {
        self.inner.parse(value).map(&self.mapper)
    }
}

/// Validates with `inner`, then replaces the output with `mapper(output)`.
pub fn transform<V, S, F>(inner: S, mapper: F) -> Transform<S, F>
where
    S: Schema<V>,
    F: Fn(V) -> V + Send + Sync + 'static,
{
    Transform { inner, mapper }
}

/// Accepts numbers and numeric strings, producing numbers.
///
/// NaN is rejected, and strings must parse to a finite number.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoerceNumber;

impl Schema<Value> for CoerceNumber {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        match value {
            Value::Number(n) if !n.is_nan() => Ok(value.clone()),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Value::Number(n)),
                _ => Err(Issue::new("numeric string", value)),
            },
            other => Err(Issue::new("number", other)),
        }
    }
}

/// Accepts numbers and numeric strings, producing numbers.
pub fn coerce_number() -> CoerceNumber {
    CoerceNumber
}
