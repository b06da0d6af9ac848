//! Tuple predicates built from per-position schemas.
//!
//! [`TupleSchema`] is the bridge between the schema layer and the dispatch
//! engine: it turns a fixed list of positional schemas, plus an optional rest
//! schema, into a [`Predicate`] over a whole argument list.
//!
//! # Arity
//!
//! - **Strict** (default): the argument count must equal the number of
//!   positional schemas.
//! - **Loose**: only the first N arguments are checked; extra arguments are
//!   dropped and never reach the handler.
//! - **Rest**: at least N arguments; every trailing argument must satisfy the
//!   rest schema and is forwarded. Arity options have no effect here.

use crate::schema::{BoxSchema, IntoItems, Schema};
use overcall_core::Predicate;

/// How a tuple predicate treats arguments beyond its positional schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// Extra arguments reject the call.
    #[default]
    Strict,
    /// Extra arguments are ignored and dropped.
    Loose,
}

/// Registration options for schema-based overloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Whether extra arguments are tolerated. Defaults to `false`.
    pub loose: bool,
}

impl Options {
    /// Create default (strict) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with `loose` enabled.
    pub fn loose() -> Self {
        Self { loose: true }
    }

    /// Set `loose`.
    pub fn with_loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }

    /// The arity these options select.
    pub fn arity(&self) -> Arity {
        if self.loose {
            Arity::Loose
        } else {
            Arity::Strict
        }
    }
}

/// A predicate over an argument list, checked position by position.
pub struct TupleSchema<V> {
    items: Vec<BoxSchema<V>>,
    rest: Option<BoxSchema<V>>,
    arity: Arity,
}

impl<V: 'static> TupleSchema<V> {
    /// A tuple of `items` with the given arity.
    pub fn new(items: impl IntoItems<V>, options: Options) -> Self {
        Self {
            items: items.into_items(),
            rest: None,
            arity: options.arity(),
        }
    }

    /// A tuple of `items` followed by any number of `rest` values.
    pub fn with_rest(items: impl IntoItems<V>, rest: impl Schema<V>) -> Self {
        Self {
            items: items.into_items(),
            rest: Some(Box::new(rest)),
            arity: Arity::Strict,
        }
    }

    /// Number of positional schemas.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no positional schemas.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a rest schema is present.
    pub fn has_rest(&self) -> bool {
        self.rest.is_some()
    }

    /// The configured arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }
}

impl<V: 'static> Predicate<V> for TupleSchema<V> {
    fn accepts(&self, args: &[V]) -> Option<Vec<V>> {
        let fixed = self.items.len();
        if args.len() < fixed {
            return None;
        }
        if self.rest.is_none() && self.arity == Arity::Strict && args.len() != fixed {
            return None;
        }

        let (head, tail) = args.split_at(fixed);
        let mut output = Vec::with_capacity(match self.rest {
            Some(_) => args.len(),
            None => fixed,
        });
        for (schema, value) in self.items.iter().zip(head) {
            output.push(schema.parse(value).ok()?);
        }
        if let Some(rest) = &self.rest {
            for value in tail {
                output.push(rest.parse(value).ok()?);
            }
        }
        Some(output)
    }
}

/// Build a predicate from positional schemas, an optional rest schema and
/// options.
pub fn build_predicate<V: 'static>(
    items: impl IntoItems<V>,
    rest: Option<BoxSchema<V>>,
    options: Options,
) -> TupleSchema<V> {
    let arity = match rest {
        Some(_) => Arity::Strict,
        None => options.arity(),
    };
    TupleSchema {
        items: items.into_items(),
        rest,
        arity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::{
            combinator::coerce_number,
            primitive::{number, string},
        },
        value::Value,
    };

    fn hello_one() -> Vec<Value> {
        vec![Value::from("hello"), Value::from(1)]
    }

    #[test]
    fn strict_requires_exact_count() {
        let pair = TupleSchema::new((string(), number()), Options::default());
        assert_eq!(pair.accepts(&hello_one()), Some(hello_one()));
        assert_eq!(pair.accepts(&[Value::from("hello")]), None);

        let mut extra = hello_one();
        extra.push(Value::from("extra"));
        assert_eq!(pair.accepts(&extra), None);
    }

    #[test]
    fn strict_checks_each_position() {
        let pair = TupleSchema::new((string(), number()), Options::default());
        assert_eq!(
            pair.accepts(&[Value::from("hello"), Value::from("world")]),
            None
        );
    }

    #[test]
    fn loose_drops_extra_arguments() {
        let pair = TupleSchema::new((string(), number()), Options::loose());
        let mut extra = hello_one();
        extra.push(Value::from("extra"));
        assert_eq!(pair.accepts(&extra), Some(hello_one()));
        assert_eq!(pair.accepts(&[Value::from("hello")]), None);
    }

    #[test]
    fn rest_forwards_trailing_arguments() {
        let variadic = TupleSchema::with_rest((string(), number()), number());
        let args = vec![
            Value::from("hello"),
            Value::from(1),
            Value::from(2),
            Value::from(3),
        ];
        assert_eq!(variadic.accepts(&args), Some(args.clone()));
        assert_eq!(variadic.accepts(&hello_one()), Some(hello_one()));
        assert_eq!(variadic.accepts(&[Value::from("hello")]), None);

        let mut bad_tail = hello_one();
        bad_tail.push(Value::from("nope"));
        assert_eq!(variadic.accepts(&bad_tail), None);
    }

    #[test]
    fn output_carries_coerced_values() {
        let numeric = TupleSchema::new((coerce_number(),), Options::default());
        assert_eq!(
            numeric.accepts(&[Value::from("42")]),
            Some(vec![Value::from(42)])
        );
    }

    #[test]
    fn empty_tuple_accepts_only_empty_list_when_strict() {
        let nothing = TupleSchema::<Value>::new((), Options::default());
        assert_eq!(nothing.accepts(&[]), Some(vec![]));
        assert_eq!(nothing.accepts(&[Value::Null]), None);

        let anything = TupleSchema::<Value>::new((), Options::loose());
        assert_eq!(anything.accepts(&[Value::Null]), Some(vec![]));
    }

    #[test]
    fn build_predicate_prefers_rest_over_options() {
        let predicate = build_predicate((string(),), Some(number().boxed()), Options::loose());
        assert!(predicate.has_rest());
        assert_eq!(predicate.arity(), Arity::Strict);
        assert_eq!(
            predicate.accepts(&[Value::from("a"), Value::from("b")]),
            None
        );
    }

    #[test]
    fn options_builders() {
        assert_eq!(Options::new().arity(), Arity::Strict);
        assert_eq!(Options::loose().arity(), Arity::Loose);
        assert!(!Options::loose().with_loose(false).loose);
    }
}
