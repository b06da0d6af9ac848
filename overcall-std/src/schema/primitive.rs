//! Primitive schemas for [`Value`].

use super::{BoxSchema, Issue, Schema};
use crate::value::Value;

/// Macro to define a schema that accepts a single [`Value`] variant unchanged.
macro_rules! kind_schema {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $expected:literal, $pat:pat) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Schema<Value> for $name {
            fn parse(&self, value: &Value) -> Result<Value, Issue> {
                match value {
                    $pat => Ok(value.clone()),
                    other => Err(Issue::new($expected, other)),
                }
            }
        }

        $(#[$meta])*
        pub fn $ctor() -> $name {
            $name
        }
    };
}

kind_schema!(
    /// Accepts strings.
    StringSchema, string, "string", Value::String(_)
);
kind_schema!(
    /// Accepts booleans.
    BooleanSchema, boolean, "boolean", Value::Bool(_)
);
kind_schema!(
    /// Accepts only `null`.
    NullSchema, null, "null", Value::Null
);
kind_schema!(
    /// Accepts only `undefined`.
    UndefinedSchema, undefined, "undefined", Value::Undefined
);
kind_schema!(
    /// Accepts objects.
    ObjectSchema, object, "object", Value::Object(_)
);

/// Accepts numbers other than NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

impl Schema<Value> for NumberSchema {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        match value {
            Value::Number(n) if !n.is_nan() => Ok(value.clone()),
            other => Err(Issue::new("number", other)),
        }
    }
}

/// Accepts numbers other than NaN.
pub fn number() -> NumberSchema {
    NumberSchema
}

/// Accepts every value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySchema;

impl<V: Clone + Send + Sync + 'static> Schema<V> for AnySchema {
    fn parse(&self, value: &V) -> Result<V, Issue> {
        Ok(value.clone())
    }
}

/// Accepts every value unchanged.
pub fn any() -> AnySchema {
    AnySchema
}

/// Accepts finite numbers without a fractional part.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSchema;

impl Schema<Value> for IntegerSchema {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        match value {
            Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Ok(value.clone()),
            other => Err(Issue::new("integer", other)),
        }
    }
}

/// Accepts finite numbers without a fractional part.
pub fn integer() -> IntegerSchema {
    IntegerSchema
}

/// Accepts arrays whose every element satisfies the item schema.
///
/// The output array holds the item schema's outputs.
pub struct ArraySchema {
    item: BoxSchema,
}

impl Schema<Value> for ArraySchema {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        let Value::Array(items) = value else {
            return Err(Issue::new("array", value));
        };
        items
            .iter()
            .map(|item| self.item.parse(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

/// Accepts arrays whose every element satisfies `item`.
pub fn array(item: impl Schema<Value>) -> ArraySchema {
    ArraySchema {
        item: Box::new(item),
    }
}

/// Accepts values equal to a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralSchema {
    expected: Value,
}

impl Schema<Value> for LiteralSchema {
    fn parse(&self, value: &Value) -> Result<Value, Issue> {
        if *value == self.expected {
            Ok(value.clone())
        } else {
            Err(Issue::new("literal", value))
        }
    }
}

/// Accepts values equal to `expected`.
pub fn literal(expected: impl Into<Value>) -> LiteralSchema {
    LiteralSchema {
        expected: expected.into(),
    }
}
