//! Typed parameters for [`Value`] arguments.
//!
//! Implements [`FromArgs`] for the Rust types a [`Value`] converts into, so
//! overload handlers can be written with typed parameters via
//! [`typed`](overcall_core::typed).

use crate::value::{Object, Value};
use overcall_core::{Args, ExtractError, FromArgs, Rest};

/// Conversion from a single [`Value`].
///
/// Every `FromValue` type is also a single-position [`FromArgs`] parameter,
/// and can be collected by [`Rest`].
pub trait FromValue: Sized {
    /// Type tag used in mismatch errors.
    const EXPECTED: &'static str;

    /// Convert `value`, or `None` if it has the wrong shape.
    fn from_value(value: Value) -> Option<Self>;
}

impl FromValue for Value {
    const EXPECTED: &'static str = "value";

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n)
                if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 =>
            {
                Some(n as i64)
            }
            _ => None,
        }
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl FromValue for Object {
    const EXPECTED: &'static str = "object";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// Macro to implement single-position FromArgs for FromValue types.
macro_rules! impl_from_args {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromArgs<Value> for $ty {
                fn from_args(args: &mut Args<Value>) -> Result<Self, ExtractError> {
                    args.take(<$ty as FromValue>::EXPECTED, <$ty as FromValue>::from_value)
                }
            }
        )+
    };
}

impl_from_args!(Value, String, f64, i64, bool, Vec<Value>, Object);

impl<T: FromValue> FromArgs<Value> for Rest<T> {
    fn from_args(args: &mut Args<Value>) -> Result<Self, ExtractError> {
        args.take_rest(T::EXPECTED, T::from_value).map(Rest)
    }
}
