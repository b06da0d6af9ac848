//! # overcall - Runtime Multiple Dispatch
//!
//! `overcall` builds a single callable out of several overloads. Each
//! overload pairs a shape predicate with a handler; at call time the engine
//! checks the actual arguments against the predicates, most recently
//! registered first, and runs the first handler that accepts them. When none
//! does, a fallback runs, by default returning [`UnmatchedCallError`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use overcall::prelude::*;
//! use overcall::schema::{number, string};
//!
//! let describe: Overload<Value> = overcall::overload(
//!     (string(), number()),
//!     |args: Vec<Value>| Ok(Value::from(format!("{} x{}", args[0], args[1]))),
//! )
//! .overload((number(),), |_: Vec<Value>| Ok(Value::from("just a number")), Options::default());
//!
//! let frozen = describe.freeze();
//! assert_eq!(frozen.invoke(args![3])?, Value::from("just a number"));
//! assert!(frozen.invoke(args![true]).is_err());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use overcall_core::{
    // Arguments
    Argument,
    // Extraction
    Args,
    // Error types
    BoxError,
    // Predicates
    BoxPredicate,
    Dispatch,
    Entry,
    ExtractError,
    Filter,
    FromArgs,
    // Handler
    Handler,
    Map,
    Predicate,
    Rest,
    SharedHandler,
    Typed,
    UnmatchedCallError,
    type_names,
    typed,
};

pub use overcall_std::{
    Arity, BoxSchema, FromValue, Frozen, IntoItems, Issue, Object, Options, Overload, Schema,
    TupleSchema, Value, args, build_predicate,
};

/// Per-position schemas.
pub mod schema {
    pub use overcall_std::schema::{
        BoxSchema, IntoItems, Issue, Schema,
        combinator::{
            CoerceNumber, Custom, Nullable, Optional, Transform, Union, coerce_number, custom,
            nullable, optional, transform, union,
        },
        primitive::{
            AnySchema, ArraySchema, BooleanSchema, IntegerSchema, LiteralSchema, NullSchema,
            NumberSchema, ObjectSchema, StringSchema, UndefinedSchema, any, array, boolean,
            integer, literal, null, number, object, string, undefined,
        },
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use overcall_std::testing::*;
}

/// Create an empty engine with the default fallback.
pub fn new<V, R, E>() -> Overload<V, R, E>
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
{
    Overload::new()
}

/// Create an empty engine that runs `fallback` when no overload matches.
pub fn with_fallback<V, R, E, H>(fallback: H) -> Overload<V, R, E>
where
    V: Argument,
    R: 'static,
    E: 'static,
    H: Handler<V, R, E>,
{
    Overload::with_fallback(fallback)
}

/// Create an engine with one strict overload for `items`.
pub fn overload<V, R, E, I, H>(items: I, handler: H) -> Overload<V, R, E>
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
    I: IntoItems<V>,
    H: Handler<V, R, E>,
{
    Overload::new().overload(items, handler, Options::default())
}

/// Create an engine with one overload for `items` followed by any number of
/// `rest` arguments.
pub fn overload_rest<V, R, E, I, S, H>(items: I, rest: S, handler: H) -> Overload<V, R, E>
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
    I: IntoItems<V>,
    S: Schema<V>,
    H: Handler<V, R, E>,
{
    Overload::new().overload_rest(items, rest, handler)
}

/// Prelude module - common imports for Overcall.
///
/// # Usage
///
/// ```rust,ignore
/// use overcall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Core traits
        Dispatch,
        ExtractError,
        FromArgs,
        // Engines
        Frozen,
        Handler,
        Options,
        Overload,
        Predicate,
        Rest,
        Schema,
        UnmatchedCallError,
        // Values
        Value,
        args,
        typed,
    };
}
