//! Per-position value schemas.
//!
//! A [`Schema`] validates one argument and returns its (possibly coerced)
//! output. Schemas are the building blocks handed to the tuple predicate
//! builder in [`crate::tuple`], which turns a list of them into a
//! [`Predicate`](overcall_core::Predicate) over a whole argument list.
//!
//! - [`primitive`] - type checks for [`Value`] variants
//! - [`combinator`] - optional, union, transform and friends

pub mod combinator;
pub mod primitive;

use crate::value::Value;
use thiserror::Error;

/// Why a schema rejected a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, received {received}")]
pub struct Issue {
    /// What the schema expected.
    pub expected: &'static str,
    /// The runtime type tag of the rejected value.
    pub received: &'static str,
}

impl Issue {
    /// Create an issue for `value`.
    pub fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            received: value.kind(),
        }
    }
}

/// A validator for a single argument.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Schema` for `{V}` values",
    label = "missing `Schema` implementation",
    note = "Schemas must implement `parse`, or be a closure `Fn(&{V}) -> Result<{V}, Issue>`."
)]
pub trait Schema<V = Value>: Send + Sync + 'static {
    /// Validate `value`, returning the output to forward.
    fn parse(&self, value: &V) -> Result<V, Issue>;

    /// Boxes the schema.
    fn boxed(self) -> BoxSchema<V>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

/// A type-erased schema.
pub type BoxSchema<V = Value> = Box<dyn Schema<V>>;

// Blanket impl for closures
impl<V, F> Schema<V> for F
where
    F: Fn(&V) -> Result<V, Issue> + Send + Sync + 'static,
{
    fn parse(&self, value: &V) -> Result<V, Issue> {
        (self)(value)
    }
}

/// Conversion into a list of per-position schemas.
///
/// Implemented for tuples of schemas (up to 12) and for `Vec<BoxSchema<V>>`.
pub trait IntoItems<V> {
    /// Box every schema, preserving position.
    fn into_items(self) -> Vec<BoxSchema<V>>;
}

impl<V: 'static> IntoItems<V> for Vec<BoxSchema<V>> {
    fn into_items(self) -> Vec<BoxSchema<V>> {
        self
    }
}

impl<V> IntoItems<V> for () {
    fn into_items(self) -> Vec<BoxSchema<V>> {
        Vec::new()
    }
}

/// Macro to implement IntoItems for tuples of schemas.
macro_rules! impl_into_items_tuple {
    ($($S:ident),+) => {
        impl<V: 'static, $($S,)+> IntoItems<V> for ($($S,)+)
        where
            $($S: Schema<V>,)+
        {
            #[allow(non_snake_case)]
            fn into_items(self) -> Vec<BoxSchema<V>> {
                let ($($S,)+) = self;
                vec![$(Box::new($S) as BoxSchema<V>,)+]
            }
        }
    };
}

impl_into_items_tuple!(S1);
impl_into_items_tuple!(S1, S2);
impl_into_items_tuple!(S1, S2, S3);
impl_into_items_tuple!(S1, S2, S3, S4);
impl_into_items_tuple!(S1, S2, S3, S4, S5);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6, S7);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6, S7, S8);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6, S7, S8, S9);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6, S7, S8, S9, S10);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6, S7, S8, S9, S10, S11);
impl_into_items_tuple!(S1, S2, S3, S4, S5, S6, S7, S8, S9, S10, S11, S12);
