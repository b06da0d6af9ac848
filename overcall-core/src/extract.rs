//! # Typed Arguments
//!
//! Provides the extractor pattern for handlers that want typed parameters
//! instead of a raw argument list.
//!
//! A predicate has already checked the shape of the call by the time a
//! handler runs, so extraction is a conversion step: each parameter pulls its
//! value from an [`Args`] cursor in order.
//!
//! # Extractors
//!
//! - [`FromArgs`] - implemented per concrete parameter type
//! - [`Rest`] - consumes every remaining argument
//!
//! # Handler Integration
//!
//! Use [`Typed`] (or [`typed`]) to wrap functions with typed parameters:
//!
//! ```rust,ignore
//! // The function signature defines the conversions
//! fn greet(name: String, times: f64) -> Result<String, BoxError> {
//!     Ok(name.repeat(times as usize))
//! }
//!
//! let handler = typed(greet);
//! ```

use crate::{argument::Argument, error::ExtractError, handler::Handler};
use std::marker::PhantomData;

/// A cursor over the coerced arguments of a call.
pub struct Args<V> {
    values: std::vec::IntoIter<V>,
    position: usize,
}

impl<V: Argument> Args<V> {
    /// Create a cursor at the first argument.
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Zero-based position of the next argument.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Take the next argument and convert it with `convert`.
    ///
    /// `expected` names the parameter type in error messages.
    pub fn take<T>(
        &mut self,
        expected: &'static str,
        convert: impl FnOnce(V) -> Option<T>,
    ) -> Result<T, ExtractError> {
        let position = self.position;
        let value = self
            .values
            .next()
            .ok_or(ExtractError::Missing { position, expected })?;
        self.position += 1;
        let found = value.type_name();
        convert(value).ok_or(ExtractError::Mismatch {
            position,
            expected,
            found,
        })
    }

    /// Take every remaining argument, converting each with `convert`.
    pub fn take_rest<T>(
        &mut self,
        expected: &'static str,
        mut convert: impl FnMut(V) -> Option<T>,
    ) -> Result<Vec<T>, ExtractError> {
        let mut out = Vec::with_capacity(self.remaining());
        while self.remaining() > 0 {
            out.push(self.take(expected, &mut convert)?);
        }
        Ok(out)
    }

    /// Fails if any argument was left unconsumed.
    pub fn finish(self) -> Result<(), ExtractError> {
        match self.values.len() {
            0 => Ok(()),
            count => Err(ExtractError::Trailing { count }),
        }
    }
}

/// A trait for typed handler parameters.
///
/// Most implementations consume exactly one argument via [`Args::take`];
/// [`Rest`] consumes all that remain.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be extracted from `{V}` arguments",
    label = "missing `FromArgs` implementation",
    note = "Implement `FromArgs<{V}>` to use `{Self}` as a typed handler parameter."
)]
pub trait FromArgs<V>: Sized {
    /// Pull `Self` from the cursor.
    fn from_args(args: &mut Args<V>) -> Result<Self, ExtractError>;
}

/// Collects every remaining argument.
///
/// Pairs with a rest descriptor on the predicate side: `(String, Rest<f64>)`
/// receives one string followed by any number of numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rest<T>(pub Vec<T>);

impl<T> Rest<T> {
    /// Consume the wrapper.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> std::ops::Deref for Rest<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A handler with typed parameters.
///
/// `Typed` wraps a function and converts the matched arguments into its
/// parameters using [`FromArgs`]. Conversion failures surface as
/// [`ExtractError`] through the handler's error type.
///
/// # Multi-Argument Support
///
/// Supports functions with 0 to 8 parameters:
///
/// ```rust,ignore
/// Typed::new(|| Ok(()));
/// Typed::new(|name: String| Ok(name));
/// Typed::new(|name: String, rest: Rest<f64>| Ok(rest.len()));
/// ```
pub struct Typed<F, A> {
    func: F,
    _marker: PhantomData<fn() -> A>,
}

impl<F, A> Typed<F, A> {
    /// Create a new typed handler from a function.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

/// Shorthand for [`Typed::new`].
pub fn typed<F, A>(func: F) -> Typed<F, A> {
    Typed::new(func)
}

/// Macro to implement Handler for Typed with N parameters.
macro_rules! impl_typed_handler {
    // Base case: 0 parameters
    () => {
        impl<F, V, R, E> Handler<V, R, E> for Typed<F, ()>
        where
            V: Argument,
            F: Fn() -> Result<R, E> + Send + Sync + 'static,
            E: From<ExtractError>,
        {
            fn call(&self, args: Vec<V>) -> Result<R, E> {
                Args::new(args).finish()?;
                (self.func)()
            }
        }
    };

    // Recursive case: 1+ parameters
    ($($T:ident),+) => {
        impl<F, V, R, E, $($T,)+> Handler<V, R, E> for Typed<F, ($($T,)+)>
        where
            V: Argument,
            $(
                $T: FromArgs<V> + 'static,
            )+
            F: Fn($($T,)+) -> Result<R, E> + Send + Sync + 'static,
            E: From<ExtractError>,
        {
            #[allow(non_snake_case)]
            fn call(&self, args: Vec<V>) -> Result<R, E> {
                let mut cursor = Args::new(args);
                $(
                    let $T = $T::from_args(&mut cursor)?;
                )+
                cursor.finish()?;
                (self.func)($($T,)+)
            }
        }
    };
}

impl_typed_handler!();
impl_typed_handler!(T1);
impl_typed_handler!(T1, T2);
impl_typed_handler!(T1, T2, T3);
impl_typed_handler!(T1, T2, T3, T4);
impl_typed_handler!(T1, T2, T3, T4, T5);
impl_typed_handler!(T1, T2, T3, T4, T5, T6);
impl_typed_handler!(T1, T2, T3, T4, T5, T6, T7);
impl_typed_handler!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(test)]
mod tests {
    use super::*;

    impl FromArgs<i64> for i64 {
        fn from_args(args: &mut Args<i64>) -> Result<Self, ExtractError> {
            args.take("number", Some)
        }
    }

    impl FromArgs<i64> for Rest<i64> {
        fn from_args(args: &mut Args<i64>) -> Result<Self, ExtractError> {
            args.take_rest("number", Some).map(Rest)
        }
    }

    impl FromArgs<i64> for u8 {
        fn from_args(args: &mut Args<i64>) -> Result<Self, ExtractError> {
            args.take("small number", |v| u8::try_from(v).ok())
        }
    }

    #[test]
    fn cursor_tracks_position() {
        let mut args = Args::new(vec![1_i64, 2]);
        assert_eq!(args.take("number", Some), Ok(1));
        assert_eq!(args.position(), 1);
        assert_eq!(args.remaining(), 1);
        assert_eq!(
            args.finish(),
            Err(ExtractError::Trailing { count: 1 })
        );
    }

    #[test]
    fn cursor_reports_missing_argument() {
        let mut args = Args::<i64>::new(vec![]);
        assert_eq!(
            args.take("number", Some),
            Err(ExtractError::Missing {
                position: 0,
                expected: "number"
            })
        );
    }

    #[test]
    fn typed_handler_with_two_parameters() {
        let handler = typed(|a: i64, b: i64| Ok::<_, ExtractError>(a - b));
        assert_eq!(Handler::call(&handler, vec![10_i64, 3]), Ok(7));
    }

    #[test]
    fn typed_handler_with_rest() {
        let handler = typed(|first: i64, rest: Rest<i64>| {
            Ok::<_, ExtractError>(first * rest.iter().sum::<i64>())
        });
        assert_eq!(Handler::call(&handler, vec![2_i64, 1, 2, 3]), Ok(12));
        assert_eq!(Handler::call(&handler, vec![2_i64]), Ok(0));
    }

    #[test]
    fn typed_handler_reports_mismatch() {
        let handler = typed(|small: u8| Ok::<_, ExtractError>(small));
        assert_eq!(
            Handler::call(&handler, vec![1000_i64]),
            Err(ExtractError::Mismatch {
                position: 0,
                expected: "small number",
                found: "number"
            })
        );
    }

    #[test]
    fn typed_handler_rejects_trailing_arguments() {
        let handler = typed(|a: i64| Ok::<_, ExtractError>(a));
        assert_eq!(
            Handler::call(&handler, vec![1_i64, 2]),
            Err(ExtractError::Trailing { count: 1 })
        );
    }

    #[test]
    fn zero_parameter_handler() {
        let handler = typed(|| Ok::<_, ExtractError>("done"));
        assert_eq!(Handler::<i64, _, _>::call(&handler, vec![]), Ok("done"));
    }
}
