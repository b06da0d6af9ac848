//! Argument trait for call values.

use std::sync::Arc;

/// A value that can be passed to a dispatch engine.
///
/// Arguments must be `Clone + Send + Sync + 'static` so that predicates can
/// hand coerced copies to handlers and engines can be shared across threads.
/// The only behavior the engine needs from an argument is its runtime type
/// tag, used to describe calls that matched no overload.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// enum Token { Word(String), Count(u32) }
///
/// impl Argument for Token {
///     fn type_name(&self) -> &'static str {
///         match self {
///             Token::Word(_) => "word",
///             Token::Count(_) => "count",
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid call Argument",
    label = "must be `Clone + Send + Sync + 'static` and report a runtime type tag",
    note = "Implement `Argument::type_name` for `{Self}`."
)]
pub trait Argument: Clone + Send + Sync + 'static {
    /// The runtime type tag of this value, e.g. `"string"` or `"number"`.
    fn type_name(&self) -> &'static str;
}

macro_rules! impl_argument {
    ($name:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Argument for $ty {
                fn type_name(&self) -> &'static str {
                    $name
                }
            }
        )+
    };
}

impl_argument!("string" => String, &'static str);
impl_argument!("boolean" => bool);
impl_argument!("undefined" => ());
impl_argument!(
    "number" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: Argument> Argument for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_name(),
            None => "undefined",
        }
    }
}

impl<T: Argument> Argument for Vec<T> {
    fn type_name(&self) -> &'static str {
        "array"
    }
}

impl<T: Argument> Argument for Box<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Argument> Argument for Arc<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Collects the runtime type tags of `args` in call order.
pub fn type_names<V: Argument>(args: &[V]) -> Vec<&'static str> {
    args.iter().map(Argument::type_name).collect()
}
