//! Dispatch core traits.

/// Something that can be invoked with a runtime argument list.
///
/// Implemented by both the mutable and the frozen engine, so code that only
/// calls overloads can accept either.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch calls over `{V}` arguments",
    label = "missing `Dispatch` implementation",
    note = "Implement `Dispatch<{V}>` to handle call dispatching."
)]
pub trait Dispatch<V>: Send + Sync {
    /// The value returned by matched handlers and the fallback.
    type Output;

    /// The error type returned by handlers and the fallback.
    type Error;

    /// Dispatch the call to the first overload that accepts `args`.
    fn invoke(&self, args: Vec<V>) -> Result<Self::Output, Self::Error>;
}

impl<V, D: Dispatch<V> + ?Sized> Dispatch<V> for &D {
    type Output = D::Output;
    type Error = D::Error;

    fn invoke(&self, args: Vec<V>) -> Result<Self::Output, Self::Error> {
        (**self).invoke(args)
    }
}

impl<V, D: Dispatch<V> + ?Sized> Dispatch<V> for std::sync::Arc<D> {
    type Output = D::Output;
    type Error = D::Error;

    fn invoke(&self, args: Vec<V>) -> Result<Self::Output, Self::Error> {
        (**self).invoke(args)
    }
}
