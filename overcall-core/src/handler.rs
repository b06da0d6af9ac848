//! # Handlers
//!
//! A Handler is the function an overload runs once its predicate has accepted
//! the call. It receives the coerced argument list, never the raw one.
//!
//! Fallbacks are handlers too: they run with the raw, uncoerced arguments when
//! no overload matched.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|args: Vec<V>| Ok(...)`
//! 2. **Struct implementation**: `impl Handler<V, R, E> for MyHandler`
//! 3. **Typed parameters**: `typed(|name: String, count: f64| Ok(...))`, see
//!    [`Typed`](crate::Typed)

/// The function run for a matched overload.
///
/// Handlers are shared by reference between an engine, its clones and its
/// frozen snapshots, so they must be `Send + Sync + 'static`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle calls over `{V}` arguments",
    label = "missing `Handler<{V}, {R}, {E}>` implementation",
    note = "Handlers must implement `call`, or be a closure `Fn(Vec<{V}>) -> Result<{R}, {E}>`."
)]
pub trait Handler<V, R, E>: Send + Sync + 'static {
    /// Executes the handler with the matched arguments.
    fn call(&self, args: Vec<V>) -> Result<R, E>;
}

// Blanket impl for closures
impl<V, R, E, F> Handler<V, R, E> for F
where
    F: Fn(Vec<V>) -> Result<R, E> + Send + Sync + 'static,
{
    fn call(&self, args: Vec<V>) -> Result<R, E> {
        (self)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(args: Vec<i64>) -> Result<i64, String> {
        Ok(args.into_iter().sum())
    }

    #[test]
    fn closure_is_handler() {
        assert_eq!(Handler::call(&sum, vec![1, 2, 3]), Ok(6));
    }

    #[test]
    fn handler_errors_are_returned_as_is() {
        let refuse = |_args: Vec<i64>| -> Result<i64, String> { Err("refused".into()) };
        assert_eq!(Handler::call(&refuse, vec![]), Err("refused".to_string()));
    }
}
