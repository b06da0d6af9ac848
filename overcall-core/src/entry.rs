//! Registry entries.

use crate::{
    handler::Handler,
    predicate::{BoxPredicate, Predicate},
};
use std::sync::Arc;

/// A shared, type-erased handler.
pub type SharedHandler<V, R, E> = Arc<dyn Handler<V, R, E>>;

/// One registered overload: a predicate paired with its handler.
///
/// An entry owns its predicate and shares its handler. Entries are immutable
/// once created; registering a new overload always builds a new entry.
pub struct Entry<V, R, E> {
    predicate: BoxPredicate<V>,
    handler: SharedHandler<V, R, E>,
}

impl<V: 'static, R: 'static, E: 'static> Entry<V, R, E> {
    /// Create a new entry.
    pub fn new<P, H>(predicate: P, handler: H) -> Self
    where
        P: Predicate<V>,
        H: Handler<V, R, E>,
    {
        Self {
            predicate: Box::new(predicate),
            handler: Arc::new(handler),
        }
    }

    /// Create an entry from an already shared handler.
    pub fn from_shared(predicate: BoxPredicate<V>, handler: SharedHandler<V, R, E>) -> Self {
        Self { predicate, handler }
    }

    /// Get the predicate reference.
    pub fn predicate(&self) -> &dyn Predicate<V> {
        &*self.predicate
    }

    /// Get the shared handler.
    pub fn handler(&self) -> &SharedHandler<V, R, E> {
        &self.handler
    }

    /// Run the handler if the predicate accepts `args`.
    ///
    /// Returns `None` when the predicate rejects the call.
    pub fn try_call(&self, args: &[V]) -> Option<Result<R, E>> {
        let coerced = self.predicate.accepts(args)?;
        Some(self.handler.call(coerced))
    }
}

impl<V, R, E> std::fmt::Debug for Entry<V, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry").finish_non_exhaustive()
    }
}
