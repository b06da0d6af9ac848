//! Registry module for overload management.
//!
//! This module provides the mutable [`Overload`] engine for registering
//! predicate/handler pairs and the [`Frozen`] engine for immutable,
//! thread-safe dispatch.
//!
//! Entries are kept most recent first, so when several predicates accept the
//! same call the latest registration wins. Registration never edits the
//! sequence in place: it builds a new one with the new entry at the front,
//! which keeps frozen snapshots and clones stable.

use crate::{
    schema::{IntoItems, Schema},
    tuple::{Options, TupleSchema},
};
use overcall_core::{
    Argument, BoxError, Dispatch, Entry, Handler, Predicate, SharedHandler, UnmatchedCallError,
};
use std::sync::Arc;

/// The default fallback: reports the argument type tags as an error.
#[derive(Debug, Clone, Copy, Default)]
struct Unmatched;

impl<V, R, E> Handler<V, R, E> for Unmatched
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
{
    fn call(&self, args: Vec<V>) -> Result<R, E> {
        Err(E::from(UnmatchedCallError::from_args(&args)))
    }
}

/// Registry state shared by both engines.
struct Table<V, R, E> {
    entries: Arc<[Arc<Entry<V, R, E>>]>,
    fallback: SharedHandler<V, R, E>,
}

impl<V, R, E> Clone for Table<V, R, E> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl<V: Argument, R: 'static, E: 'static> Table<V, R, E> {
    fn new(fallback: SharedHandler<V, R, E>) -> Self {
        Self {
            entries: Arc::from(Vec::new()),
            fallback,
        }
    }

    fn push_front(&mut self, entry: Entry<V, R, E>) {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(Arc::new(entry));
        next.extend(self.entries.iter().cloned());
        self.entries = next.into();

        #[cfg(feature = "tracing")]
        tracing::trace!(entries = self.entries.len(), "overload registered");
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn invoke(&self, args: Vec<V>) -> Result<R, E> {
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(result) = entry.try_call(&args) {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, arity = args.len(), "overload matched");
                return result;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            arg_types = ?overcall_core::type_names(&args),
            "no overload matched, running fallback"
        );
        self.fallback.call(args)
    }
}

// ============================================================================
// Overload - the mutable engine
// ============================================================================

/// A mutable dispatch engine.
///
/// Register overloads with the `extend*` methods (or their by-value
/// `overload*` counterparts), then call [`invoke`](Self::invoke). Use
/// [`freeze`](Self::freeze) to take an immutable snapshot for sharing.
///
/// # Example
/// ```ignore
/// let mut greet: Overload<Value> = Overload::new();
/// greet
///     .extend((string(),), |args: Vec<Value>| Ok(args[0].clone()), Options::default())
///     .extend((number(),), |_: Vec<Value>| Ok(Value::from("a number")), Options::default());
///
/// assert_eq!(greet.invoke(args!["hi"])?, Value::from("hi"));
/// ```
pub struct Overload<V, R = V, E = BoxError> {
    table: Table<V, R, E>,
}

impl<V, R, E> Overload<V, R, E>
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
{
    /// Create an empty engine whose fallback returns [`UnmatchedCallError`].
    pub fn new() -> Self {
        Self::with_fallback(Unmatched)
    }
}

impl<V, R, E> Default for Overload<V, R, E>
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Argument, R: 'static, E: 'static> Overload<V, R, E> {
    /// Create an empty engine that runs `fallback` when nothing matches.
    ///
    /// The fallback receives the raw, uncoerced arguments.
    pub fn with_fallback<H: Handler<V, R, E>>(fallback: H) -> Self {
        Self {
            table: Table::new(Arc::new(fallback)),
        }
    }

    /// Register an overload for positional `items`.
    pub fn extend<I, H>(&mut self, items: I, handler: H, options: Options) -> &mut Self
    where
        I: IntoItems<V>,
        H: Handler<V, R, E>,
    {
        self.extend_with(TupleSchema::new(items, options), handler)
    }

    /// Register an overload for positional `items` followed by any number of
    /// arguments matching `rest`.
    pub fn extend_rest<I, S, H>(&mut self, items: I, rest: S, handler: H) -> &mut Self
    where
        I: IntoItems<V>,
        S: Schema<V>,
        H: Handler<V, R, E>,
    {
        self.extend_with(TupleSchema::with_rest(items, rest), handler)
    }

    /// Register an overload guarded by an arbitrary predicate.
    pub fn extend_with<P, H>(&mut self, predicate: P, handler: H) -> &mut Self
    where
        P: Predicate<V>,
        H: Handler<V, R, E>,
    {
        self.table.push_front(Entry::new(predicate, handler));
        self
    }

    /// Register an overload (by-value version of [`extend`](Self::extend)).
    pub fn overload<I, H>(mut self, items: I, handler: H, options: Options) -> Self
    where
        I: IntoItems<V>,
        H: Handler<V, R, E>,
    {
        self.extend(items, handler, options);
        self
    }

    /// Register a rest overload (by-value version of
    /// [`extend_rest`](Self::extend_rest)).
    pub fn overload_rest<I, S, H>(mut self, items: I, rest: S, handler: H) -> Self
    where
        I: IntoItems<V>,
        S: Schema<V>,
        H: Handler<V, R, E>,
    {
        self.extend_rest(items, rest, handler);
        self
    }

    /// Register a predicate overload (by-value version of
    /// [`extend_with`](Self::extend_with)).
    pub fn overload_with<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Predicate<V>,
        H: Handler<V, R, E>,
    {
        self.extend_with(predicate, handler);
        self
    }

    /// Dispatch `args` to the most recently registered overload that accepts
    /// them, or to the fallback.
    pub fn invoke(&self, args: Vec<V>) -> Result<R, E> {
        self.table.invoke(args)
    }

    /// Take an immutable snapshot.
    ///
    /// The snapshot shares entries and fallback with this engine. Later
    /// registrations here are never visible through it.
    pub fn freeze(&self) -> Frozen<V, R, E> {
        Frozen {
            table: self.table.clone(),
        }
    }

    /// Number of registered overloads.
    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    /// Whether no overload is registered.
    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// Convert into a plain function.
    pub fn into_fn(self) -> impl Fn(Vec<V>) -> Result<R, E> + Clone + Send + Sync + 'static {
        move |args| self.invoke(args)
    }
}

impl<V, R, E> Clone for Overload<V, R, E> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<V, R, E> std::fmt::Debug for Overload<V, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overload")
            .field("entries", &self.table.entries.len())
            .finish_non_exhaustive()
    }
}

impl<V: Argument, R: 'static, E: 'static> Dispatch<V> for Overload<V, R, E> {
    type Output = R;
    type Error = E;

    fn invoke(&self, args: Vec<V>) -> Result<R, E> {
        self.table.invoke(args)
    }
}

// ============================================================================
// Frozen - the immutable engine
// ============================================================================

/// An immutable dispatch engine.
///
/// Created by [`Overload::freeze`]. A frozen engine has no registration
/// methods; cloning it yields another frozen engine.
pub struct Frozen<V, R = V, E = BoxError> {
    table: Table<V, R, E>,
}

impl<V: Argument, R: 'static, E: 'static> Frozen<V, R, E> {
    /// Dispatch `args`, see [`Overload::invoke`].
    pub fn invoke(&self, args: Vec<V>) -> Result<R, E> {
        self.table.invoke(args)
    }

    /// Number of registered overloads.
    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    /// Whether no overload is registered.
    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// Convert into a plain function.
    pub fn into_fn(self) -> impl Fn(Vec<V>) -> Result<R, E> + Clone + Send + Sync + 'static {
        move |args| self.invoke(args)
    }
}

impl<V, R, E> Clone for Frozen<V, R, E> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<V, R, E> std::fmt::Debug for Frozen<V, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frozen")
            .field("entries", &self.table.entries.len())
            .finish_non_exhaustive()
    }
}

impl<V: Argument, R: 'static, E: 'static> Dispatch<V> for Frozen<V, R, E> {
    type Output = R;
    type Error = E;

    fn invoke(&self, args: Vec<V>) -> Result<R, E> {
        self.table.invoke(args)
    }
}
