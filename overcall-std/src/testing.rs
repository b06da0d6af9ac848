//! Testing utilities for Overcall.
//!
//! This module provides handlers and predicates that record how the engine
//! uses them, so tests can check which overload ran and with what.
//!
//! # Features
//!
//! - [`RecordingHandler`]: Records every argument list it receives
//! - [`CountingFallback`]: Counts unmatched calls, then reports them as errors
//! - [`SpyPredicate`]: Counts how often a predicate is consulted

use overcall_core::{Argument, Handler, Predicate, UnmatchedCallError};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all argument lists it receives.
///
/// Every call returns a clone of the configured output.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new(Value::from("matched"));
/// let engine: Overload<Value> = Overload::new()
///     .overload((string(),), recorder.clone(), Options::loose());
///
/// engine.invoke(args!["a", "dropped"])?;
/// assert_eq!(recorder.calls(), vec![args!["a"]]);
/// ```
pub struct RecordingHandler<V, R> {
    calls: Arc<Mutex<Vec<Vec<V>>>>,
    output: R,
}

impl<V: Clone, R: Clone> RecordingHandler<V, R> {
    /// Create a recording handler that returns `output`.
    pub fn new(output: R) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Get a clone of the recorded argument lists.
    pub fn calls(&self) -> Vec<Vec<V>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl<V, R: Clone> Clone for RecordingHandler<V, R> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            output: self.output.clone(),
        }
    }
}

impl<V, R, E> Handler<V, R, E> for RecordingHandler<V, R>
where
    V: Clone + Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    fn call(&self, args: Vec<V>) -> Result<R, E> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(args);
        Ok(self.output.clone())
    }
}

// ============================================================================
// Counting Fallback
// ============================================================================

/// A fallback that counts invocations.
///
/// Behaves like the default fallback otherwise: every call fails with
/// [`UnmatchedCallError`].
#[derive(Clone, Default)]
pub struct CountingFallback {
    count: Arc<AtomicUsize>,
}

impl CountingFallback {
    /// Create a new counting fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<V, R, E> Handler<V, R, E> for CountingFallback
where
    V: Argument,
    R: 'static,
    E: From<UnmatchedCallError> + 'static,
{
    fn call(&self, args: Vec<V>) -> Result<R, E> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Err(E::from(UnmatchedCallError::from_args(&args)))
    }
}

// ============================================================================
// Spy Predicate
// ============================================================================

/// Wraps a predicate and counts how often it is consulted.
pub struct SpyPredicate<P> {
    inner: P,
    checks: Arc<AtomicUsize>,
}

impl<P> SpyPredicate<P> {
    /// Wrap `inner`.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            checks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A shared counter of `accepts` calls.
    pub fn checks(&self) -> Arc<AtomicUsize> {
        self.checks.clone()
    }
}

impl<V, P: Predicate<V>> Predicate<V> for SpyPredicate<P> {
    fn accepts(&self, args: &[V]) -> Option<Vec<V>> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.inner.accepts(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overcall_core::BoxError;

    #[test]
    fn recorder_keeps_every_call() {
        let recorder = RecordingHandler::<i64, &str>::new("ok");
        let shared = recorder.clone();
        let first = Handler::<i64, &str, BoxError>::call(&recorder, vec![1, 2]);
        let second = Handler::<i64, &str, BoxError>::call(&recorder, vec![3]);
        assert_eq!(first.ok(), Some("ok"));
        assert_eq!(second.ok(), Some("ok"));
        assert_eq!(shared.calls(), vec![vec![1, 2], vec![3]]);
        shared.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn counting_fallback_reports_unmatched() {
        let fallback = CountingFallback::new();
        let err = Handler::<i64, (), UnmatchedCallError>::call(&fallback, vec![1]).unwrap_err();
        assert_eq!(err.arg_types(), &["number"]);
        assert_eq!(fallback.count(), 1);
        fallback.reset();
        assert_eq!(fallback.count(), 0);
    }

    #[test]
    fn spy_counts_checks() {
        let spy = SpyPredicate::new(|args: &[i64]| Some(args.to_vec()));
        let checks = spy.checks();
        assert_eq!(spy.accepts(&[1_i64]), Some(vec![1]));
        assert_eq!(spy.accepts(&[0_i64; 0]), Some(vec![]));
        assert_eq!(checks.load(Ordering::SeqCst), 2);
    }
}
