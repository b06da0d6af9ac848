//! # Shape Predicates
//!
//! A Predicate decides whether a complete argument list has the shape an
//! overload expects. On acceptance it returns the argument list the handler
//! should receive, which may differ from the raw input: values can be coerced,
//! extra arguments can be dropped.
//!
//! The dispatch engine treats predicates as opaque. Any validation layer can
//! sit behind this trait; `overcall-std` ships a schema-based one.
//!
//! # Combinators
//!
//! - [`Predicate::filter`] - an extra guard over the accepted arguments
//! - [`Predicate::map`] - transform the accepted arguments
//! - [`Predicate::boxed`] - erase the concrete predicate type

use crate::argument::Argument;

/// A shape predicate over an argument list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Predicate` over `{V}` arguments",
    label = "missing `Predicate` implementation",
    note = "Predicates must implement `accepts`, or be a closure `Fn(&[{V}]) -> Option<Vec<{V}>>`."
)]
pub trait Predicate<V>: Send + Sync + 'static {
    /// Returns the coerced argument list if `args` is accepted.
    fn accepts(&self, args: &[V]) -> Option<Vec<V>>;

    /// Accepts only when `guard` also holds for the coerced arguments.
    fn filter<F>(self, guard: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&[V]) -> bool + Send + Sync + 'static,
    {
        Filter {
            predicate: self,
            guard,
        }
    }

    /// Transforms the coerced arguments after acceptance.
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Vec<V>) -> Vec<V> + Send + Sync + 'static,
    {
        Map {
            predicate: self,
            mapper,
        }
    }

    /// Boxes the predicate.
    fn boxed(self) -> BoxPredicate<V>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

/// A type-erased predicate.
pub type BoxPredicate<V> = Box<dyn Predicate<V>>;

// Blanket impl for closures
impl<V, F> Predicate<V> for F
where
    F: Fn(&[V]) -> Option<Vec<V>> + Send + Sync + 'static,
{
    fn accepts(&self, args: &[V]) -> Option<Vec<V>> {
        (self)(args)
    }
}

/// A predicate that accepts every argument list unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<V: Argument> Predicate<V> for Always {
    fn accepts(&self, args: &[V]) -> Option<Vec<V>> {
        Some(args.to_vec())
    }
}

/// See [`Predicate::filter`].
pub struct Filter<P, F> {
    predicate: P,
    guard: F,
}

impl<V, P, F> Predicate<V> for Filter<P, F>
where
    V: 'static,
    P: Predicate<V>,
    F: Fn(&[V]) -> bool + Send + Sync + 'static,
{
    fn accepts(&self, args: &[V]) -> Option<Vec<V>> {
        self.predicate
            .accepts(args)
            .filter(|coerced| (self.guard)(coerced.as_slice()))
    }
}

/// See [`Predicate::map`].
pub struct Map<P, F> {
    predicate: P,
    mapper: F,
}

impl<V, P, F> Predicate<V> for Map<P, F>
where
    V: 'static,
    P: Predicate<V>,
    F: Fn(Vec<V>) -> Vec<V> + Send + Sync + 'static,
{
    fn accepts(&self, args: &[V]) -> Option<Vec<V>> {
        self.predicate.accepts(args).map(&self.mapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(args: &[i64]) -> Option<Vec<i64>> {
        (args.len() == 2).then(|| args.to_vec())
    }

    #[test]
    fn closure_is_predicate() {
        assert_eq!(pair.accepts(&[1, 2]), Some(vec![1, 2]));
        assert_eq!(pair.accepts(&[1]), None);
    }

    #[test]
    fn always_accepts_unchanged() {
        assert_eq!(Always.accepts(&[3_i64, 4, 5]), Some(vec![3, 4, 5]));
        assert_eq!(Predicate::<i64>::accepts(&Always, &[]), Some(vec![]));
    }

    #[test]
    fn filter_guards_coerced_arguments() {
        let ordered = pair.filter(|args: &[i64]| args[0] < args[1]);
        assert_eq!(ordered.accepts(&[1, 2]), Some(vec![1, 2]));
        assert_eq!(ordered.accepts(&[2, 1]), None);
        assert_eq!(ordered.accepts(&[1, 2, 3]), None);
    }

    #[test]
    fn map_transforms_after_acceptance() {
        let swapped = pair.map(|mut args: Vec<i64>| {
            args.reverse();
            args
        });
        assert_eq!(swapped.accepts(&[1, 2]), Some(vec![2, 1]));
        assert_eq!(swapped.accepts(&[1]), None);
    }

    #[test]
    fn boxed_predicate_delegates() {
        let boxed: BoxPredicate<i64> = pair.boxed();
        assert_eq!(boxed.accepts(&[7, 8]), Some(vec![7, 8]));
    }
}
