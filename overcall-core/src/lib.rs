//! # overcall-core
//!
//! Core traits for the Overcall runtime multiple dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! predicate and handler libraries that don't need the full `overcall-std`
//! implementation.
//!
//! # Building Blocks
//!
//! ## [`Argument`]
//!
//! The values a call carries. The engine only asks an argument for its
//! runtime type tag, which it uses to describe calls that matched nothing.
//!
//! ## [`Predicate`]
//!
//! Decides whether an argument list has the expected shape, and on success
//! produces the (possibly coerced) arguments the handler will receive.
//!
//! ## [`Handler`]
//!
//! The function run for a matched overload, and for the fallback.
//! [`Typed`] adapts functions with typed parameters via [`FromArgs`].
//!
//! ## [`Entry`]
//!
//! An immutable predicate/handler pair, the unit a registry stores.
//!
//! ## [`Dispatch`]
//!
//! The invocation interface shared by mutable and frozen engines.
//!
//! # Error Types
//!
//! - [`UnmatchedCallError`] - No overload accepted the call
//! - [`ExtractError`] - Typed parameter conversion failed

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod argument;
mod dispatch;
mod entry;
mod error;
mod extract;
mod handler;
mod predicate;

// Re-exports
pub use argument::{Argument, type_names};
pub use dispatch::Dispatch;
pub use entry::{Entry, SharedHandler};
pub use error::{BoxError, ExtractError, UnmatchedCallError};
pub use extract::{Args, FromArgs, Rest, Typed, typed};
pub use handler::Handler;
pub use predicate::{Always, BoxPredicate, Filter, Map, Predicate};
