//! # overcall-std
//!
//! Standard implementations for the Overcall runtime multiple dispatch
//! library.
//!
//! This crate provides:
//! - **Dynamic values**: [`Value`], the argument type of schema overloads
//! - **Schemas**: per-position validators in [`schema`]
//! - **Tuple predicates**: [`TupleSchema`] with strict, loose and rest arity
//! - **Dispatch engines**: [`Overload`] and its immutable [`Frozen`] snapshot
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use overcall_core;

// Modules
mod extract;
mod macros;
pub mod registry;
pub mod schema;
pub mod testing;
pub mod tuple;
pub mod value;

pub use extract::FromValue;
pub use registry::{Frozen, Overload};
pub use schema::{BoxSchema, IntoItems, Issue, Schema};
pub use tuple::{Arity, Options, TupleSchema, build_predicate};
pub use value::{Object, Value};
