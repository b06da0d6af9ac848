//! Error types for Overcall.
//!
//! This module provides the errors the dispatch layer itself can produce,
//! using `thiserror`:
//!
//! - [`UnmatchedCallError`] - No registered overload accepted a call
//! - [`ExtractError`] - A typed handler could not convert its arguments
//!
//! Errors raised by handlers or custom fallbacks are never wrapped; they reach
//! the caller of `invoke` exactly as the handler produced them.

use crate::argument::{Argument, type_names};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// This is the default handler error type of every engine.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Raised by the default fallback when no overload accepts the arguments.
///
/// Carries the runtime type tag of every supplied argument, in call order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no overload matched for arguments: [{}]", .arg_types.join(", "))]
pub struct UnmatchedCallError {
    arg_types: Vec<&'static str>,
}

impl UnmatchedCallError {
    /// Describe a call made with `args`.
    pub fn from_args<V: Argument>(args: &[V]) -> Self {
        Self {
            arg_types: type_names(args),
        }
    }

    /// The runtime type tags of the rejected arguments.
    pub fn arg_types(&self) -> &[&'static str] {
        &self.arg_types
    }
}

/// Errors that can occur while converting matched arguments into typed
/// handler parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Fewer arguments were supplied than the handler has parameters.
    #[error("missing argument at position {position}, expected {expected}")]
    Missing {
        /// Zero-based argument position.
        position: usize,
        /// The expected type tag.
        expected: &'static str,
    },

    /// An argument could not be converted into the parameter type.
    #[error("argument at position {position} has type {found}, expected {expected}")]
    Mismatch {
        /// Zero-based argument position.
        position: usize,
        /// The expected type tag.
        expected: &'static str,
        /// The runtime type tag of the supplied value.
        found: &'static str,
    },

    /// Arguments were left over after every parameter was filled.
    #[error("{count} trailing argument(s) not consumed by the handler")]
    Trailing {
        /// Number of unconsumed arguments.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_lists_types_in_order() {
        let err = UnmatchedCallError::from_args(&[
            Some(String::from("hello")),
            None::<String>,
        ]);
        assert_eq!(err.arg_types(), &["string", "undefined"]);
        assert_eq!(
            err.to_string(),
            "no overload matched for arguments: [string, undefined]"
        );
    }

    #[test]
    fn unmatched_with_no_arguments() {
        let err = UnmatchedCallError::from_args::<bool>(&[]);
        assert_eq!(err.to_string(), "no overload matched for arguments: []");
    }

    #[test]
    fn unmatched_converts_into_box_error() {
        let err: BoxError = UnmatchedCallError::from_args(&[true, false]).into();
        let back = err
            .downcast_ref::<UnmatchedCallError>()
            .expect("should downcast");
        assert_eq!(back.arg_types(), &["boolean", "boolean"]);
    }

    #[test]
    fn extract_error_messages() {
        let err = ExtractError::Mismatch {
            position: 1,
            expected: "number",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "argument at position 1 has type string, expected number"
        );
        assert_eq!(
            ExtractError::Trailing { count: 2 }.to_string(),
            "2 trailing argument(s) not consumed by the handler"
        );
    }
}
