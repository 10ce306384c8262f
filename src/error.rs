//! Error types for the path API.

use thiserror::Error;

/// Errors produced by the variadic path builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A non-string host value was passed to `join` or `resolve`.
    #[error("argument {index} to `{function}` must be a string, got {kind}")]
    InvalidArgumentType {
        /// Function that rejected the argument.
        function: &'static str,
        /// Zero-based position of the offending argument.
        index: usize,
        /// Host-side type name, as carried by `PathArg::NonString`.
        kind: &'static str,
    },
}
