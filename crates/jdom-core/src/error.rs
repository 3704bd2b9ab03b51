//! Error types for value conversion, structural access and path compilation.

use crate::key::Key;
use crate::value::ValueType;
use thiserror::Error;

/// Errors reported by the checked [`Value`](crate::Value) API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The value's tag cannot be converted to the requested type at all
    /// (e.g. a string or an object read as an integer).
    #[error("type mismatch: cannot convert {found} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: ValueType,
    },

    /// The value has a compatible tag but its magnitude does not fit the
    /// requested numeric type.
    #[error("value {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: String },

    /// An array-only or object-only operation was called on a value with
    /// the wrong tag.
    #[error("cannot {operation} on a value of type {found}")]
    Structural {
        operation: &'static str,
        found: ValueType,
    },

    /// `get` was asked for a key that is not stored.
    #[error("no entry for key {0}")]
    NotFound(Key),
}

/// Errors detected while compiling a path expression.
///
/// Positions are 0-based byte offsets into the expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `[` was not closed by `]`.
    #[error("unterminated index at position {position}")]
    UnterminatedIndex { position: usize },

    /// The text between `[` and `]` is neither `%` nor a decimal index.
    #[error("invalid array index at position {position}")]
    InvalidIndex { position: usize },

    /// A `%` or `[%]` placeholder has no argument left to consume.
    #[error("missing argument for placeholder at position {position}")]
    MissingArgument { position: usize },

    /// The next argument is a name where an index was expected, or the reverse.
    #[error("placeholder at position {position} expects {expected} argument")]
    ArgumentKindMismatch {
        position: usize,
        expected: &'static str,
    },

    /// More arguments were supplied than a path accepts.
    #[error("too many path arguments: {0} (at most {max})", max = crate::path::MAX_PATH_ARGUMENTS)]
    TooManyArguments(usize),
}

/// Convenience alias used throughout jdom-core.
pub type Result<T, E = ValueError> = std::result::Result<T, E>;
