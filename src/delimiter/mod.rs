//! Argument splitting on configurable delimiters and quote pairs.

mod scanner;
mod set;

use std::fmt;
use thiserror::Error;

pub use scanner::{split, split_at, split_bytes, split_range};
pub use set::{ArgumentDelimiter, DelimiterSet, QuotePairs};

/// The role a character holds inside an [`ArgumentDelimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Marks the boundary between two arguments.
    Delimiter,
    /// Opens a quoted span.
    OpenQuote,
    /// Closes a quoted span.
    CloseQuote,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Delimiter => f.write_str("a delimiter"),
            Role::OpenQuote => f.write_str("an opening quote"),
            Role::CloseQuote => f.write_str("a closing quote"),
        }
    }
}

/// Errors raised by configuration mutation and splitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimiterError {
    #[error("input is missing or not valid text")]
    InvalidInput,

    #[error("{name} {value} is out of range for input of length {len}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        len: usize,
    },

    #[error("{ch:?} is already {role}")]
    RoleConflict { ch: char, role: Role },
}
