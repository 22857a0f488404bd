//! Split requests read from stdin.

use serde::Deserialize;
use thiserror::Error;

use crate::delimiter::{ArgumentDelimiter, DelimiterError};

/// Errors that can occur when parsing a request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'end' and 'length' cannot both be given")]
    ConflictingRange,

    #[error("'{0}' requires 'start'")]
    MissingStart(&'static str),
}

/// A single split request.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitRequest {
    /// The text to split. Absent or null is rejected when splitting.
    #[serde(default)]
    pub input: Option<String>,

    /// First character to scan.
    #[serde(default)]
    pub start: Option<usize>,

    /// One past the last character to scan.
    #[serde(default)]
    pub end: Option<usize>,

    /// Number of characters to scan from `start`.
    #[serde(default)]
    pub length: Option<usize>,
}

/// Which part of the input a request scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The whole input.
    All,
    /// Characters `start..end`.
    Range { start: usize, end: usize },
    /// `length` characters from `index`.
    Length { index: usize, length: usize },
}

impl SplitRequest {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        let request: Self = serde_json::from_str(json)?;
        request.selection()?;
        Ok(request)
    }

    /// The part of the input to scan.
    pub fn selection(&self) -> Result<Selection, InputError> {
        match (self.start, self.end, self.length) {
            (_, Some(_), Some(_)) => Err(InputError::ConflictingRange),
            (None, None, None) => Ok(Selection::All),
            (None, Some(_), None) => Err(InputError::MissingStart("end")),
            (None, None, Some(_)) => Err(InputError::MissingStart("length")),
            (Some(start), Some(end), None) => Ok(Selection::Range { start, end }),
            (Some(index), None, Some(length)) => Ok(Selection::Length { index, length }),
            (Some(start), None, None) => Ok(Selection::Range {
                start,
                end: self.input.as_deref().map_or(0, |s| s.chars().count()),
            }),
        }
    }

    /// Run the request against `delimiter`.
    ///
    /// A missing input is reported before any range problem.
    pub fn split(&self, delimiter: &ArgumentDelimiter) -> Result<Vec<String>, DelimiterError> {
        let input = self.input.as_deref().ok_or(DelimiterError::InvalidInput)?;
        let selection = self.selection().map_err(|e| self.selector_error(&e, input))?;
        match selection {
            Selection::All => Ok(delimiter.split(input)),
            Selection::Range { start, end } => delimiter.split_range(input, start, end),
            Selection::Length { index, length } => delimiter.split_at(input, index, length),
        }
    }

    // An inconsistent selector is a range problem, named after the field at fault.
    fn selector_error(&self, error: &InputError, input: &str) -> DelimiterError {
        let (name, value) = match error {
            InputError::MissingStart("end") => ("end", self.end),
            _ => ("length", self.length),
        };
        DelimiterError::OutOfRange {
            name,
            value: value.unwrap_or(0),
            len: input.chars().count(),
        }
    }
}
