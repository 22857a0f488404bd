//! Single-pass argument scanner.
//!
//! Arguments are only emitted on boundary events: a delimiter, a quote
//! opening, or a quote closing. The end of the scanned range terminates the
//! last argument only once some boundary has been seen, so input without any
//! delimiter or quote yields no arguments at all. Content of a quote that is
//! never closed is dropped.

use super::{ArgumentDelimiter, DelimiterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted(char),
}

/// Split the whole input into arguments.
pub fn split(input: &str, delimiter: &ArgumentDelimiter) -> Vec<String> {
    scan(input, delimiter)
}

/// Split the characters `start..end` of `input`.
///
/// Offsets count `char`s, not bytes.
pub fn split_range(
    input: &str,
    start: usize,
    end: usize,
    delimiter: &ArgumentDelimiter,
) -> Result<Vec<String>, DelimiterError> {
    let len = input.chars().count();
    if start > len {
        return Err(DelimiterError::OutOfRange {
            name: "start",
            value: start,
            len,
        });
    }
    if end < start || end > len {
        return Err(DelimiterError::OutOfRange {
            name: "end",
            value: end,
            len,
        });
    }
    Ok(scan(char_slice(input, start, end), delimiter))
}

/// Split `length` characters of `input` starting at character `index`.
pub fn split_at(
    input: &str,
    index: usize,
    length: usize,
    delimiter: &ArgumentDelimiter,
) -> Result<Vec<String>, DelimiterError> {
    let len = input.chars().count();
    if index > len {
        return Err(DelimiterError::OutOfRange {
            name: "index",
            value: index,
            len,
        });
    }
    match index.checked_add(length) {
        Some(end) if end <= len => Ok(scan(char_slice(input, index, end), delimiter)),
        _ => Err(DelimiterError::OutOfRange {
            name: "length",
            value: length,
            len,
        }),
    }
}

/// Split raw bytes. Anything that is not UTF-8 text is rejected before the
/// range is looked at.
pub fn split_bytes(
    input: &[u8],
    start: usize,
    end: usize,
    delimiter: &ArgumentDelimiter,
) -> Result<Vec<String>, DelimiterError> {
    let input = std::str::from_utf8(input).map_err(|_| DelimiterError::InvalidInput)?;
    split_range(input, start, end, delimiter)
}

fn char_slice(input: &str, start: usize, end: usize) -> &str {
    let byte_offset = |n: usize| input.char_indices().nth(n).map_or(input.len(), |(i, _)| i);
    &input[byte_offset(start)..byte_offset(end)]
}

fn scan(text: &str, delimiter: &ArgumentDelimiter) -> Vec<String> {
    let mut args = Vec::new();
    let mut state = State::Unquoted;
    // Byte offset where the pending argument starts.
    let mut arg_start = 0;
    // False right after a closing quote: the quoted argument is already out.
    let mut pending = true;
    let mut seen_boundary = false;

    for (pos, c) in text.char_indices() {
        let next = pos + c.len_utf8();
        match state {
            State::Unquoted => {
                if delimiter.contains_delimiter(c) {
                    if pending || pos > arg_start {
                        args.push(text[arg_start..pos].to_string());
                    }
                    pending = true;
                } else if let Some(close) = delimiter.lookup_close_quote(c) {
                    if pos > arg_start {
                        args.push(text[arg_start..pos].to_string());
                    }
                    state = State::Quoted(close);
                } else {
                    continue;
                }
                arg_start = next;
                seen_boundary = true;
            }
            State::Quoted(close) if c == close => {
                args.push(text[arg_start..pos].to_string());
                state = State::Unquoted;
                arg_start = next;
                pending = false;
            }
            State::Quoted(_) => {}
        }
    }

    if seen_boundary && state == State::Unquoted && (pending || arg_start < text.len()) {
        args.push(text[arg_start..].to_string());
    }

    args
}
