//! The delimiter/quote-pair configuration and its read-only views.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{DelimiterError, Role, scanner};

/// Delimiters and quote pairs used to split input into arguments.
///
/// Both collections live here so every mutation is checked against both of
/// them: a character is at most one of delimiter, opening quote or closing
/// quote. An opening quote may be its own closing quote (`'` -> `'`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgumentDelimiter {
    delimiters: BTreeSet<char>,
    quote_pairs: BTreeMap<char, char>,
}

fn conflict(ch: char, role: Role) -> DelimiterError {
    DelimiterError::RoleConflict { ch, role }
}

impl ArgumentDelimiter {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`extend_delimiters`](Self::extend_delimiters).
    pub fn with_delimiters<I>(mut self, chars: I) -> Result<Self, DelimiterError>
    where
        I: IntoIterator<Item = char>,
    {
        self.extend_delimiters(chars)?;
        Ok(self)
    }

    /// Builder form of [`add_quote_pair`](Self::add_quote_pair).
    pub fn with_quote_pair(mut self, open: char, close: char) -> Result<Self, DelimiterError> {
        self.add_quote_pair(open, close)?;
        Ok(self)
    }

    /// Read-only view of the delimiters.
    pub fn delimiters(&self) -> DelimiterSet<'_> {
        DelimiterSet {
            inner: &self.delimiters,
        }
    }

    /// Read-only view of the quote pairs.
    pub fn quote_pairs(&self) -> QuotePairs<'_> {
        QuotePairs {
            inner: &self.quote_pairs,
        }
    }

    /// Whether `c` is a delimiter.
    pub fn contains_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// The closing quote paired with `open`, if `open` is an opening quote.
    pub fn lookup_close_quote(&self, open: char) -> Option<char> {
        self.quote_pairs.get(&open).copied()
    }

    /// The role `c` currently holds, if any.
    ///
    /// A character that opens and closes its own pair reports `OpenQuote`.
    pub fn role_of(&self, c: char) -> Option<Role> {
        if self.delimiters.contains(&c) {
            Some(Role::Delimiter)
        } else if self.quote_pairs.contains_key(&c) {
            Some(Role::OpenQuote)
        } else if self.quote_pairs.values().any(|&v| v == c) {
            Some(Role::CloseQuote)
        } else {
            None
        }
    }

    /// Add a delimiter. Returns `false` if it was already present.
    pub fn add_delimiter(&mut self, c: char) -> Result<bool, DelimiterError> {
        self.check_delimiter(c)?;
        Ok(self.delimiters.insert(c))
    }

    /// Remove a delimiter. Returns `false` if it was not present.
    pub fn remove_delimiter(&mut self, c: char) -> bool {
        self.delimiters.remove(&c)
    }

    /// Add several delimiters. Nothing is added if any of them conflicts.
    pub fn extend_delimiters<I>(&mut self, chars: I) -> Result<(), DelimiterError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();
        for &c in &chars {
            self.check_delimiter(c)?;
        }
        self.delimiters.extend(chars);
        Ok(())
    }

    /// Keep only the delimiters for which `keep` returns true.
    pub fn retain_delimiters<F>(&mut self, mut keep: F)
    where
        F: FnMut(char) -> bool,
    {
        self.delimiters.retain(|&c| keep(c));
    }

    /// Remove every delimiter.
    pub fn clear_delimiters(&mut self) {
        self.delimiters.clear();
    }

    /// Add the pair `open -> close`.
    ///
    /// Fails if `open` is already an opening quote; use
    /// [`replace_quote_pair`](Self::replace_quote_pair) to overwrite.
    pub fn add_quote_pair(&mut self, open: char, close: char) -> Result<(), DelimiterError> {
        if self.delimiters.contains(&open) {
            return Err(conflict(open, Role::Delimiter));
        }
        if self.quote_pairs.contains_key(&open) {
            return Err(conflict(open, Role::OpenQuote));
        }
        self.check_quote_pair(open, close)?;
        self.quote_pairs.insert(open, close);
        Ok(())
    }

    /// Set the pair `open -> close`, overwriting any pair already opened by
    /// `open`. Returns the previous closing quote.
    pub fn replace_quote_pair(
        &mut self,
        open: char,
        close: char,
    ) -> Result<Option<char>, DelimiterError> {
        self.check_quote_pair(open, close)?;
        Ok(self.quote_pairs.insert(open, close))
    }

    /// Remove the pair opened by `open`, freeing both of its characters.
    pub fn remove_quote_pair(&mut self, open: char) -> Option<char> {
        self.quote_pairs.remove(&open)
    }

    /// Remove every quote pair.
    pub fn clear_quote_pairs(&mut self) {
        self.quote_pairs.clear();
    }

    /// Split the whole input. Cannot fail.
    pub fn split(&self, input: &str) -> Vec<String> {
        scanner::split(input, self)
    }

    /// Split the characters in `start..end`.
    pub fn split_range(
        &self,
        input: &str,
        start: usize,
        end: usize,
    ) -> Result<Vec<String>, DelimiterError> {
        scanner::split_range(input, start, end, self)
    }

    /// Split `length` characters from `index`.
    pub fn split_at(
        &self,
        input: &str,
        index: usize,
        length: usize,
    ) -> Result<Vec<String>, DelimiterError> {
        scanner::split_at(input, index, length, self)
    }

    fn check_delimiter(&self, c: char) -> Result<(), DelimiterError> {
        if self.quote_pairs.contains_key(&c) {
            return Err(conflict(c, Role::OpenQuote));
        }
        if self.quote_pairs.values().any(|&v| v == c) {
            return Err(conflict(c, Role::CloseQuote));
        }
        Ok(())
    }

    // The entry keyed by `open` is ignored, so a replace may reuse its own characters.
    fn check_quote_pair(&self, open: char, close: char) -> Result<(), DelimiterError> {
        let closed_by_other = |c: char| self.quote_pairs.iter().any(|(&k, &v)| v == c && k != open);

        if self.delimiters.contains(&open) {
            return Err(conflict(open, Role::Delimiter));
        }
        if closed_by_other(open) {
            return Err(conflict(open, Role::CloseQuote));
        }
        if self.delimiters.contains(&close) {
            return Err(conflict(close, Role::Delimiter));
        }
        if closed_by_other(close) {
            return Err(conflict(close, Role::CloseQuote));
        }
        if close != open && self.quote_pairs.contains_key(&close) {
            return Err(conflict(close, Role::OpenQuote));
        }
        Ok(())
    }
}

/// Borrowed view of the delimiter characters.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterSet<'a> {
    inner: &'a BTreeSet<char>,
}

impl<'a> DelimiterSet<'a> {
    /// Whether `c` is a delimiter.
    pub fn contains(&self, c: char) -> bool {
        self.inner.contains(&c)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Delimiters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + 'a {
        self.inner.iter().copied()
    }

    /// Whether every delimiter is in `other`.
    pub fn is_subset_of<I: IntoIterator<Item = char>>(&self, other: I) -> bool {
        let other: BTreeSet<char> = other.into_iter().collect();
        self.inner.is_subset(&other)
    }

    /// Whether every character of `other` is a delimiter.
    pub fn is_superset_of<I: IntoIterator<Item = char>>(&self, other: I) -> bool {
        other.into_iter().all(|c| self.inner.contains(&c))
    }

    /// Whether any character of `other` is a delimiter.
    pub fn overlaps<I: IntoIterator<Item = char>>(&self, other: I) -> bool {
        other.into_iter().any(|c| self.inner.contains(&c))
    }

    /// Whether the delimiters are exactly the characters of `other`.
    pub fn set_eq<I: IntoIterator<Item = char>>(&self, other: I) -> bool {
        let other: BTreeSet<char> = other.into_iter().collect();
        *self.inner == other
    }
}

/// Borrowed view of the opening -> closing quote pairs.
#[derive(Debug, Clone, Copy)]
pub struct QuotePairs<'a> {
    inner: &'a BTreeMap<char, char>,
}

impl<'a> QuotePairs<'a> {
    /// The closing quote for `open`.
    pub fn get(&self, open: char) -> Option<char> {
        self.inner.get(&open).copied()
    }

    /// Whether `open` is an opening quote.
    pub fn contains_key(&self, open: char) -> bool {
        self.inner.contains_key(&open)
    }

    /// Whether `close` is a closing quote.
    pub fn contains_value(&self, close: char) -> bool {
        self.inner.values().any(|&v| v == close)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pairs ordered by opening quote.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + 'a {
        self.inner.iter().map(|(&k, &v)| (k, v))
    }

    /// Opening quotes in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = char> + 'a {
        self.inner.keys().copied()
    }

    /// Closing quotes, ordered by their opening quote.
    pub fn values(&self) -> impl Iterator<Item = char> + 'a {
        self.inner.values().copied()
    }
}
