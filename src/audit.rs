//! Audit logging for split requests.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::delimiter::DelimiterError;
use crate::input::{Selection, SplitRequest};
use crate::output::redact;

const SUMMARY_MAX_LEN: usize = 200;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Whether the split succeeded.
    pub ok: bool,
    /// First scanned character, if the request selected one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    /// One past the last scanned character, if the request selected one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    /// Number of arguments produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Error message for failed splits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Redacted, truncated input.
    pub summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from a request and its outcome.
    pub fn new(
        request: &SplitRequest,
        outcome: &Result<Vec<String>, DelimiterError>,
        redact_patterns: &[Regex],
    ) -> Self {
        let (start, end) = match request.selection() {
            Ok(Selection::Range { start, end }) => (Some(start), Some(end)),
            Ok(Selection::Length { index, length }) => {
                (Some(index), index.checked_add(length))
            }
            Ok(Selection::All) | Err(_) => (None, None),
        };

        let (ok, count, error) = match outcome {
            Ok(args) => (true, Some(args.len()), None),
            Err(e) => (false, None, Some(e.to_string())),
        };

        let summary = request
            .input
            .as_deref()
            .map(|s| truncate_string(&redact(s, redact_patterns), SUMMARY_MAX_LEN))
            .unwrap_or_else(|| "<missing>".to_string());

        Self {
            timestamp: Utc::now(),
            ok,
            start,
            end,
            count,
            error,
            summary,
        }
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log the outcome of a request.
    pub fn log_split(
        &mut self,
        request: &SplitRequest,
        outcome: &Result<Vec<String>, DelimiterError>,
        redact_patterns: &[Regex],
    ) -> std::io::Result<()> {
        let entry = AuditEntry::new(request, outcome, redact_patterns);
        self.log(&entry)
    }
}
