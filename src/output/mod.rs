//! Output formatting and audit redaction.

pub mod redaction;
pub mod response;

pub use redaction::redact;
pub use response::{SplitResponse, format_error, format_response};
