//! arg-delimiter - split text into arguments.
//!
//! Arguments are separated by configurable delimiter characters. Quote
//! pairs mark literal spans in which delimiters and other quotes are
//! ignored. A character can hold only one of those roles at a time.

pub mod audit;
pub mod config;
pub mod delimiter;
pub mod input;
pub mod output;

pub use config::{CompiledConfig, Config};
pub use delimiter::{ArgumentDelimiter, DelimiterError, Role};
pub use input::SplitRequest;
pub use output::format_response;
