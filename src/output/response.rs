//! Response formatting for split results.

use serde::Serialize;

use crate::delimiter::DelimiterError;

/// JSON response for a successful split.
#[derive(Debug, Serialize)]
pub struct SplitResponse<'a> {
    pub arguments: &'a [String],
    pub count: usize,
}

impl<'a> SplitResponse<'a> {
    pub fn new(arguments: &'a [String]) -> Self {
        Self {
            arguments,
            count: arguments.len(),
        }
    }
}

/// Format split arguments as a JSON line for stdout.
pub fn format_response(arguments: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(&SplitResponse::new(arguments))
}

/// Format a split error for stderr.
pub fn format_error(error: &DelimiterError) -> String {
    format!("ERROR: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_response() {
        let args = vec!["a".to_string(), "".to_string(), "c\"d".to_string()];
        assert_eq!(
            format_response(&args).unwrap(),
            r#"{"arguments":["a","","c\"d"],"count":3}"#
        );
    }

    #[test]
    fn test_format_empty_response() {
        assert_eq!(
            format_response(&[]).unwrap(),
            r#"{"arguments":[],"count":0}"#
        );
    }

    #[test]
    fn test_count_matches_arguments() {
        let args: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        let json: serde_json::Value = serde_json::from_str(&format_response(&args).unwrap()).unwrap();
        assert_eq!(json["count"], 5);
        assert_eq!(json["arguments"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_format_error() {
        let msg = format_error(&DelimiterError::OutOfRange {
            name: "end",
            value: 9,
            len: 3,
        });
        assert_eq!(msg, "ERROR: end 9 is out of range for input of length 3");
    }
}
