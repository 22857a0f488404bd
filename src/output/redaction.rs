//! Masking of configured patterns before text is logged.

use regex::Regex;

/// Replacement for every redacted match.
pub const REDACTED: &str = "<REDACTED>";

/// Replace every match of `patterns` in `text` with [`REDACTED`].
pub fn redact(text: &str, patterns: &[Regex]) -> String {
    let mut result = text.to_string();

    for re in patterns {
        result = re.replace_all(&result, REDACTED).into_owned();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_matches() {
        let patterns = vec![Regex::new(r"token=\S+").unwrap()];
        let redacted = redact("login token=abc123 user=bob", &patterns);
        assert!(!redacted.contains("abc123"));
        assert_eq!(redacted, "login <REDACTED> user=bob");
    }

    #[test]
    fn test_redact_several_patterns() {
        let patterns = vec![
            Regex::new(r"\d{4}-\d{4}").unwrap(),
            Regex::new(r"(?i)password").unwrap(),
        ];
        let redacted = redact("PASSWORD 1234-5678", &patterns);
        assert_eq!(redacted, "<REDACTED> <REDACTED>");
    }

    #[test]
    fn test_no_patterns() {
        let text = "nothing to hide";
        assert_eq!(redact(text, &[]), text);
    }
}
