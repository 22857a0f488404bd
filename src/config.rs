//! Configuration loading and merging.

use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::delimiter::{ArgumentDelimiter, DelimiterError};

/// Delimiters used when no config sets any.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '\t'];

/// Quote pairs used when no config sets any.
pub const DEFAULT_QUOTE_PAIRS: &[(char, char)] = &[('"', '"'), ('\'', '\'')];

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("'{value}' must be exactly one character")]
    NotAChar { value: String },

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid delimiter configuration: {0}")]
    Delimiter(#[from] DelimiterError),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Argument delimiters, one character each.
    pub delimiters: Option<Vec<String>>,

    /// Opening quote -> closing quote, one character each.
    pub quote_pairs: Option<BTreeMap<String, String>>,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
    /// Regex patterns masked in logged input.
    pub redact: Vec<String>,
}

/// Configuration with a validated delimiter and compiled patterns.
#[derive(Debug)]
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Delimiters and quote pairs ready for splitting.
    pub delimiter: ArgumentDelimiter,
    /// Compiled audit redaction patterns.
    pub redact_patterns: Vec<Regex>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        match Self::user_config_path() {
            Some(path) if path.exists() => Ok(Some(Self::parse(&fs::read_to_string(&path)?)?)),
            _ => Ok(None),
        }
    }

    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".arg-delimiter.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(Self::parse(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects ARG_DELIMITER_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ARG_DELIMITER_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("arg-delimiter/config.toml"))
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Config) {
        if other.delimiters.is_some() {
            self.delimiters = other.delimiters;
        }
        if other.quote_pairs.is_some() {
            self.quote_pairs = other.quote_pairs;
        }

        self.audit.redact.extend(other.audit.redact);
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Validate delimiters and quote pairs and compile redaction patterns.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let mut delimiter = ArgumentDelimiter::new();

        match &self.delimiters {
            Some(delimiters) => {
                let chars = delimiters
                    .iter()
                    .map(|s| single_char(s))
                    .collect::<Result<Vec<_>, _>>()?;
                delimiter.extend_delimiters(chars)?;
            }
            None => delimiter.extend_delimiters(DEFAULT_DELIMITERS.iter().copied())?,
        }

        match &self.quote_pairs {
            Some(pairs) => {
                for (open, close) in pairs {
                    delimiter.add_quote_pair(single_char(open)?, single_char(close)?)?;
                }
            }
            None => {
                for &(open, close) in DEFAULT_QUOTE_PAIRS {
                    delimiter.add_quote_pair(open, close)?;
                }
            }
        }

        let redact_patterns = self
            .audit
            .redact
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::Regex {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledConfig {
            raw: self,
            delimiter,
            redact_patterns,
        })
    }
}

fn single_char(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::NotAChar {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::Role;

    #[test]
    fn test_default_config() {
        let compiled = Config::default().compile().unwrap();
        assert!(compiled.delimiter.delimiters().set_eq([' ', '\t']));
        assert_eq!(compiled.delimiter.lookup_close_quote('"'), Some('"'));
        assert_eq!(compiled.delimiter.lookup_close_quote('\''), Some('\''));
        assert!(!compiled.raw.audit.enabled);
    }

    #[test]
    fn test_parse_config() {
        let config = Config::parse(
            r#"
delimiters = [",", ";"]

[quote_pairs]
"[" = "]"
"'" = "'"
"#,
        )
        .unwrap();
        let compiled = config.compile().unwrap();
        assert!(compiled.delimiter.delimiters().set_eq([',', ';']));
        assert_eq!(compiled.delimiter.quote_pairs().len(), 2);
        assert_eq!(compiled.delimiter.split("[a,b];c"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_empty_quote_pairs_disable_defaults() {
        let config = Config::parse("[quote_pairs]\n").unwrap();
        let compiled = config.compile().unwrap();
        assert!(compiled.delimiter.quote_pairs().is_empty());
    }

    #[test]
    fn test_multi_char_rejected() {
        let config = Config {
            delimiters: Some(vec![",,".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            config.compile(),
            Err(ConfigError::NotAChar { value }) if value == ",,"
        ));

        let config = Config {
            delimiters: Some(vec![String::new()]),
            ..Default::default()
        };
        assert!(config.compile().is_err());
    }

    #[test]
    fn test_role_conflict_rejected() {
        let config = Config::parse(
            r#"
delimiters = ["'"]
"#,
        )
        .unwrap();
        match config.compile() {
            Err(ConfigError::Delimiter(DelimiterError::RoleConflict { ch, role })) => {
                assert_eq!(ch, '\'');
                assert_eq!(role, Role::Delimiter);
            }
            other => panic!("expected role conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_regex() {
        let config = Config {
            audit: AuditConfig {
                redact: vec!["[invalid".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.compile(), Err(ConfigError::Regex { .. })));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = Config::parse(
            r#"
delimiters = [","]

[audit]
redact = ["secret"]
"#,
        )
        .unwrap();
        let project = Config::parse(
            r#"
delimiters = [";"]

[audit]
enabled = true
path = "/tmp/audit.log"
redact = ["token"]
"#,
        )
        .unwrap();
        base.merge(project);
        assert_eq!(base.delimiters, Some(vec![";".to_string()]));
        assert!(base.quote_pairs.is_none());
        assert!(base.audit.enabled);
        assert_eq!(base.audit.path.as_deref(), Some("/tmp/audit.log"));
        assert_eq!(base.audit.redact, vec!["secret", "token"]);
    }

    #[test]
    fn test_load_project_config() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join(".arg-delimiter.toml"), "delimiters = [\"|\"]\n").unwrap();
        let config = Config::load_project_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.delimiters, Some(vec!["|".to_string()]));

        let empty = tempfile::TempDir::new().unwrap();
        assert!(Config::load_project_config(empty.path()).unwrap().is_none());
    }
}
