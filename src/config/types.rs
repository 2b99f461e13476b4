//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_handlers, default_requests, default_subchain_from};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
///
/// Every section is optional; an empty file yields the reference chain and
/// the reference request list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Chain layout.
    #[serde(default)]
    pub chain: ChainConfig,
    /// Requests driven by the command-line demo.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

/// Chain layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Handlers in link order; the first entry is the head.
    #[serde(default = "default_handlers")]
    pub handlers: Vec<HandlerSpec>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            handlers: default_handlers(),
        }
    }
}

/// One handler entry.
///
/// Either names a registered `kind` (`"monkey"`, `"squirrel"`, `"dog"`),
/// or gives `name` and `trigger` directly. Explicit fields override the
/// kind's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerSpec {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
    /// Response template, e.g. `"{name}: I'll eat the {request}"`.
    #[serde(default)]
    pub template: Option<String>,
}

impl HandlerSpec {
    /// Entry for a registered kind.
    pub fn kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Entry with an explicit name and trigger.
    pub fn custom(name: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            trigger: Some(trigger.into()),
            ..Self::default()
        }
    }
}

/// Demo driver configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Requests submitted, in order, to every entry point.
    #[serde(default = "default_requests")]
    pub requests: Vec<String>,
    /// Name of the handler used as sub-chain entry; empty to skip.
    #[serde(default = "default_subchain_from")]
    pub subchain_from: Option<String>,
}

impl DemoConfig {
    /// Sub-chain entry name, if one is configured and non-empty.
    pub fn subchain_entry(&self) -> Option<&str> {
        self.subchain_from.as_deref().filter(|name| !name.is_empty())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
            subchain_from: default_subchain_from(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        let kinds: Vec<_> = config
            .chain
            .handlers
            .iter()
            .map(|h| h.kind.as_deref().unwrap())
            .collect();
        assert_eq!(kinds, vec!["monkey", "squirrel", "dog"]);
        assert_eq!(config.demo.requests, vec!["Nut", "Banana", "Cup of coffee"]);
        assert_eq!(config.demo.subchain_from.as_deref(), Some("Squirrel"));
    }

    #[test]
    fn test_parse_custom_chain() {
        let config = Config::parse(
            r#"
[chain]
handlers = [
  { kind = "dog" },
  { name = "Cat", trigger = "Fish", template = "{name} grabs the {request}" },
]

[demo]
requests = ["Fish"]
subchain_from = "Cat"
"#,
        )
        .unwrap();

        assert_eq!(config.chain.handlers[0], HandlerSpec::kind("dog"));
        assert_eq!(
            config.chain.handlers[1],
            HandlerSpec {
                template: Some("{name} grabs the {request}".to_string()),
                ..HandlerSpec::custom("Cat", "Fish")
            }
        );
        assert_eq!(config.demo.requests, vec!["Fish"]);
        assert_eq!(config.demo.subchain_from.as_deref(), Some("Cat"));
    }

    #[test]
    fn test_unknown_handler_field_rejected() {
        let err = Config::parse(
            r#"
[chain]
handlers = [{ kind = "dog", food = "Bone" }]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_subchain_entry_skips() {
        let config = Config::parse("[demo]\nsubchain_from = \"\"\n").unwrap();
        assert_eq!(config.demo.subchain_entry(), None);
        assert_eq!(Config::default().demo.subchain_entry(), Some("Squirrel"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/feedchain.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.toml");
        std::fs::write(&path, "[demo]\nrequests = [\"MeatBall\"]\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.demo.requests, vec!["MeatBall"]);
        assert_eq!(config.chain.handlers.len(), 3);
    }
}
