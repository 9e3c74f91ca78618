//! Environment-driven server configuration.

use thiserror::Error;

use crate::services::loader::LoadStrategy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where quiz files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Directory(String),
    Http(String),
}

impl SourceLocation {
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is a local directory.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Http(value.to_string())
        } else {
            Self::Directory(value.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub source: SourceLocation,
    pub strategy: LoadStrategy,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST / PORT: listen address (default 0.0.0.0:3000)
    /// - QUIZ_SOURCE: directory or http(s) base URL (default "questions")
    /// - QUIZ_INDEX: index file name; enables multi-file loading
    /// - QUIZ_FILE: single quiz file name (default "questions.txt")
    /// - QUIZ_SEED: shuffle seed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 3000,
        };

        let source =
            SourceLocation::parse(&lookup("QUIZ_SOURCE").unwrap_or_else(|| "questions".to_string()));

        let strategy = match lookup("QUIZ_INDEX") {
            Some(index) => LoadStrategy::Indexed { index },
            None => LoadStrategy::Single {
                file: lookup("QUIZ_FILE").unwrap_or_else(|| "questions.txt".to_string()),
            },
        };

        let seed = lookup("QUIZ_SEED")
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Invalid { name: "QUIZ_SEED", value })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            source,
            strategy,
            seed,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.source, SourceLocation::Directory("questions".to_string()));
        assert_eq!(
            config.strategy,
            LoadStrategy::Single {
                file: "questions.txt".to_string()
            }
        );
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_index_selects_indexed_strategy() {
        let config = config(&[("QUIZ_INDEX", "topic.txt"), ("QUIZ_FILE", "ignored.txt")]).unwrap();
        assert_eq!(
            config.strategy,
            LoadStrategy::Indexed {
                index: "topic.txt".to_string()
            }
        );
    }

    #[test]
    fn test_http_source() {
        let config = config(&[("QUIZ_SOURCE", "https://example.com/questions")]).unwrap();
        assert_eq!(
            config.source,
            SourceLocation::Http("https://example.com/questions".to_string())
        );
    }

    #[test]
    fn test_seed_and_port() {
        let config = config(&[("QUIZ_SEED", "42"), ("PORT", "8080"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config(&[("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid {
                name: "PORT",
                value: "http".to_string()
            }
        );
        assert!(config(&[("QUIZ_SEED", "-1")]).is_err());
    }
}
