// src/config.rs
use crate::domain::author::AuthorNamePolicy;
use std::env;
use thiserror::Error;

pub const LOG_FILTER_VAR: &str = "MAGAZINE_LOG";
pub const AUTHOR_NAME_POLICY_VAR: &str = "AUTHOR_NAME_POLICY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    log_filter: String,
    author_name_policy: AuthorNamePolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            author_name_policy: AuthorNamePolicy::default(),
        }
    }
}

impl ModelConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ModelConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        let author_name_policy = lookup(AUTHOR_NAME_POLICY_VAR)
            .map(|raw| {
                raw.parse::<AuthorNamePolicy>().map_err(|_| {
                    ConfigError::Invalid(format!(
                        "{AUTHOR_NAME_POLICY_VAR} must be 'permissive' or 'non_empty', got '{raw}'"
                    ))
                })
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            log_filter,
            author_name_policy,
        })
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    #[must_use]
    pub const fn author_name_policy(&self) -> AuthorNamePolicy {
        self.author_name_policy
    }

    #[must_use]
    pub const fn with_author_name_policy(mut self, policy: AuthorNamePolicy) -> Self {
        self.author_name_policy = policy;
        self
    }
}
