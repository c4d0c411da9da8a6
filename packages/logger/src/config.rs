//! Logger configuration

use crate::stage::{ParseStageError, Stage};
use lighthouse_core::lang::DEFAULT_LANG;
use serde::Deserialize;

/// Environment variable holding the stage name
pub const STAGE_ENV: &str = "LIGHTHOUSE_STAGE";

/// Environment variable holding the message language code
pub const LANG_ENV: &str = "LIGHTHOUSE_LANG";

/// Environment variable holding an `env_logger` filter directive
pub const FILTER_ENV: &str = "LIGHTHOUSE_LOG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Stage variable holds an unknown name
    #[error("invalid LIGHTHOUSE_STAGE: {0}")]
    Stage(#[from] ParseStageError),

    /// A variable is set but not valid unicode
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Settings for building a [`crate::Logger`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format and default minimum level
    pub stage: Stage,
    /// Language used for error messages
    pub lang: String,
    /// Filter directives overriding the stage minimum, e.g. `"warn"`
    pub filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            stage: Stage::default(),
            lang: DEFAULT_LANG.to_string(),
            filter: None,
        }
    }
}

impl LoggerConfig {
    /// Configuration for a stage with default language and no filter
    #[must_use]
    pub fn for_stage(stage: Stage) -> Self {
        Self {
            stage,
            ..Self::default()
        }
    }

    /// Read settings from the process environment
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Read settings through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let read = |key: &'static str| match lookup(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        };

        let mut config = Self::default();
        if let Some(stage) = read(STAGE_ENV)? {
            config.stage = stage.parse()?;
        }
        if let Some(lang) = read(LANG_ENV)? {
            config.lang = lang;
        }
        config.filter = read(FILTER_ENV)?;
        Ok(config)
    }
}
