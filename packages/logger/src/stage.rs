//! Deployment stages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment stage selecting output format and minimum level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Human-readable lines, debug and above
    #[default]
    Local,
    /// JSON lines, debug and above
    Dev,
    /// JSON lines, errors only
    Prod,
}

impl Stage {
    /// Stable lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Local => "local",
            Stage::Dev => "dev",
            Stage::Prod => "prod",
        }
    }

    /// Least severe level emitted by default
    #[must_use]
    pub fn min_level(&self) -> log::LevelFilter {
        match self {
            Stage::Local | Stage::Dev => log::LevelFilter::Debug,
            Stage::Prod => log::LevelFilter::Error,
        }
    }

    /// Whether records are written as JSON
    #[must_use]
    pub fn is_json(&self) -> bool {
        !matches!(self, Stage::Local)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown stage name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage {0:?}, expected one of: local, dev, prod")]
pub struct ParseStageError(pub String);

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Stage::Local),
            "dev" => Ok(Stage::Dev),
            "prod" => Ok(Stage::Prod),
            _ => Err(ParseStageError(s.to_string())),
        }
    }
}
