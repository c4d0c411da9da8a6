//! Error levels
//!
//! A [`Level`] classifies an error and, when an error is rendered for a log
//! sink, selects how much of it is exposed. Variants are ordered from the most
//! verbose to the most severe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error classification and rendering verbosity
///
/// Discriminants are fed into error identities and must never change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Everything, including the whole chain and the backtrace
    HighDebug = 0,
    /// Developer detail: origin and chain depth
    Debug = 1,
    /// Informational
    Info = 2,
    /// Recoverable problem
    Warn = 3,
    /// Failed operation
    #[default]
    Error = 4,
    /// The process cannot continue
    Fatal = 5,
}

impl Level {
    /// All levels, most verbose first
    pub const ALL: [Level; 6] = [
        Level::HighDebug,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Stable lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::HighDebug => "highdebug",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Matching `log` crate level
    #[must_use]
    pub fn to_log_level(&self) -> log::Level {
        match self {
            Level::HighDebug => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Fatal => log::Level::Error,
        }
    }

    /// True when rendering at this level should include developer detail
    #[must_use]
    pub fn is_debug(&self) -> bool {
        *self <= Level::Debug
    }

    pub(crate) fn tag(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown level name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Level::ALL
            .into_iter()
            .find(|lvl| lvl.as_str() == lower)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_tags_are_pinned() {
        let tags: Vec<u8> = Level::ALL.iter().map(Level::tag).collect();
        assert_eq!(tags, [0, 1, 2, 3, 4, 5]);
    }
}
