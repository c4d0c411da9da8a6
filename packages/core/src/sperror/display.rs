//! Display and trait implementations for Error

use super::types::Error;
use crate::lang::{self, DEFAULT_LANG};
use std::fmt;
use std::hash::{Hash, Hasher};

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg(DEFAULT_LANG))?;

        if f.alternate() {
            let mut older = self.previous();
            while let Some(err) = older {
                write!(f, ": {}", err.msg(DEFAULT_LANG))?;
                older = err.previous();
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("id", &self.digest())
            .field("level", &self.level())
            .field("code", &self.code())
            .field("cause", &self.cause())
            .field("origin", &format_args!("{}", self.origin()))
            .field("previous", &self.previous())
            .finish()
    }
}

impl std::error::Error for Error {
    /// The cause, unless `Display` already prints the cause's own text
    ///
    /// Without a registered message the cause is what `Display` shows, so
    /// the cause's source comes next instead. Reporters walking `source()`
    /// then never print the same text twice.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if lang::lookup(self.messages(), DEFAULT_LANG).is_some() {
            Some(self.cause())
        } else {
            self.cause().source()
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.is_sp(other)
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest().hash(state);
    }
}
