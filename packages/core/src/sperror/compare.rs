//! Error comparison
//!
//! Three independent questions can be asked about a structured error:
//!
//! - [`Error::is`]: does this node's cause, or anything its cause wraps,
//!   equal the target?
//! - [`Error::deep_is`]: does any node in the chain answer `is` positively?
//! - [`Error::is_sp`]: do two errors carry the same content digest?
//!
//! A target for `is`/`deep_is` is any error type with `PartialEq`. The cause
//! is unwrapped through [`std::error::Error::source`] and every link is
//! downcast to the target type before comparing. A structured error met on
//! the way is entered through its cause, never through its own chain.

use super::types::Error;
use crate::identity::same_digest;

type DynError = dyn std::error::Error + 'static;

fn cause_matches<E>(cause: &DynError, target: &E) -> bool
where
    E: std::error::Error + PartialEq + 'static,
{
    let mut current = Some(cause);
    while let Some(err) = current {
        if err.downcast_ref::<E>().is_some_and(|err| err == target) {
            return true;
        }
        current = match err.downcast_ref::<Error>() {
            Some(sp) => Some(sp.cause()),
            None => err.source(),
        };
    }
    false
}

impl Error {
    /// Match the target against this node's cause only
    ///
    /// Older nodes of the chain are not consulted.
    #[must_use]
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: std::error::Error + PartialEq + 'static,
    {
        cause_matches(self.cause(), target)
    }

    /// Match the target against every node of the chain, newest first
    ///
    /// Works on a private cursor, so `self` is left as it was.
    #[must_use]
    pub fn deep_is<E>(&self, target: &E) -> bool
    where
        E: std::error::Error + PartialEq + 'static,
    {
        let mut chain = self.chain();
        while let Some(head) = chain.pop() {
            if head.is(target) {
                return true;
            }
        }
        false
    }

    /// Compare content digests; causes and chains are ignored
    #[must_use]
    pub fn is_sp(&self, other: &Error) -> bool {
        same_digest(self.identity(), other.identity())
    }
}

/// [`Error::is`] tolerating an absent error
#[must_use]
pub fn is<E>(err: Option<&Error>, target: &E) -> bool
where
    E: std::error::Error + PartialEq + 'static,
{
    err.is_some_and(|err| err.is(target))
}

/// [`Error::deep_is`] tolerating an absent error
#[must_use]
pub fn deep_is<E>(err: Option<&Error>, target: &E) -> bool
where
    E: std::error::Error + PartialEq + 'static,
{
    err.is_some_and(|err| err.deep_is(target))
}

/// [`Error::is_sp`] tolerating absent errors on either side
#[must_use]
pub fn is_sp(a: Option<&Error>, b: Option<&Error>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.is_sp(b),
        _ => false,
    }
}
