//! Core structured error types

use crate::identity::Identity;
use crate::lang::Messages;
use crate::levels::Level;
use std::panic::Location;
use std::sync::Arc;

/// Boxed error accepted as a cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared cause of a structured error
pub type Cause = Arc<dyn std::error::Error + Send + Sync>;

/// Structured error: one node of an error chain
///
/// Cloning copies the handle only. Clones share the node and every older
/// node behind it.
#[derive(Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

pub(super) struct ErrorInner {
    /// Underlying failure
    pub cause: Cause,
    /// Classification
    pub level: Level,
    /// Optional machine-readable code
    pub code: Option<u32>,
    /// Optional remediation hint
    pub hint: Option<String>,
    /// Localized texts
    pub messages: Messages,
    /// Hash of this node's own content
    pub identity: Identity,
    /// The error this one supersedes
    pub previous: Option<Error>,
    /// Where the error was built
    pub origin: &'static Location<'static>,
    /// Backtrace captured at error creation
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

impl Drop for ErrorInner {
    fn drop(&mut self) {
        // Unlink uniquely owned ancestors one by one instead of recursing
        let mut next = self.previous.take();
        while let Some(err) = next {
            match Arc::try_unwrap(err.inner) {
                Ok(mut inner) => next = inner.previous.take(),
                Err(_) => break,
            }
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
