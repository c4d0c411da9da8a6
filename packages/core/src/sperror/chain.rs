//! Destructive traversal over an error chain

use super::types::Error;
use std::iter::FusedIterator;

/// Cursor over an error chain, newest node first
///
/// A chain holds a copy of a head handle. Popping advances that copy only;
/// the `Error` it was taken from keeps its own link untouched.
#[derive(Debug, Clone)]
pub struct Chain {
    next: Option<Error>,
}

impl Chain {
    /// Return the current node and step to the one it supersedes
    ///
    /// Returns `None` once the root has been popped, and keeps doing so.
    pub fn pop(&mut self) -> Option<Error> {
        let head = self.next.take()?;
        self.next = head.previous().cloned();
        Some(head)
    }

    /// Node the next `pop` would return
    #[must_use]
    pub fn peek(&self) -> Option<&Error> {
        self.next.as_ref()
    }

    /// True once every node has been popped
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for Chain {
    type Item = Error;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}

impl FusedIterator for Chain {}

impl From<Error> for Chain {
    fn from(head: Error) -> Self {
        Self { next: Some(head) }
    }
}

impl Error {
    /// Shallow copy of this handle as a chain cursor
    #[must_use]
    pub fn chain(&self) -> Chain {
        Chain::from(self.clone())
    }
}
