//! Error constructors and accessors

use super::types::{BoxError, Cause, Error, ErrorInner};
use crate::identity::{Digest, Identity};
use crate::lang::{self, Messages};
use crate::levels::Level;
use std::panic::Location;
use std::sync::Arc;

/// Builder for [`Error`]
///
/// The identity is computed once, in [`ErrorBuilder::build`].
#[must_use]
pub struct ErrorBuilder {
    cause: Cause,
    level: Level,
    code: Option<u32>,
    hint: Option<String>,
    messages: Messages,
    previous: Option<Error>,
    origin: &'static Location<'static>,
}

impl ErrorBuilder {
    /// Set the level
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set a machine-readable code
    pub fn code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Set a remediation hint
    pub fn hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Register the message for a language code
    pub fn msg<L: Into<String>, S: Into<String>>(mut self, lang: L, text: S) -> Self {
        self.messages.insert(lang.into(), text.into());
        self
    }

    /// Link the error this one supersedes
    pub fn previous(mut self, previous: Error) -> Self {
        self.previous = Some(previous);
        self
    }

    /// Finish the node
    #[must_use]
    pub fn build(self) -> Error {
        let identity = content_identity(
            &self.cause.to_string(),
            self.level,
            self.code,
            self.hint.as_deref(),
            &self.messages,
        );

        Error {
            inner: Arc::new(ErrorInner {
                cause: self.cause,
                level: self.level,
                code: self.code,
                hint: self.hint,
                messages: self.messages,
                identity,
                previous: self.previous,
                origin: self.origin,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new_unresolved(),
            }),
        }
    }
}

/// Hash the content fields of one node. The chain is never part of it.
pub(super) fn content_identity(
    cause: &str,
    level: Level,
    code: Option<u32>,
    hint: Option<&str>,
    messages: &Messages,
) -> Identity {
    let mut id = Identity::new();
    id.absorb_field("cause", cause.as_bytes());
    id.absorb_field("level", &[level.tag()]);
    if let Some(code) = code {
        id.absorb_field("code", &code.to_be_bytes());
    }
    if let Some(hint) = hint {
        id.absorb_field("hint", hint.as_bytes());
    }
    for (lang, text) in messages {
        id.absorb_field("lang", lang.as_bytes());
        id.absorb_field("msg", text.as_bytes());
    }
    id
}

impl Error {
    /// Start building an error around a cause
    #[track_caller]
    pub fn builder<E: Into<BoxError>>(cause: E) -> ErrorBuilder {
        Self::builder_from_cause(Arc::from(cause.into()))
    }

    #[track_caller]
    pub(super) fn builder_from_cause(cause: Cause) -> ErrorBuilder {
        ErrorBuilder {
            cause,
            level: Level::default(),
            code: None,
            hint: None,
            messages: Messages::new(),
            previous: None,
            origin: Location::caller(),
        }
    }

    /// Create an error with default level and no messages
    #[track_caller]
    #[must_use]
    pub fn new<E: Into<BoxError>>(cause: E) -> Self {
        Self::builder(cause).build()
    }

    /// Create a new head for the chain, superseding `self`
    #[track_caller]
    #[must_use]
    pub fn wrap<E: Into<BoxError>>(self, cause: E) -> Self {
        Self::builder(cause).previous(self).build()
    }

    /// Get the underlying cause
    #[must_use]
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.inner.cause.as_ref()
    }

    /// Get the level
    #[must_use]
    pub fn level(&self) -> Level {
        self.inner.level
    }

    /// Get the code if any
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        self.inner.code
    }

    /// Get the hint if any
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.inner.hint.as_deref()
    }

    /// All registered translations
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.inner.messages
    }

    /// Message for a language code
    ///
    /// Falls back to the default language, then to the cause description.
    #[must_use]
    pub fn msg(&self, lang: &str) -> String {
        match lang::lookup(&self.inner.messages, lang) {
            Some(text) => text.to_string(),
            None => self.inner.cause.to_string(),
        }
    }

    /// Content hash accumulator
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.inner.identity
    }

    /// Finalized content hash
    #[must_use]
    pub fn digest(&self) -> Digest {
        self.inner.identity.digest()
    }

    /// The error this one supersedes
    #[must_use]
    pub fn previous(&self) -> Option<&Error> {
        self.inner.previous.as_ref()
    }

    /// Number of nodes in the chain, this one included
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Source location where the error was built
    #[must_use]
    pub fn origin(&self) -> &'static Location<'static> {
        self.inner.origin
    }

    /// Resolved backtrace of the point where the error was built
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> backtrace::Backtrace {
        let mut bt = self.inner.backtrace.clone();
        bt.resolve();
        bt
    }
}
