//! Rendering of structured errors into log fields

use crate::levels::Level;
use crate::sperror::Error;
use std::borrow::Cow;
use std::fmt;

/// Separator between causes in the `chain` field
pub const CHAIN_SEPARATOR: &str = " <- ";

/// One key/value pair handed to a log sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name
    pub key: Cow<'static, str>,
    /// Rendered value
    pub value: String,
}

impl Field {
    /// Create a field from anything displayable
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: fmt::Display,
    {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

/// Fields describing `err` at verbosity `lvl`
///
/// Identity, level and cause are always present. Code and hint appear when
/// set. Origin and chain depth are added at [`Level::Debug`] and below, the
/// full chain and backtrace only at [`Level::HighDebug`].
#[must_use]
pub fn fields(err: &Error, lvl: Level) -> Vec<Field> {
    let mut out = vec![
        Field::new("error_id", err.digest()),
        Field::new("error_level", err.level()),
        Field::new("cause", err.cause()),
    ];

    if let Some(code) = err.code() {
        out.push(Field::new("code", code));
    }
    if let Some(hint) = err.hint() {
        out.push(Field::new("hint", hint));
    }

    if lvl.is_debug() {
        out.push(Field::new("origin", err.origin()));
        out.push(Field::new("depth", err.depth()));
    }

    if lvl == Level::HighDebug {
        let chain: Vec<String> = err.chain().map(|node| node.cause().to_string()).collect();
        out.push(Field::new("chain", chain.join(CHAIN_SEPARATOR)));

        #[cfg(feature = "full-backtrace")]
        out.push(Field::new("backtrace", format!("{:?}", err.backtrace())));
    }

    out
}

/// Look a field up by key
#[must_use]
pub fn find<'a>(fields: &'a [Field], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| field.key == key)
        .map(|field| field.value.as_str())
}
