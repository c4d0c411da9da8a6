//! Language codes for localized error messages

use std::collections::BTreeMap;

/// English
pub const EN: &str = "en";

/// Russian
pub const RU: &str = "ru";

/// Language used when a requested translation is missing
pub const DEFAULT_LANG: &str = EN;

/// Localized texts keyed by language code
pub type Messages = BTreeMap<String, String>;

/// Pick the text for `lang`, falling back to [`DEFAULT_LANG`]
#[must_use]
pub fn lookup<'a>(messages: &'a Messages, lang: &str) -> Option<&'a str> {
    messages
        .get(lang)
        .or_else(|| messages.get(DEFAULT_LANG))
        .map(String::as_str)
}
