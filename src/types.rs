//! Core types used throughout the crate.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Flat key/value translation table for a single locale.
///
/// Keys are case-sensitive and unordered.
pub type LocaleTable = HashMap<String, String>;

/// Locale identifier (e.g. `"en-US"`) to partial table, as supplied by the
/// `override` and `preloaded` options. Keeps configuration order, which
/// decides the order locales are created in and so the fallback order.
pub type LocaleMap = IndexMap<String, LocaleTable>;

/// Data handed to [`crate::store::LangStore::add_language`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangSource {
    /// Raw language-file text, parsed before use.
    Text(String),
    /// An already structured partial table.
    Table(LocaleTable),
}

impl LangSource {
    /// Resolve into a table, parsing text input.
    #[must_use]
    pub fn into_table(self) -> LocaleTable {
        match self {
            Self::Text(text) => crate::parser::parse(&text),
            Self::Table(table) => table,
        }
    }
}

impl From<&str> for LangSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LangSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<LocaleTable> for LangSource {
    fn from(table: LocaleTable) -> Self {
        Self::Table(table)
    }
}

/// Returns `true` if `value` counts as a present translation.
///
/// Empty strings are treated as missing so lookups fall through to other locales.
#[must_use]
pub fn is_present(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
