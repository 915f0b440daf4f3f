use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::{
    LocaleMap,
    LocaleTable,
};

/// Suffix appended to a locale id when building resource paths.
pub const DEFAULT_EXTENSION: &str = ".lang";

/// Base path for language resources.
pub const DEFAULT_LOCATION: &str = "lang/";

/// Locale used when nothing else names one.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "langs[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Partial options accepted by `init` and `process_config`.
///
/// Every field left as `None` keeps the previous (or default) value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LangOptions {
    pub extension: Option<String>,
    pub location: Option<String>,
    pub langs: Option<Vec<String>>,
    pub locale: Option<String>,
    /// Per-locale data that always wins over preloaded and fetched data.
    #[serde(rename = "override")]
    pub overrides: Option<LocaleMap>,
    /// Per-locale seed data, lowest precedence.
    pub preloaded: Option<LocaleMap>,
}

impl LangOptions {
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_langs<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.langs = Some(langs.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Add override data for one locale.
    #[must_use]
    pub fn with_override(mut self, locale: impl Into<String>, table: LocaleTable) -> Self {
        self.overrides.get_or_insert_with(LocaleMap::new).insert(locale.into(), table);
        self
    }

    /// Add preloaded data for one locale.
    #[must_use]
    pub fn with_preloaded(mut self, locale: impl Into<String>, table: LocaleTable) -> Self {
        self.preloaded.get_or_insert_with(LocaleMap::new).insert(locale.into(), table);
        self
    }

    /// # Errors
    /// - Empty locale identifier in `langs`, `locale`, `override` or `preloaded`
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(langs) = &self.langs {
            for (index, lang) in langs.iter().enumerate() {
                if lang.is_empty() {
                    errors.push(ValidationError::new(
                        format!("langs[{index}]"),
                        "Locale identifiers cannot be empty. Example: \"en-US\"",
                    ));
                }
            }
        }

        if let Some(locale) = &self.locale
            && locale.is_empty()
        {
            errors.push(ValidationError::new(
                "locale",
                "The locale cannot be empty. Specify a locale (e.g., \"en-US\"), or remove this field",
            ));
        }

        for (field, map) in [("override", &self.overrides), ("preloaded", &self.preloaded)] {
            if map.as_ref().is_some_and(|m| m.contains_key("")) {
                errors.push(ValidationError::new(
                    field,
                    "Locale identifiers cannot be empty. Example: {\"en-US\": {\"key\": \"value\"}}",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Resolved store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LangConfig {
    pub extension: String,
    /// Always ends with `/`.
    pub location: String,
    pub langs: Vec<String>,
    pub locale: Option<String>,
    #[serde(rename = "override")]
    pub overrides: LocaleMap,
    pub preloaded: LocaleMap,
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            langs: vec![DEFAULT_LOCALE.to_string()],
            locale: None,
            overrides: LocaleMap::new(),
            preloaded: LocaleMap::new(),
        }
    }
}

/// Append a trailing `/` unless one is already present.
#[must_use]
fn normalize_location(location: &str) -> String {
    if location.ends_with('/') { location.to_string() } else { format!("{location}/") }
}

impl LangConfig {
    /// Build a new config with `options` laid over `self`.
    ///
    /// Fields are replaced wholesale; maps are not deep-merged.
    #[must_use]
    pub fn merge(&self, options: &LangOptions) -> Self {
        let location = options.location.as_deref().unwrap_or(&self.location);

        Self {
            extension: options.extension.clone().unwrap_or_else(|| self.extension.clone()),
            location: normalize_location(location),
            langs: options.langs.clone().unwrap_or_else(|| self.langs.clone()),
            locale: options.locale.clone().or_else(|| self.locale.clone()),
            overrides: options.overrides.clone().unwrap_or_else(|| self.overrides.clone()),
            preloaded: options.preloaded.clone().unwrap_or_else(|| self.preloaded.clone()),
        }
    }

    /// The locale to activate: an explicit non-empty `locale`, else the first
    /// of `langs`, else [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn active_locale(&self) -> &str {
        self.locale
            .as_deref()
            .filter(|locale| !locale.is_empty())
            .or_else(|| self.langs.first().map(String::as_str))
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// Override data for `locale`, if any.
    #[must_use]
    pub fn override_for(&self, locale: &str) -> Option<&LocaleTable> {
        self.overrides.get(locale)
    }

    /// Resource path for `locale`: `location + locale + extension`.
    #[must_use]
    pub fn resource_path(&self, locale: &str) -> String {
        format!("{}{locale}{}", self.location, self.extension)
    }

    /// Per-locale seed tables: preloaded fields first, override fields on top.
    ///
    /// Locales come out in preloaded order, then override-only locales in
    /// override order.
    #[must_use]
    pub fn seed_tables(&self) -> LocaleMap {
        let mut seeds = LocaleMap::new();
        for (locale, table) in self.preloaded.iter().chain(&self.overrides) {
            seeds
                .entry(locale.clone())
                .or_default()
                .extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        seeds
    }
}
