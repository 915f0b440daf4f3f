//! The locale store: configuration, language loading and key resolution.

use std::collections::{
    HashMap,
    HashSet,
};
use std::sync::LazyLock;

use tokio::sync::Mutex;

use crate::config::{
    LangConfig,
    LangOptions,
};
use crate::fetch::{
    Fetch,
    FileFetcher,
};
use crate::interpolate::{
    Args,
    interpolate,
};
use crate::parser::parse;
use crate::types::{
    LangSource,
    LocaleTable,
    is_present,
};

/// Process-wide default store, reading language files from disk.
static SHARED: LazyLock<Mutex<LangStore<FileFetcher>>> =
    LazyLock::new(|| Mutex::new(LangStore::new(FileFetcher)));

/// The process-wide default store.
///
/// Independent stores are built with [`LangStore::new`].
#[must_use]
pub fn shared() -> &'static Mutex<LangStore<FileFetcher>> {
    &SHARED
}

/// Locale tables plus the configuration that feeds them.
///
/// Not internally synchronised: wrap in a lock to share between tasks.
#[derive(Debug)]
pub struct LangStore<F> {
    /// Language resource transport
    fetcher: F,
    /// Current resolved configuration
    config: LangConfig,
    /// Locale id to table
    languages: HashMap<String, LocaleTable>,
    /// Locale ids in the order their tables were created
    order: Vec<String>,
    /// Locales that completed at least one load
    loaded: HashSet<String>,
    /// Active locale
    locale: String,
}

impl<F: Fetch> LangStore<F> {
    /// Create a store with the default configuration.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, &LangOptions::default())
    }

    /// Create a store and run `options` through [`Self::process_config`].
    ///
    /// No I/O happens here; call [`Self::init`] or [`Self::set_current`] to
    /// load the active locale.
    #[must_use]
    pub fn with_options(fetcher: F, options: &LangOptions) -> Self {
        let config = LangConfig::default();
        let locale = config.active_locale().to_string();
        let mut store = Self {
            fetcher,
            config,
            languages: HashMap::new(),
            order: Vec::new(),
            loaded: HashSet::new(),
            locale,
        };
        store.process_config(options);
        store
    }

    /// Merge `options` over the current config and re-apply configured
    /// `preloaded`/`override` data.
    pub fn process_config(&mut self, options: &LangOptions) {
        self.config = self.config.merge(options);
        tracing::debug!(
            location = %self.config.location,
            extension = %self.config.extension,
            "Processing configuration"
        );

        for (locale, seed) in self.config.seed_tables() {
            self.apply_language(&locale, seed);
        }

        self.locale = self.config.active_locale().to_string();
    }

    /// Merge `lang` into the table for `locale`, then re-apply the configured
    /// override so it always wins. Marks `locale` as loaded.
    pub fn apply_language(&mut self, locale: &str, lang: LocaleTable) -> &LocaleTable {
        tracing::debug!(locale, keys = lang.len(), "Applying language");

        self.loaded.insert(locale.to_string());

        let Self { config, languages, order, .. } = self;
        let table = table_entry(languages, order, locale);
        table.extend(lang);
        if let Some(overrides) = config.override_for(locale) {
            table.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        table
    }

    /// Add language data from text or a table and register `locale` in `langs`.
    ///
    /// `langs` is appended to even if `locale` is already listed.
    pub fn add_language(&mut self, locale: &str, lang: impl Into<LangSource>) -> &LocaleTable {
        let lang = lang.into().into_table();

        self.config.langs.push(locale.to_string());
        self.apply_language(locale, lang)
    }

    /// Load the table for `locale`.
    ///
    /// With `use_cache`, an already loaded locale is returned without I/O.
    /// Otherwise the resource at `location + locale + extension` is fetched and
    /// merged. Fetch failures are logged and degrade to override-only data.
    pub async fn load_lang(&mut self, locale: &str, use_cache: bool) -> &LocaleTable {
        if use_cache && self.loaded.contains(locale) {
            tracing::debug!(locale, "Language served from cache");
            return self.table_mut(locale);
        }

        let path = self.config.resource_path(locale);
        tracing::debug!(locale, path, "Fetching language");

        let lang = match self.fetcher.fetch_data(&path).await {
            Ok(text) => parse(&text),
            Err(err) => {
                tracing::warn!(locale, path, %err, "Failed to fetch language, using overrides only");
                LocaleTable::new()
            }
        };

        self.apply_language(locale, lang)
    }

    /// Load `locale` if needed and make it the active locale.
    pub async fn set_current(&mut self, locale: &str) -> &LocaleTable {
        if !self.loaded.contains(locale) {
            self.load_lang(locale, true).await;
        }

        self.locale = locale.to_string();
        self.table_mut(locale)
    }

    /// Apply `options` and activate the resulting locale.
    pub async fn init(&mut self, options: &LangOptions) -> &LocaleTable {
        self.process_config(options);

        let locale = self.locale.clone();
        self.set_current(&locale).await
    }

    /// Table entry for `locale`, created empty on first reference.
    fn table_mut(&mut self, locale: &str) -> &mut LocaleTable {
        table_entry(&mut self.languages, &mut self.order, locale)
    }
}

/// Get or create the table for `locale`, recording creation order.
fn table_entry<'a>(
    languages: &'a mut HashMap<String, LocaleTable>,
    order: &mut Vec<String>,
    locale: &str,
) -> &'a mut LocaleTable {
    if !languages.contains_key(locale) {
        order.push(locale.to_string());
    }
    languages.entry(locale.to_string()).or_default()
}

impl<F> LangStore<F> {
    /// Look up `key` in `locale` (the active locale if `None`), falling back
    /// to every known locale in creation order.
    ///
    /// Empty values count as missing.
    #[must_use]
    pub fn get_value(&self, key: &str, locale: Option<&str>) -> Option<&str> {
        let locale = locale.unwrap_or(&self.locale);
        let direct = self.languages.get(locale).and_then(|table| table.get(key));
        if is_present(direct) {
            return direct.map(String::as_str);
        }

        self.order
            .iter()
            .filter_map(|lang| self.languages.get(lang))
            .map(|table| table.get(key))
            .find(|value| is_present(*value))
            .flatten()
            .map(String::as_str)
    }

    /// Resolve `key` in the active locale and substitute `args` into its tokens.
    ///
    /// Without `args`, or with falsy args, the value is returned as stored.
    #[must_use]
    pub fn get(&self, key: &str, args: Option<&Args>) -> Option<String> {
        let value = self.get_value(key, None)?;

        Some(match args.filter(|args| !args.is_falsy()) {
            Some(args) => interpolate(value, args),
            None => value.to_string(),
        })
    }

    /// Write `value` under `key` in the active locale's table.
    pub fn put(&mut self, key: &str, value: impl Into<String>) -> &str {
        let table = table_entry(&mut self.languages, &mut self.order, &self.locale);
        let slot = table.entry(key.to_string()).or_default();
        *slot = value.into();
        slot
    }

    /// Active locale id.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The active locale's table, if it exists yet.
    #[must_use]
    pub fn current(&self) -> Option<&LocaleTable> {
        self.languages.get(&self.locale)
    }

    /// Table for `locale`, if it exists.
    #[must_use]
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        self.languages.get(locale)
    }

    /// Configured locale list.
    #[must_use]
    pub fn langs(&self) -> &[String] {
        &self.config.langs
    }

    /// Whether `locale` completed at least one load.
    #[must_use]
    pub fn is_loaded(&self, locale: &str) -> bool {
        self.loaded.contains(locale)
    }

    /// Current resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &LangConfig {
        &self.config
    }
}
