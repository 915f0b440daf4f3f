//! lang-store
//!
//! A minimal locale store: flat `key = value` language files, config-level
//! overrides and `{token}` interpolation with fallback across locales.

pub mod config;
pub mod fetch;
pub mod interpolate;
pub mod parser;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::{
    LangConfig,
    LangOptions,
};
pub use fetch::{
    Fetch,
    FetchError,
    FileFetcher,
};
pub use interpolate::Args;
pub use parser::parse;
pub use store::{
    LangStore,
    shared,
};
pub use types::{
    LangSource,
    LocaleTable,
};
