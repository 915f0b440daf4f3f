//! Store configuration: options, defaults and merging.
/// Options file loader
mod loader;
/// Option and resolved configuration types
mod types;

pub use types::{
    ConfigError,
    DEFAULT_EXTENSION,
    DEFAULT_LOCALE,
    DEFAULT_LOCATION,
    LangConfig,
    LangOptions,
    ValidationError,
};
