//! Options file loader.

use std::path::Path;

use super::{
    ConfigError,
    LangOptions,
};

impl LangOptions {
    /// Read options from a JSON file and validate them.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading options from: {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&content)?;
        options.validate().map_err(ConfigError::ValidationErrors)?;

        Ok(options)
    }
}
