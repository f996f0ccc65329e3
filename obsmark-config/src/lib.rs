//! Shared configuration loader for the Observable Markdown toolchain.
//!
//! `defaults/obsmark.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`ObsmarkConfig`]. Only host-surface knobs live here: the detector's
//! pattern table and the suggestion catalog are fixed data and deliberately
//! not configurable.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/obsmark.default.toml");

/// Top-level configuration consumed by the Observable Markdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ObsmarkConfig {
    pub lsp: LspConfig,
    pub template: TemplateConfig,
}

/// Toggles for the language server's protocol surfaces.
#[derive(Debug, Clone, Deserialize)]
pub struct LspConfig {
    pub completions: bool,
    pub hover: bool,
}

/// Knobs for the new-document command.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub default_filename: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ObsmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ObsmarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.lsp.completions);
        assert!(config.lsp.hover);
        assert_eq!(config.template.default_filename, "index.md");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("lsp.hover", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.lsp.hover);
        assert!(config.lsp.completions);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/obsmark.toml")
            .build()
            .expect("optional file to be skipped");
        assert_eq!(config.template.default_filename, "index.md");
    }
}
