//! Shared configuration loader for the rstlite toolchain.
//!
//! `defaults/rstlite.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`RstliteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rstlite.default.toml");

/// Top-level configuration consumed by rstlite applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RstliteConfig {
    pub render: RenderConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Output rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub html: HtmlRenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlRenderConfig {
    /// Single heading level used for every section title.
    pub heading_level: u8,
    /// Class of the wrapping container element.
    pub document_class: String,
}

/// Input format selection.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Formatter used when the text does not pick one itself.
    pub default_format: String,
}

/// Diagnostic output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub label_width: usize,
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
    pub fn build(self) -> Result<RstliteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RstliteConfig, ConfigError> {
    Loader::new().build()
}
