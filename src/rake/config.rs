//! Layered configuration
//!
//! `defaults/rakedoc.default.toml` is embedded into the binary so documented defaults and
//! runtime behavior stay in sync. User files and command-line overrides are layered on
//! top through [`Loader`] before deserializing into [`RakedocConfig`].

use crate::rake::parser::ScanOptions;
use crate::rake::processor::{ProcessingError, ProcessingSpec};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/rakedoc.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct RakedocConfig {
    pub scan: ScanOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default `<stage>-<format>` specification
    pub format: String,
    pub label_width: usize,
}

impl RakedocConfig {
    /// The configured output format, parsed
    pub fn processing_spec(&self) -> Result<ProcessingSpec, ProcessingError> {
        ProcessingSpec::from_string(&self.output.format)
    }
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

    /// Layer an optional configuration file, ignored if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, such as a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RakedocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<RakedocConfig, ConfigError> {
    Loader::new().build()
}
