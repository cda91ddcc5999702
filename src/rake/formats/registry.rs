//! Format registry for document serialization
//!
//! Each output format implements [`Formatter`] and is looked up by name. The tree stage of
//! the processor serializes a scanned [`Document`] through [`FormatRegistry::serialize`].

use super::treeviz::DEFAULT_LABEL_WIDTH;
use super::{JsonFormatter, TreevizFormatter, YamlFormatter};
use crate::rake::ast::Document;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders a scanned document
pub trait Formatter: Send + Sync {
    /// The name the format is selected by, the `<format>` of `tree-<format>`
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Formatters by name, listed in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// The built-in formats, treeviz labels cut at `label_width` characters
    pub fn with_label_width(label_width: usize) -> Self {
        let mut registry = Self::new();
        registry.register(TreevizFormatter::new(label_width));
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_label_width(DEFAULT_LABEL_WIDTH)
    }

    /// Register a formatter, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        debug!(format, file = %doc.file, tasks = doc.task_count(), "serializing document");
        formatter.serialize(doc)
    }

    pub fn list_formats(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    /// `(name, description)` of every format, in name order
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
