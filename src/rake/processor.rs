//! File processing API
//!
//! Runs a Rakefile through one stage and renders the result in one format. A processing
//! specification is written `<stage>-<format>`:
//!
//! - `token-simple`, `token-json` - the token stream the scanner consumes
//! - `tree-treeviz`, `tree-json`, `tree-yaml` - the scanned document
//!
//! Scanning itself never fails; errors come from reading files and from unknown or
//! mismatched specifications.

use crate::rake::config::RakedocConfig;
use crate::rake::formats::{FormatError, FormatRegistry};
use crate::rake::lexer::{lex, Token};
use crate::rake::parser::RakeParser;
use crate::rake::stats::Stats;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Tree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
    Yaml,
}

impl ProcessingStage {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Tree => "tree",
        }
    }
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "tree-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "tree" => ProcessingStage::Tree,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "treeviz" => OutputFormat::Treeviz,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' not supported for {} stage",
                format.name(),
                stage.name()
            )));
        }
        Ok(spec)
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Tree, OutputFormat::Treeviz),
            (ProcessingStage::Tree, OutputFormat::Json),
            (ProcessingStage::Tree, OutputFormat::Yaml),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Process Rakefile source according to `spec`. New namespaces and tasks are reported
/// to `stats`.
pub fn process_source(
    file_name: &str,
    source: &str,
    spec: &ProcessingSpec,
    config: &RakedocConfig,
    stats: &mut Stats,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => format_tokens(&lex(source), spec.format),
        ProcessingStage::Tree => {
            let doc = RakeParser::new(file_name, source)
                .with_options(config.scan.clone())
                .scan(stats);

            let registry = FormatRegistry::with_label_width(config.output.label_width);
            Ok(registry.serialize(&doc, spec.format.name())?)
        }
    }
}

/// Read and process a Rakefile
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &RakedocConfig,
    stats: &mut Stats,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let display = file_path.display().to_string();

    let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProcessingError::FileNotFound(display.clone()),
        _ => ProcessingError::Io {
            path: display.clone(),
            source: e,
        },
    })?;

    process_source(&display, &content, spec, config, stats)
}

/// Format tokens as one line per token or as a JSON array
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|t| format!("{}:{} {:?} {:?}\n", t.line, t.column, t.kind, t.text))
            .collect()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tokens).map_err(|e| FormatError::from(e).into())
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{}' not supported for token stage",
            other.name()
        ))),
    }
}
