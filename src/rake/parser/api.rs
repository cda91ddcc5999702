//! Public API for the scanner.

use super::context::ScanContext;
use super::dispatch::parse_rakefile;
use super::options::ScanOptions;
use crate::rake::ast::Document;
use crate::rake::lexer::{Token, TokenStream};
use crate::rake::stats::Stats;

/// Scans one Rakefile into a [`Document`].
///
/// A parser can be scanned any number of times; every scan starts from fresh state.
#[derive(Debug, Clone)]
pub struct RakeParser {
    file_name: String,
    content: String,
    options: ScanOptions,
}

impl RakeParser {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Lex the content and scan it, reporting new namespaces and tasks to `stats`
    pub fn scan(&self, stats: &mut Stats) -> Document {
        scan_tokens(
            &self.file_name,
            TokenStream::from_source(&self.content),
            &self.options,
            stats,
        )
    }
}

/// Scan an already tokenized file.
///
/// Never fails: unrecognized input is skipped and running out of input ends the scan with
/// whatever was found so far.
pub fn scan_tokens(
    file_name: &str,
    mut stream: TokenStream,
    options: &ScanOptions,
    stats: &mut Stats,
) -> Document {
    let span = tracing::info_span!("scan", file = %file_name);
    let _enter = span.enter();

    let mut context = ScanContext::new(file_name, stats, options);
    let flow = parse_rakefile(&mut context, &mut stream);

    let document = context.into_document();
    tracing::debug!(
        ?flow,
        tasks = document.task_count(),
        namespaces = document.namespace_count(),
        "scan finished"
    );
    document
}

/// Scan a token list produced by any tokenizer
pub fn scan_token_list(file_name: &str, tokens: Vec<Token>, stats: &mut Stats) -> Document {
    scan_tokens(file_name, TokenStream::new(tokens), &ScanOptions::default(), stats)
}

/// Scan `source` as a file named `Rakefile` with default options
pub fn parse_document(source: &str) -> Document {
    RakeParser::new("Rakefile", source).scan(&mut Stats::new())
}
