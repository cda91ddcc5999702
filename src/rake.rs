//! Rakefile documentation scanner
//!
//! - [lexer] - tokens and the token stream the scanner reads
//! - [parser] - the scanner
//! - [ast] - the documentation tree it builds
//! - [stats] - counts of scanned files, namespaces and tasks
//! - [formats] - renderers for the tree
//! - [processor] - stage and format driven processing
//! - [config] - layered configuration
//! - [files] - Rakefile name matching
//! - [testing] - assertion helpers

pub mod ast;
pub mod config;
pub mod files;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod stats;
pub mod testing;
