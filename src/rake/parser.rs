//! Rakefile scanner
//!
//! Extracts tasks, namespaces, dependencies, task builders and requires from the tokens of
//! a Rakefile, without a Ruby grammar. Recognition is best effort: the handful of Rake DSL
//! shapes below are understood and everything else is skipped.
//!
//!     require 'rake/clean'              -> Require on the document
//!     desc "Run the tests"              -> pending description for the next task
//!     task :test => [:build] do ... end -> Task `test` with dependencies and body
//!     namespace :db do ... end          -> nested Namespace, scanned recursively
//!     Hoe.spec 'project' do ... end     -> Include `Hoe`, block skipped
//!
//! Components:
//!
//! - [dispatch] - the loop routing tokens to handlers, entered again for every namespace
//! - [handlers] - one handler per recognized call
//! - [block] - statement/block delimiting by keyword counting
//! - [arguments] - task arguments and dependency expressions
//! - [description] - the pending `desc` slot
//! - [context] - scan state and the namespace scope guard
//! - [api] - entry points
//!
//! The scanner never fails. Unknown shapes are ignored, unterminated constructs end at the
//! end of input, and the result holds whatever was recognized.

pub mod api;
pub mod arguments;
pub mod block;
pub mod context;
pub mod description;
pub mod dispatch;
pub mod handlers;
pub mod options;


pub use api::{parse_document, scan_token_list, scan_tokens, RakeParser};
pub use context::ScanFlow;
pub use options::ScanOptions;
