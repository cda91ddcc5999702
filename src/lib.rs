//! # rakedoc
//!
//! Extracts documentation from Rakefiles: tasks with their descriptions and
//! dependencies, namespaces, task builders and required files.
//!
//! ```rust,ignore
//! use rakedoc::rake::parser::parse_document;
//!
//! let doc = parse_document("desc 'Run tests'\ntask :default => :test\n");
//! let task = doc.tasks_in(doc.root_id()).next().unwrap();
//! assert_eq!(task.dependencies, vec!["test"]);
//! ```
//!
//! ## Testing
//!
//! Scanner tests assert on documents with the fluent helpers in
//! [`rake::testing`](crate::rake::testing).

pub mod rake;
