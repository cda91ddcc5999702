//! Documentation object model for scanned Rakefiles
//!
//! The scanner assembles its findings directly into a [`Document`]:
//!
//! - `document` - the root: requires plus an arena of namespaces and tasks
//! - `namespace` - named groupings, nested through parent/child ids
//! - `task` - tasks with their dependencies, comment and token runs
//! - `reference` - include (task builder) and require references
//! - `traits` - the [`AstNode`] trait shared by renderers
//!
//! Namespaces and tasks live in flat vectors owned by the document and refer to each
//! other through [`NamespaceId`] and [`TaskId`], so the parent link of a namespace never
//! owns its parent.

pub mod document;
pub mod namespace;
pub mod reference;
pub mod task;
pub mod traits;

pub use document::{Document, ROOT_NAMESPACE_NAME};
pub use namespace::{Namespace, NamespaceId};
pub use reference::{Include, Require};
pub use task::{Task, TaskId, TaskKind};
pub use traits::AstNode;
