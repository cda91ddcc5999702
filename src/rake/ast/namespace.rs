//! Namespace element definition

use super::reference::Include;
use super::task::TaskId;
use super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// Index of a namespace inside its [`Document`](super::Document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NamespaceId(pub(crate) usize);

impl NamespaceId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named grouping of tasks, includes and nested namespaces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub parent: Option<NamespaceId>,
    pub namespaces: Vec<NamespaceId>,
    pub tasks: Vec<TaskId>,
    pub includes: Vec<Include>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, parent: Option<NamespaceId>) -> Self {
        Self {
            name: name.into(),
            parent,
            namespaces: Vec::new(),
            tasks: Vec::new(),
            includes: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl AstNode for Namespace {
    fn node_type(&self) -> &'static str {
        "Namespace"
    }
    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Namespace('{}', {} tasks, {} namespaces)",
            self.name,
            self.tasks.len(),
            self.namespaces.len()
        )
    }
}
