//! Uniform node tree over a [`Document`]
//!
//! Renderers that only care about shape walk a [`NodeSnapshot`] instead of the arena.
//! Children appear in this order: requires (document only), includes, tasks, then nested
//! namespaces.

use crate::rake::ast::{AstNode, Document, NamespaceId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub node_type: String,
    pub label: String,
    pub line: Option<usize>,
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    fn leaf(node: &dyn AstNode) -> Self {
        Self {
            node_type: node.node_type().to_string(),
            label: node.display_label(),
            line: node.line(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::node_count).sum::<usize>()
    }
}

pub fn snapshot_document(doc: &Document) -> NodeSnapshot {
    let mut children: Vec<NodeSnapshot> = doc
        .requires
        .iter()
        .map(|r| NodeSnapshot::leaf(r))
        .collect();
    children.push(snapshot_namespace(doc, doc.root_id()));

    NodeSnapshot {
        node_type: "Document".to_string(),
        label: doc.file.clone(),
        line: None,
        children,
    }
}

fn snapshot_namespace(doc: &Document, id: NamespaceId) -> NodeSnapshot {
    let namespace = doc.namespace(id);
    let mut snapshot = NodeSnapshot::leaf(namespace);

    snapshot
        .children
        .extend(namespace.includes.iter().map(|i| NodeSnapshot::leaf(i)));
    snapshot
        .children
        .extend(doc.tasks_in(id).map(|t| NodeSnapshot::leaf(t)));
    snapshot
        .children
        .extend(namespace.namespaces.iter().map(|&child| snapshot_namespace(doc, child)));

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rake::parser::parse_document;

    #[test]
    fn test_snapshot_order() {
        let doc = parse_document(
            "require 'rake'\nnamespace :a do\n  task :x\nend\nHoe.spec 'p' do\nend\ntask :t => :x\n",
        );
        let snapshot = snapshot_document(&doc);

        assert_eq!(snapshot.node_type, "Document");
        assert_eq!(snapshot.label, "Rakefile");
        let types: Vec<&str> = snapshot
            .children
            .iter()
            .map(|c| c.node_type.as_str())
            .collect();
        assert_eq!(types, vec!["Require", "Namespace"]);

        let root = &snapshot.children[1];
        let labels: Vec<&str> = root.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Hoe", ":t => [x]", "a"]);
        assert_eq!(root.children[1].line, Some(7));
        assert_eq!(snapshot.node_count(), 7);
    }
}
