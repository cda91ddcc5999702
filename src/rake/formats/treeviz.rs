//! Treeviz formatter
//!
//! One line per node, nesting drawn with box characters. Labels are truncated to a
//! configurable width.
//!
//!     ⧉ Rakefile
//!     ├─ ⇲ rake/clean
//!     └─ § Rake Tasks
//!       ├─ ⊕ Hoe
//!       ├─ ⚙ :default => [test]
//!       └─ § db
//!         └─ ⚙ :migrate
//!
//! Icons
//!     Document: ⧉
//!     Namespace: §
//!     Task: ⚙
//!     Multitask: ⫴
//!     FileTask: ▤
//!     DirectoryTask: ▣
//!     Include: ⊕
//!     Require: ⇲
//!     RequireRelative: ⇱

use super::registry::{FormatError, Formatter};
use super::snapshot::{snapshot_document, NodeSnapshot};
use crate::rake::ast::Document;

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Namespace" => "§",
        "Task" => "⚙",
        "Multitask" => "⫴",
        "FileTask" => "▤",
        "DirectoryTask" => "▣",
        "Include" => "⊕",
        "Require" => "⇲",
        "RequireRelative" => "⇱",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &NodeSnapshot,
    prefix: &str,
    is_last: bool,
    label_width: usize,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, label_width)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(snapshot, &child_prefix, label_width, output);
}

fn format_children(snapshot: &NodeSnapshot, prefix: &str, label_width: usize, output: &mut String) {
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == count, label_width, output);
    }
}

/// Render a document as a treeviz string
pub fn to_treeviz_str(doc: &Document, label_width: usize) -> String {
    let snapshot = snapshot_document(doc);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, label_width)
    );
    format_children(&snapshot, "", label_width, &mut output);
    output
}

#[derive(Debug, Clone, Copy)]
pub struct TreevizFormatter {
    pub label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc, self.label_width))
    }

    fn description(&self) -> &str {
        "Visual tree of namespaces, tasks and references"
    }
}
