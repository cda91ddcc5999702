//! Nested record view of a document, used by the `json` and `yaml` formats
//!
//! The arena is turned back into a tree: each namespace record holds its includes, its
//! tasks and its nested namespace records. Token runs are left out.

use super::registry::{FormatError, Formatter};
use crate::rake::ast::{Document, Include, NamespaceId, Require, TaskKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord<'a> {
    pub file: &'a str,
    pub requires: &'a [Require],
    pub root: NamespaceRecord<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamespaceRecord<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    pub includes: &'a [Include],
    pub tasks: Vec<TaskRecord<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<NamespaceRecord<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord<'a> {
    pub name: &'a str,
    pub qualified_name: String,
    pub kind: TaskKind,
    pub line: usize,
    pub comment: &'a str,
    pub text: &'a str,
    pub dependencies: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    pub arguments: &'a [String],
}

impl<'a> DocumentRecord<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            file: &doc.file,
            requires: &doc.requires,
            root: NamespaceRecord::new(doc, doc.root_id()),
        }
    }
}

impl<'a> NamespaceRecord<'a> {
    fn new(doc: &'a Document, id: NamespaceId) -> Self {
        let namespace = doc.namespace(id);
        let tasks = namespace
            .tasks
            .iter()
            .map(|&task_id| {
                let task = doc.task(task_id);
                TaskRecord {
                    name: &task.name,
                    qualified_name: doc.qualified_name(task_id),
                    kind: task.kind,
                    line: task.line,
                    comment: &task.comment,
                    text: &task.text,
                    dependencies: &task.dependencies,
                    arguments: &task.arguments,
                }
            })
            .collect();

        Self {
            name: &namespace.name,
            includes: &namespace.includes,
            tasks,
            namespaces: namespace
                .namespaces
                .iter()
                .map(|&child| NamespaceRecord::new(doc, child))
                .collect(),
        }
    }
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&DocumentRecord::new(doc))?)
    }

    fn description(&self) -> &str {
        "Nested JSON records"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(&DocumentRecord::new(doc))?)
    }

    fn description(&self) -> &str {
        "Nested YAML records"
    }
}
