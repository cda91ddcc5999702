//! Fluent assertion API for scanned documents
//!
//!     assert_doc(&doc)
//!         .require_names(&["rake/clean"])
//!         .root(|ns| {
//!             ns.task_names(&[":default"])
//!                 .task(":default", |t| {
//!                     t.dependencies(&["test"]).comment("Run all tests");
//!                 });
//!         })
//!         .namespace(&["db"], |ns| {
//!             ns.task_count(2);
//!         });
//!
//! Failures panic with the path of the node being checked.

use crate::rake::ast::{Document, NamespaceId, Task, TaskKind};

pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the total number of tasks across all namespaces
    pub fn task_count(self, expected: usize) -> Self {
        let actual = self.doc.task_count();
        assert_eq!(
            actual, expected,
            "Expected {} tasks, found {}: [{}]",
            expected,
            actual,
            self.qualified_names().join(", ")
        );
        self
    }

    /// Assert the qualified names of all tasks, depth first
    pub fn qualified_task_names(self, expected: &[&str]) -> Self {
        assert_eq!(self.qualified_names(), expected, "qualified task names");
        self
    }

    pub fn require_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.requires.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(actual, expected, "requires");
        self
    }

    pub fn root<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NamespaceAssertion<'a>),
    {
        assertion(NamespaceAssertion {
            doc: self.doc,
            id: self.doc.root_id(),
            context: "root".to_string(),
        });
        self
    }

    /// Assert on the namespace at `path` below the root
    pub fn namespace<F>(self, path: &[&str], assertion: F) -> Self
    where
        F: FnOnce(NamespaceAssertion<'a>),
    {
        let context = path.join(":");
        let id = self
            .doc
            .find_namespace(path)
            .unwrap_or_else(|| panic!("No namespace '{}'", context));
        assertion(NamespaceAssertion {
            doc: self.doc,
            id,
            context,
        });
        self
    }

    fn qualified_names(&self) -> Vec<String> {
        self.doc
            .all_tasks()
            .into_iter()
            .map(|id| self.doc.qualified_name(id))
            .collect()
    }
}

pub struct NamespaceAssertion<'a> {
    doc: &'a Document,
    id: NamespaceId,
    context: String,
}

impl<'a> NamespaceAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        let actual = &self.doc.namespace(self.id).name;
        assert_eq!(actual, expected, "{}: name", self.context);
        self
    }

    pub fn task_count(self, expected: usize) -> Self {
        let actual = self.doc.namespace(self.id).tasks.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} tasks, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn task_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.tasks_in(self.id).map(|t| t.name.as_str()).collect();
        assert_eq!(actual, expected, "{}: task names", self.context);
        self
    }

    pub fn include_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .doc
            .namespace(self.id)
            .includes
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(actual, expected, "{}: includes", self.context);
        self
    }

    pub fn namespace_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .doc
            .children_of(self.id)
            .map(|(_, ns)| ns.name.as_str())
            .collect();
        assert_eq!(actual, expected, "{}: nested namespaces", self.context);
        self
    }

    /// Assert on the task declared here under `name`, written as in the source
    pub fn task<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(TaskAssertion<'a>),
    {
        let id = self
            .doc
            .find_task(self.id, name)
            .unwrap_or_else(|| panic!("{}: no task '{}'", self.context, name));
        assertion(TaskAssertion {
            task: self.doc.task(id),
            context: format!("{}/{}", self.context, name),
        });
        self
    }
}

pub struct TaskAssertion<'a> {
    task: &'a Task,
    context: String,
}

impl TaskAssertion<'_> {
    pub fn comment(self, expected: &str) -> Self {
        assert_eq!(self.task.comment, expected, "{}: comment", self.context);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.task.text, expected, "{}: text", self.context);
        self
    }

    pub fn dependencies(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.task.dependencies, expected,
            "{}: dependencies",
            self.context
        );
        self
    }

    pub fn arguments(self, expected: &[&str]) -> Self {
        assert_eq!(self.task.arguments, expected, "{}: arguments", self.context);
        self
    }

    pub fn kind(self, expected: TaskKind) -> Self {
        assert_eq!(self.task.kind, expected, "{}: kind", self.context);
        self
    }

    pub fn line(self, expected: usize) -> Self {
        assert_eq!(self.task.line, expected, "{}: line", self.context);
        self
    }

    pub fn has_block(self, expected: bool) -> Self {
        assert_eq!(
            self.task.has_block(),
            expected,
            "{}: has block, body was {:?}",
            self.context,
            self.task.body_source()
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rake::parser::parse_document;

    #[test]
    fn test_fluent_assertions() {
        let doc = parse_document(
            "require 'rake/clean'\ndesc 'Run all tests'\ntask :default => :test do\nend\nnamespace :db do\n  task :migrate\n  task :seed\nend\n",
        );

        assert_doc(&doc)
            .task_count(3)
            .qualified_task_names(&["default", "db:migrate", "db:seed"])
            .require_names(&["rake/clean"])
            .root(|ns| {
                ns.name("Rake Tasks")
                    .task_names(&[":default"])
                    .namespace_names(&["db"])
                    .include_names(&[])
                    .task(":default", |t| {
                        t.dependencies(&["test"])
                            .comment("Run all tests")
                            .text("task :default")
                            .kind(TaskKind::Task)
                            .line(3)
                            .arguments(&[])
                            .has_block(true);
                    });
            })
            .namespace(&["db"], |ns| {
                ns.task_count(2);
            });
    }

    #[test]
    #[should_panic(expected = "root: task names")]
    fn test_failure_names_context() {
        let doc = parse_document("task :a\n");
        assert_doc(&doc).root(|ns| {
            ns.task_names(&["b"]);
        });
    }
}
