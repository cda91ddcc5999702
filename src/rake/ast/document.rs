//! Document root of a scanned Rakefile

use super::namespace::{Namespace, NamespaceId};
use super::reference::{Include, Require};
use super::task::{Task, TaskId};
use std::collections::HashMap;

/// Name given to the namespace that owns everything outside a `namespace` block
pub const ROOT_NAMESPACE_NAME: &str = "Rake Tasks";

/// The result of scanning one Rakefile.
///
/// Holds the requires of the file and exactly one root namespace. Every namespace and task
/// is stored here and addressed by id; tasks are looked up by `(namespace, name)` so that a
/// task declared twice in the same namespace stays one task.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file: String,
    pub requires: Vec<Require>,
    namespaces: Vec<Namespace>,
    tasks: Vec<Task>,
    task_index: HashMap<(NamespaceId, String), TaskId>,
}

impl Document {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            requires: Vec::new(),
            namespaces: vec![Namespace::new(ROOT_NAMESPACE_NAME, None)],
            tasks: Vec::new(),
            task_index: HashMap::new(),
        }
    }

    pub fn root_id(&self) -> NamespaceId {
        NamespaceId(0)
    }

    pub fn root(&self) -> &Namespace {
        &self.namespaces[0]
    }

    /// Ids are only handed out by this document, an id from another document may panic
    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        &self.namespaces[id.0]
    }

    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id.0]
    }

    pub(crate) fn task_mut(&mut self, id: TaskId) -> &mut Task {
        &mut self.tasks[id.0]
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tasks declared directly in a namespace, in declaration order
    pub fn tasks_in(&self, id: NamespaceId) -> impl Iterator<Item = &Task> + '_ {
        self.namespace(id).tasks.iter().map(|&t| self.task(t))
    }

    /// Direct child namespaces, in declaration order
    pub fn children_of(&self, id: NamespaceId) -> impl Iterator<Item = (NamespaceId, &Namespace)> + '_ {
        self.namespace(id)
            .namespaces
            .iter()
            .map(|&child| (child, self.namespace(child)))
    }

    /// Direct child of `parent` with exactly this name
    pub fn find_child(&self, parent: NamespaceId, name: &str) -> Option<NamespaceId> {
        self.namespace(parent)
            .namespaces
            .iter()
            .copied()
            .find(|&child| self.namespace(child).name == name)
    }

    /// Follow a path of namespace names from the root, `&[]` being the root itself
    pub fn find_namespace(&self, path: &[&str]) -> Option<NamespaceId> {
        path.iter()
            .try_fold(self.root_id(), |current, name| self.find_child(current, name))
    }

    /// Task declared in `namespace` under `name`, as written (`:default`)
    pub fn find_task(&self, namespace: NamespaceId, name: &str) -> Option<TaskId> {
        self.task_index
            .get(&(namespace, name.to_string()))
            .copied()
    }

    /// Create a new namespace under `parent`. Reusing an existing child is up to the caller.
    pub fn add_namespace(&mut self, parent: NamespaceId, name: impl Into<String>) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len());
        self.namespaces.push(Namespace::new(name, Some(parent)));
        self.namespaces[parent.0].namespaces.push(id);
        id
    }

    /// Register a task in its container.
    ///
    /// If the container already holds a task with that name, the existing id is returned
    /// and `task` is dropped.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let key = (task.container, task.name.clone());
        if let Some(&existing) = self.task_index.get(&key) {
            return existing;
        }
        let id = TaskId(self.tasks.len());
        self.namespaces[task.container.0].tasks.push(id);
        self.tasks.push(task);
        self.task_index.insert(key, id);
        id
    }

    pub fn add_include(&mut self, namespace: NamespaceId, include: Include) {
        self.namespaces[namespace.0].includes.push(include);
    }

    pub fn add_require(&mut self, require: Require) {
        self.requires.push(require);
    }

    /// Names of the namespaces from the root (excluded) down to `id`
    pub fn namespace_path(&self, id: NamespaceId) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(ns) = current.map(|c| self.namespace(c)) {
            if ns.is_root() {
                break;
            }
            path.push(ns.name.as_str());
            current = ns.parent;
        }
        path.reverse();
        path
    }

    /// The name Rake would run the task by, such as `db:migrate`
    pub fn qualified_name(&self, id: TaskId) -> String {
        let task = self.task(id);
        let mut parts: Vec<String> = self
            .namespace_path(task.container)
            .into_iter()
            .map(str::to_string)
            .collect();
        parts.push(task.rake_name());
        parts.join(":")
    }

    /// Every task, a namespace's own tasks first and then its children, depth first
    pub fn all_tasks(&self) -> Vec<TaskId> {
        let mut result = Vec::with_capacity(self.tasks.len());
        self.collect_tasks(self.root_id(), &mut result);
        result
    }

    fn collect_tasks(&self, id: NamespaceId, result: &mut Vec<TaskId>) {
        let namespace = self.namespace(id);
        result.extend(namespace.tasks.iter().copied());
        for &child in &namespace.namespaces {
            self.collect_tasks(child, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rake::ast::TaskKind;

    fn task(ns: NamespaceId, name: &str) -> Task {
        Task::new(format!(":{}", name), TaskKind::Task, ns, format!("task :{}", name), 1)
    }

    #[test]
    fn test_new_document_has_root() {
        let doc = Document::new("Rakefile");
        assert_eq!(doc.root().name, ROOT_NAMESPACE_NAME);
        assert!(doc.root().is_root());
        assert_eq!(doc.namespace_count(), 1);
        assert_eq!(doc.task_count(), 0);
    }

    #[test]
    fn test_add_task_is_keyed_by_container_and_name() {
        let mut doc = Document::new("Rakefile");
        let root = doc.root_id();
        let db = doc.add_namespace(root, "db");

        let first = doc.add_task(task(root, "migrate"));
        let again = doc.add_task(task(root, "migrate"));
        let nested = doc.add_task(task(db, "migrate"));

        assert_eq!(first, again);
        assert_ne!(first, nested);
        assert_eq!(doc.task_count(), 2);
        assert_eq!(doc.find_task(db, ":migrate"), Some(nested));
        assert_eq!(doc.find_task(db, "migrate"), None);
        assert_eq!(doc.find_task(db, ":seed"), None);
    }

    #[test]
    fn test_qualified_names() {
        let mut doc = Document::new("Rakefile");
        let root = doc.root_id();
        let db = doc.add_namespace(root, "db");
        let schema = doc.add_namespace(db, "schema");
        let load = doc.add_task(task(schema, "load"));
        let default = doc.add_task(task(root, "default"));

        assert_eq!(doc.qualified_name(load), "db:schema:load");
        assert_eq!(doc.qualified_name(default), "default");
        assert_eq!(doc.find_namespace(&["db", "schema"]), Some(schema));
        assert_eq!(doc.find_namespace(&[]), Some(root));
        assert_eq!(doc.find_namespace(&["schema"]), None);
        assert_eq!(doc.namespace(schema).parent, Some(db));
    }

    #[test]
    fn test_all_tasks_depth_first() {
        let mut doc = Document::new("Rakefile");
        let root = doc.root_id();
        let a = doc.add_task(task(root, "a"));
        let ns = doc.add_namespace(root, "ns");
        let b = doc.add_task(task(ns, "b"));
        let c = doc.add_task(task(root, "c"));

        assert_eq!(doc.all_tasks(), vec![a, c, b]);
        let names: Vec<_> = doc.tasks_in(root).map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![":a", ":c"]);
    }
}
