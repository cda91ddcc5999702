//! Statistics collected across scans
//!
//! Every scan reports the file it read and each namespace and task it creates. A task
//! that is declared again, or a namespace that is reopened, is only counted once.

use crate::rake::ast::{Namespace, Task};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub files: usize,
    pub namespaces: usize,
    pub tasks: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: &str) {
        self.files += 1;
        tracing::trace!(file, "file added to stats");
    }

    pub fn add_namespace(&mut self, namespace: &Namespace) {
        self.namespaces += 1;
        tracing::trace!(namespace = %namespace.name, "namespace added to stats");
    }

    pub fn add_task(&mut self, task: &Task) {
        self.tasks += 1;
        tracing::trace!(task = %task.name, "task added to stats");
    }

    /// Human readable summary, one line per counter
    pub fn summary(&self) -> String {
        format!(
            "Files:      {:>5}\nNamespaces: {:>5}\nTasks:      {:>5}\n",
            self.files, self.namespaces, self.tasks
        )
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} namespaces, {} tasks",
            self.files, self.namespaces, self.tasks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rake::ast::{NamespaceId, TaskKind};

    #[test]
    fn test_counts() {
        let mut stats = Stats::new();
        stats.add_file("Rakefile");
        stats.add_namespace(&Namespace::new("Rake Tasks", None));
        stats.add_task(&Task::new(":a", TaskKind::Task, NamespaceId(0), "task :a", 1));
        assert_eq!(
            stats,
            Stats {
                files: 1,
                namespaces: 1,
                tasks: 1
            }
        );
        assert_eq!(stats.to_string(), "1 files, 1 namespaces, 1 tasks");
        assert_eq!(
            stats.summary(),
            "Files:          1\nNamespaces:     1\nTasks:          1\n"
        );
    }
}
