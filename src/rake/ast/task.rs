//! Task element definition

use super::namespace::NamespaceId;
use super::traits::AstNode;
use crate::rake::lexer::tokens::unquote;
use crate::rake::lexer::{detokenize, Token};
use serde::{Serialize, Serializer};
use std::fmt;

/// Index of a task inside its [`Document`](super::Document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The Rake method a task was declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Task,
    Multitask,
    File,
    Directory,
}

impl TaskKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            TaskKind::Task => "task",
            TaskKind::Multitask => "multitask",
            TaskKind::File => "file",
            TaskKind::Directory => "directory",
        }
    }

    /// File and directory tasks name paths, so their dependencies may be strings
    pub fn accepts_path_dependencies(&self) -> bool {
        matches!(self, TaskKind::File | TaskKind::Directory)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A named unit of build work.
///
/// `signature` holds the tokens of the declaration itself (`task :a => [:b]`), `body` the
/// tokens that follow it up to the end of the line or of the block. Neither is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// The name as written in the declaration: `:default`, `'pkg'`
    pub name: String,
    pub kind: TaskKind,
    pub container: NamespaceId,
    pub dependencies: Vec<String>,
    pub arguments: Vec<String>,
    pub comment: String,
    /// Source of the declaration up to and including the task name
    pub text: String,
    pub line: usize,
    #[serde(serialize_with = "serialize_run")]
    pub signature: Vec<Token>,
    #[serde(serialize_with = "serialize_run")]
    pub body: Vec<Token>,
}

fn serialize_run<S: Serializer>(tokens: &[Token], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&detokenize(tokens))
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        kind: TaskKind,
        container: NamespaceId,
        text: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            container,
            dependencies: Vec::new(),
            arguments: Vec::new(),
            comment: String::new(),
            text: text.into(),
            line,
            signature: Vec::new(),
            body: Vec::new(),
        }
    }

    /// The name Rake knows the task by, without symbol sigil or quotes
    pub fn rake_name(&self) -> String {
        unquote(self.name.strip_prefix(':').unwrap_or(&self.name))
    }

    /// The declaration and its body as one token run, in source order
    pub fn token_stream(&self) -> Vec<Token> {
        self.signature.iter().chain(&self.body).cloned().collect()
    }

    pub fn signature_source(&self) -> String {
        detokenize(&self.signature)
    }

    pub fn body_source(&self) -> String {
        detokenize(&self.body)
    }

    /// Whether the body is a block rather than the rest of a single line
    pub fn has_block(&self) -> bool {
        self.body.iter().any(|t| t.kind.opens_block())
    }
}

impl AstNode for Task {
    fn node_type(&self) -> &'static str {
        match self.kind {
            TaskKind::Task => "Task",
            TaskKind::Multitask => "Multitask",
            TaskKind::File => "FileTask",
            TaskKind::Directory => "DirectoryTask",
        }
    }
    fn display_label(&self) -> String {
        if self.dependencies.is_empty() {
            self.name.clone()
        } else {
            format!("{} => [{}]", self.name, self.dependencies.join(", "))
        }
    }
    fn line(&self) -> Option<usize> {
        Some(self.line)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task('{}', {} dependencies)",
            self.name,
            self.dependencies.len()
        )
    }
}
