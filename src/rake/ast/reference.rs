//! Include and require references

use super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// A task builder (`Hoe.spec ... do`, `Rake::TestTask.new do`) that configured a namespace.
/// Only the constant is recorded, its block is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    pub name: String,
    pub line: usize,
}

impl Include {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

impl AstNode for Include {
    fn node_type(&self) -> &'static str {
        "Include"
    }
    fn display_label(&self) -> String {
        self.name.clone()
    }
    fn line(&self) -> Option<usize> {
        Some(self.line)
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Include('{}')", self.name)
    }
}

/// A `require 'name'` (or `require_relative`) found in the file. Always attached to the
/// document, whichever namespace it appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Require {
    pub name: String,
    pub relative: bool,
    pub line: usize,
}

impl Require {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            relative: false,
            line,
        }
    }

    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }
}

impl AstNode for Require {
    fn node_type(&self) -> &'static str {
        if self.relative {
            "RequireRelative"
        } else {
            "Require"
        }
    }
    fn display_label(&self) -> String {
        self.name.clone()
    }
    fn line(&self) -> Option<usize> {
        Some(self.line)
    }
}

impl fmt::Display for Require {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Require('{}')", self.name)
    }
}
