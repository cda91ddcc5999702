//! Scan state threaded through the dispatch loop and its handlers
//!
//! [`ScanContext`] holds everything one scan mutates: the document being built, the
//! statistics collector, the current container, the ambient block depth and the pending
//! description. Entering a namespace goes through [`NamespaceScope`], which restores the
//! previous container and depth when dropped, whichever way the nested scan ended.

use super::description::PendingDescription;
use super::options::ScanOptions;
use crate::rake::ast::{Document, NamespaceId};
use crate::rake::stats::Stats;
use std::ops::{Deref, DerefMut};

/// How a run of the dispatch loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFlow {
    /// The enclosing namespace block closed, the caller keeps scanning
    Continue,
    /// A `:enddoc:` directive, nothing after it is documented
    EndOfDocument,
    /// No more tokens, or `__END__`
    EndOfInput,
}

impl ScanFlow {
    pub fn is_abort(&self) -> bool {
        !matches!(self, ScanFlow::Continue)
    }
}

pub struct ScanContext<'a> {
    pub document: Document,
    pub stats: &'a mut Stats,
    pub options: &'a ScanOptions,
    pub container: NamespaceId,
    pub depth: isize,
    pub description: PendingDescription,
}

impl<'a> ScanContext<'a> {
    /// Fresh state for one scan. The file and its root namespace are reported to `stats`.
    pub fn new(file: &str, stats: &'a mut Stats, options: &'a ScanOptions) -> Self {
        let document = Document::new(file);
        stats.add_file(file);
        stats.add_namespace(document.root());
        let container = document.root_id();
        Self {
            document,
            stats,
            options,
            container,
            depth: 0,
            description: PendingDescription::default(),
        }
    }

    /// Make `namespace` the current container and count its block, until the scope drops
    pub fn enter_namespace<'s>(&'s mut self, namespace: NamespaceId) -> NamespaceScope<'s, 'a> {
        let saved_container = self.container;
        let saved_depth = self.depth;
        self.container = namespace;
        self.depth += 1;
        NamespaceScope {
            context: self,
            saved_container,
            saved_depth,
        }
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Guard returned by [`ScanContext::enter_namespace`]
pub struct NamespaceScope<'s, 'a> {
    context: &'s mut ScanContext<'a>,
    saved_container: NamespaceId,
    saved_depth: isize,
}

impl<'a> Deref for NamespaceScope<'_, 'a> {
    type Target = ScanContext<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.context
    }
}

impl DerefMut for NamespaceScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.context
    }
}

impl Drop for NamespaceScope<'_, '_> {
    fn drop(&mut self) {
        self.context.container = self.saved_container;
        self.context.depth = self.saved_depth;
    }
}
