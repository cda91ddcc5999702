//! Output formats for scanned documents
//!
//! - [treeviz] - one line per node, nesting drawn with box characters
//! - [records] - the nested record view behind the `json` and `yaml` formats
//! - [snapshot] - a uniform node tree the tree renderers walk
//! - [registry] - the [`Formatter`] trait and the name based registry
//!
//! Token runs are rendered back to source text by [`crate::rake::lexer::detokenize`].

pub mod records;
pub mod registry;
pub mod snapshot;
pub mod treeviz;

pub use records::{DocumentRecord, JsonFormatter, NamespaceRecord, TaskRecord, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use snapshot::{snapshot_document, NodeSnapshot};
pub use treeviz::{to_treeviz_str, TreevizFormatter, DEFAULT_LABEL_WIDTH};
