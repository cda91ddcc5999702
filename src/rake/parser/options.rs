//! Options that tune a scan

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Constants that never start a task builder. The rest of their line is skipped.
    pub ignored_constants: Vec<String>,
    /// Keep the signature and body token runs of each task
    pub capture_tokens: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignored_constants: vec!["ENV".to_string()],
            capture_tokens: true,
        }
    }
}

impl ScanOptions {
    pub fn is_ignored_constant(&self, name: &str) -> bool {
        self.ignored_constants.iter().any(|c| c == name)
    }
}
