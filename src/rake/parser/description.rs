//! Pending `desc` tracking
//!
//! A `desc "..."` call only takes effect on the next task. The text waits here until a
//! task takes it; a second `desc` before that replaces the first.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDescription(Option<String>);

impl PendingDescription {
    pub fn set(&mut self, text: impl Into<String>) {
        if let Some(previous) = self.0.replace(text.into()) {
            tracing::debug!(discarded = %previous, "description replaced before any task used it");
        }
    }

    /// Consume the pending description, empty if there is none
    pub fn take(&mut self) -> String {
        self.0.take().unwrap_or_default()
    }
}
