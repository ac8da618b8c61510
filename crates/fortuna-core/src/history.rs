//! Append-only record of activation labels.

use serde::{Deserialize, Serialize};

/// A chronological, append-only log of result labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<String>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label. Entries are never removed or reordered.
    pub fn append(&mut self, label: impl Into<String>) {
        self.entries.push(label.into());
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The newest entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Results\n=======\n\n");
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{:>3}. {entry}\n", i + 1));
        }
        out
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Results\n\n");
        if self.entries.is_empty() {
            out.push_str("*No results yet.*\n");
        }
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. **{entry}**\n", i + 1));
        }
        out
    }
}
