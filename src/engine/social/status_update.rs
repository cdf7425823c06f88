use crate::engine::merge::Timestamped;
use serde::{Deserialize, Serialize};

/// A single status message posted by a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Filled from the owning person when loaded from a graph document.
    #[serde(default)]
    pub author: String,
    pub text: String,
    /// Epoch milliseconds.
    pub date: u64,
}

impl StatusUpdate {
    pub fn new(author: impl Into<String>, text: impl Into<String>, date: u64) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            date,
        }
    }
}

impl Timestamped for StatusUpdate {
    fn timestamp(&self) -> u64 {
        self.date
    }
}
