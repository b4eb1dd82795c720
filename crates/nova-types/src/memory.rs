//! Long-term fact memory.
//!
//! Facts are raw user utterances stored verbatim. There is no identity,
//! deduplication, or ranking: the book is an append-only list.

use serde::{Deserialize, Serialize};

/// Phrase that promotes an utterance into long-term memory.
///
/// Matched as a case-insensitive substring of the raw user input.
pub const REMEMBER_TRIGGER: &str = "remember that";

/// Contents of `memory.json`.
///
/// Unknown top-level keys are carried through `extra` so a rewrite never
/// drops fields an operator added by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryBook {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub memories: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MemoryBook {
    /// The facts to inject into the prompt, oldest first.
    pub fn facts(&self) -> &[String] {
        &self.memories
    }

    /// Append a fact verbatim.
    pub fn remember(&mut self, fact: impl Into<String>) {
        self.memories.push(fact.into());
    }
}

/// Whether the user asked for this utterance to be remembered.
pub fn wants_remembering(user_input: &str) -> bool {
    user_input.to_lowercase().contains(REMEMBER_TRIGGER)
}
