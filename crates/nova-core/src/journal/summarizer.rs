//! Journal summarizer.
//!
//! Condenses the most recent journal entries into a single prompt asking the
//! model for a short summary. Mirrors the shape of a context summarizer but
//! works on the persisted journal rather than a live session.

use nova_types::chat::JournalEntry;

/// Returned instead of a summary when there is too little to summarize.
pub const NOT_ENOUGH_ENTRIES: &str = "Not enough entries to summarize just yet.";

/// Fewer entries than this and the model is not consulted.
pub const MIN_ENTRIES: usize = 2;

/// Number of most recent entries included in the transcript.
pub const SUMMARY_WINDOW: usize = 10;

/// Stateless helpers for building the summary prompt.
pub struct JournalSummarizer;

impl JournalSummarizer {
    /// The last `window` entries (all of them if there are fewer).
    pub fn recent(entries: &[JournalEntry], window: usize) -> &[JournalEntry] {
        let start = entries.len().saturating_sub(window);
        &entries[start..]
    }

    /// Render entries as alternating `User:` / `{assistant}:` lines.
    pub fn render_transcript(entries: &[JournalEntry], assistant_name: &str) -> String {
        entries
            .iter()
            .map(|e| format!("User: {}\n{assistant_name}: {}", e.user, e.nova))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the summary prompt, or `None` if the journal is too short.
    pub fn build_prompt(
        entries: &[JournalEntry],
        user_name: &str,
        assistant_name: &str,
    ) -> Option<String> {
        if entries.len() < MIN_ENTRIES {
            return None;
        }

        let transcript =
            Self::render_transcript(Self::recent(entries, SUMMARY_WINDOW), assistant_name);
        Some(format!(
            "Summarize the following conversation between {user_name} and {assistant_name}:\n{transcript}\nSummary:"
        ))
    }
}
