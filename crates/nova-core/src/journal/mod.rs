//! Journal summarization.

pub mod summarizer;

pub use summarizer::JournalSummarizer;
