//! Prompt assembly: persona + mood + memory facts + the user's turn.

pub mod composer;

pub use composer::{ComposedPrompt, PromptComposer};
