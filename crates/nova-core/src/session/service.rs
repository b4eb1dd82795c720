//! Session orchestrator.
//!
//! Sequences one user message through the pipeline:
//! load memory -> compose prompt -> call the oracle -> append history ->
//! append journal -> maybe remember a fact -> reply.
//!
//! The three store writes are independent. A failed write is logged and the
//! remaining writes still run; none of them affect the reply. No store guard
//! is held while the oracle runs.

use std::sync::Arc;

use nova_types::chat::{HISTORY_WINDOW, JournalEntry, Turn};
use nova_types::config::PersonaConfig;
use nova_types::error::{OracleError, StoreError};
use nova_types::memory::wants_remembering;
use nova_types::mood::Mood;

use crate::journal::summarizer::{JournalSummarizer, NOT_ENOUGH_ENTRIES};
use crate::oracle::InferenceGateway;
use crate::prompt::PromptComposer;
use crate::session::clock::{Clock, SystemClock};
use crate::store::{HistoryStore, JournalStore, MemoryStore};

/// What happened to one message.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The model answered and the turn was persisted.
    Replied {
        reply: String,
        mood: Mood,
        remembered: bool,
    },
    /// The model could not be reached; nothing was persisted.
    Snag { reply: String, cause: OracleError },
}

impl TurnOutcome {
    /// The text to show the user, success or not.
    pub fn reply(&self) -> &str {
        match self {
            TurnOutcome::Replied { reply, .. } | TurnOutcome::Snag { reply, .. } => reply,
        }
    }

    pub fn into_reply(self) -> String {
        match self {
            TurnOutcome::Replied { reply, .. } | TurnOutcome::Snag { reply, .. } => reply,
        }
    }
}

/// Conversation service, generic over the three store ports.
pub struct SessionService<M: MemoryStore, H: HistoryStore, J: JournalStore> {
    memory: M,
    history: H,
    journal: J,
    composer: PromptComposer,
    gateway: InferenceGateway,
    clock: Arc<dyn Clock>,
    persona: PersonaConfig,
}

impl<M: MemoryStore, H: HistoryStore, J: JournalStore> SessionService<M, H, J> {
    pub fn new(
        memory: M,
        history: H,
        journal: J,
        gateway: InferenceGateway,
        persona: PersonaConfig,
    ) -> Self {
        let composer = match persona.mood_seed {
            Some(seed) => PromptComposer::with_seed(persona.name.clone(), seed),
            None => PromptComposer::new(persona.name.clone()),
        };
        Self {
            memory,
            history,
            journal,
            composer,
            gateway,
            clock: Arc::new(SystemClock),
            persona,
        }
    }

    /// Replace the clock used for journal timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Handle one message and return the reply text.
    pub async fn handle_message(&self, user_input: &str) -> String {
        self.respond(user_input).await.into_reply()
    }

    /// Handle one message, returning the full outcome.
    #[tracing::instrument(
        name = "handle_message",
        skip(self, user_input),
        fields(input_len = user_input.len(), oracle = self.gateway.oracle_name())
    )]
    pub async fn respond(&self, user_input: &str) -> TurnOutcome {
        let book = self.memory.load().await;
        let composed = self.composer.compose(user_input, book.facts());
        tracing::debug!(mood = %composed.mood, facts = book.facts().len(), "Prompt composed");

        let reply = match self.gateway.generate(&composed.prompt).await {
            Ok(reply) => reply,
            Err(cause) => {
                tracing::warn!(error = %cause, "Oracle call failed");
                return TurnOutcome::Snag {
                    reply: format!("{} hit a snag: {cause}", self.persona.name),
                    cause,
                };
            }
        };

        let turn = Turn::new(user_input, reply.clone());

        if let Err(err) = self.history.append_turn(turn.clone(), HISTORY_WINDOW).await {
            tracing::warn!(error = %err, "Failed to save chat history");
        }

        let entry = JournalEntry::at(self.clock.now(), &turn);
        if let Err(err) = self.journal.append_entry(&entry).await {
            tracing::warn!(error = %err, "Failed to save journal entry");
        }

        let mut remembered = false;
        if wants_remembering(user_input) {
            match self.memory.append_fact(user_input).await {
                Ok(count) => {
                    remembered = true;
                    tracing::info!(facts = count, "Remembered a new fact");
                }
                Err(err) => tracing::warn!(error = %err, "Failed to save memory"),
            }
        }

        TurnOutcome::Replied {
            reply,
            mood: composed.mood,
            remembered,
        }
    }

    /// Current rolling history, oldest first.
    pub async fn history(&self) -> Vec<Turn> {
        self.history.load().await
    }

    pub async fn clear_history(&self) -> Result<(), StoreError> {
        self.history.clear().await?;
        tracing::info!("Chat history cleared");
        Ok(())
    }

    /// Full journal, oldest first.
    pub async fn journal(&self) -> Vec<JournalEntry> {
        self.journal.load().await
    }

    /// Summarize the most recent journal entries.
    ///
    /// Returns the "not enough entries" message without calling the oracle
    /// when the journal has fewer than two entries.
    #[tracing::instrument(name = "summarize_journal", skip(self))]
    pub async fn summarize_journal(&self) -> Result<String, OracleError> {
        let entries = self.journal.load().await;
        let Some(prompt) =
            JournalSummarizer::build_prompt(&entries, &self.persona.user_name, &self.persona.name)
        else {
            return Ok(NOT_ENOUGH_ENTRIES.to_string());
        };

        self.gateway.generate_summary(&prompt).await.inspect_err(|err| {
            tracing::warn!(error = %err, "Journal summary failed");
        })
    }
}
