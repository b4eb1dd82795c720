//! Persona prompt composer.
//!
//! Builds the single prompt string handed to the model. Layout:
//! ```text
//! You are {name}, a witty AI companion with a {mood} tone.
//! <style instructions>
//!
//! You remember the following facts:
//! {one fact per line}
//!
//! <memory etiquette + greeting instructions>
//!
//! User: {input}
//! {name}:
//! ```
//!
//! The greeting instruction ("extra warm after a long time") is a hint to the
//! model only. Nothing here tracks when the user last spoke.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use nova_types::mood::Mood;

/// Output of one composition: the prompt and the mood baked into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub prompt: String,
    pub mood: Mood,
}

/// Draws a mood per request and renders the persona prompt.
///
/// The random source is owned by the composer so tests can seed it.
pub struct PromptComposer {
    persona_name: String,
    rng: Mutex<StdRng>,
}

impl PromptComposer {
    /// Composer with an entropy-seeded mood draw.
    pub fn new(persona_name: impl Into<String>) -> Self {
        Self::from_rng(persona_name, StdRng::from_entropy())
    }

    /// Composer whose sequence of moods is fully determined by `seed`.
    pub fn with_seed(persona_name: impl Into<String>, seed: u64) -> Self {
        Self::from_rng(persona_name, StdRng::seed_from_u64(seed))
    }

    fn from_rng(persona_name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            persona_name: persona_name.into(),
            rng: Mutex::new(rng),
        }
    }

    /// Draw one mood uniformly from [`Mood::ALL`].
    pub fn draw_mood(&self) -> Mood {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *Mood::ALL.choose(&mut *rng).unwrap_or(&Mood::Chill)
    }

    /// Draw a mood and render the prompt for `user_input`.
    pub fn compose(&self, user_input: &str, memory_facts: &[String]) -> ComposedPrompt {
        let mood = self.draw_mood();
        ComposedPrompt {
            prompt: render_prompt(&self.persona_name, mood, memory_facts, user_input),
            mood,
        }
    }
}

/// Render the prompt for a fixed mood. Pure.
pub fn render_prompt(name: &str, mood: Mood, memory_facts: &[String], user_input: &str) -> String {
    let facts = memory_facts.join("\n");
    format!(
        "You are {name}, a witty AI companion with a {mood} tone.\n\
         Speak casually and like a real person—brief, unpredictable, informal. Don’t overexplain.\n\
         \n\
         You remember the following facts:\n\
         {facts}\n\
         \n\
         Only mention memories if the user brings them up first.\n\
         If the user says \"hello\" and it's the first message after a long time, make your greeting extra warm.\n\
         Otherwise, keep greetings casual and mood-driven.\n\
         \n\
         User: {user_input}\n\
         {name}:"
    )
}
