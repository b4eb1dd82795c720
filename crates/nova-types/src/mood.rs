//! Persona mood.
//!
//! One mood is drawn per request and baked into the prompt. Moods are never
//! persisted, so there is no notion of a "current" mood between turns.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Tone the persona adopts for a single reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Chill,
    Curious,
    Goofy,
    Snarky,
    Gentle,
}

impl Mood {
    /// Every mood, in the order the draw indexes them.
    pub const ALL: [Mood; 5] = [
        Mood::Chill,
        Mood::Curious,
        Mood::Goofy,
        Mood::Snarky,
        Mood::Gentle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Chill => "chill",
            Mood::Curious => "curious",
            Mood::Goofy => "goofy",
            Mood::Snarky => "snarky",
            Mood::Gentle => "gentle",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
