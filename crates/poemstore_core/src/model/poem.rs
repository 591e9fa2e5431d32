//! Poem domain model.
//!
//! # Responsibility
//! - Define the canonical poem record.
//! - Provide the schema default for `text` on both construction and decode
//!   paths.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another poem.
//! - A poem constructed or decoded without explicit text carries
//!   `DEFAULT_TEXT`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema default applied to `Poem::text` when no value is supplied.
pub const DEFAULT_TEXT: &str = "to be or not to be";

/// Stable identifier for every poem record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PoemId = Uuid;

/// Canonical record for one poem.
///
/// The record carries no validation rules: any string is a legal body, and
/// mutation happens by direct field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    /// Stable global ID used for store addressing and collection lookup.
    pub uuid: PoemId,
    /// Poem body. Missing values decode to `DEFAULT_TEXT`.
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

impl Poem {
    /// Creates a poem with a generated stable ID and the schema default text.
    pub fn new() -> Self {
        Self::with_text(DEFAULT_TEXT)
    }

    /// Creates a poem with a generated stable ID and explicit text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a poem with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in the store.
    pub fn with_id(uuid: PoemId, text: impl Into<String>) -> Self {
        Self {
            uuid,
            text: text.into(),
        }
    }
}

impl Default for Poem {
    fn default() -> Self {
        Self::new()
    }
}
