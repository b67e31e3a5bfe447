//! Styled text token model.
//!
//! Tokens are created fresh per conversion call and discarded after
//! rendering; nothing survives across calls.

use serde::{Deserialize, Serialize};

/// One maximal run of visible characters sharing a single style.
///
/// Concatenating `text` across a conversion's tokens in order reproduces
/// the input string with every escape sequence removed. Tokens never
/// contain escape bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The visible characters of the run.
    pub text: String,

    /// Class labels active at the start of the run, color before bold.
    pub classes: Vec<String>,
}

impl Token {
    /// Create a token with the given class labels.
    pub fn new(text: impl Into<String>, classes: Vec<String>) -> Self {
        Self {
            text: text.into(),
            classes,
        }
    }

    /// Create an unstyled token.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            classes: Vec::new(),
        }
    }

    /// Whether any style applies to this run.
    pub fn is_styled(&self) -> bool {
        !self.classes.is_empty()
    }
}
