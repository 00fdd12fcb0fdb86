//! Input types for model requests.

use serde::{Deserialize, Serialize};

/// Content sent to a model.
///
/// Scribe only ever sends prompts, so text is the single input kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}

impl Input {
    /// Borrow the text of this input.
    pub fn as_text(&self) -> &str {
        match self {
            Input::Text(text) => text,
        }
    }
}
