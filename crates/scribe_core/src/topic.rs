//! The essay topic.

use scribe_error::{ScribeResult, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// A user-supplied essay topic.
///
/// Always non-empty after trimming; immutable once captured.
///
/// # Examples
///
/// ```
/// use scribe_core::Topic;
///
/// let topic = Topic::new("  The Roman Empire ").unwrap();
/// assert_eq!(topic.as_str(), "The Roman Empire");
///
/// assert!(Topic::new("   ").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Capture a topic, rejecting empty or whitespace-only input.
    #[track_caller]
    pub fn new(raw: impl Into<String>) -> ScribeResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyTopic).into());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = scribe_error::ScribeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}
