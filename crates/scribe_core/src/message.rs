//! Message types for conversation history.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A single message in a request.
///
/// # Examples
///
/// ```
/// use scribe_core::{Input, MessageBuilder, Role};
///
/// let message = MessageBuilder::default()
///     .role(Role::User)
///     .content(vec![Input::Text("Hello!".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: Vec<Input>,
}

impl Message {
    /// Create a user message holding a single text prompt.
    pub fn user(prompt: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![Input::Text(prompt.into())],
        }
    }
}
