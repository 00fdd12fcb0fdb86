//! Request and response types for model generation.

use crate::{Input, Message, Output};
use scribe_error::{BuilderError, ScribeResult};
use serde::{Deserialize, Serialize};

/// Generation request sent to a driver.
///
/// # Examples
///
/// ```
/// use scribe_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(Some(100))
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0)
    temperature: Option<f32>,
    /// Model identifier to use
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Build a single-turn request from a prompt with optional sampling settings.
    pub fn from_prompt(
        prompt: impl Into<String>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> ScribeResult<Self> {
        Self::builder()
            .messages(vec![Message::user(prompt)])
            .temperature(temperature)
            .max_tokens(max_tokens)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()).into())
    }

    /// All text inputs of all messages, newline separated.
    pub fn prompt_text(&self) -> String {
        self.messages
            .iter()
            .flat_map(|msg| &msg.content)
            .map(Input::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scribe_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Hello!".to_string())],
/// };
///
/// assert_eq!(response.text(), "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Create a response carrying one text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// Text of every output joined by newlines.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
