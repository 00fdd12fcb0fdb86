//! Scripted driver for tests.

use async_trait::async_trait;
use scribe_core::{GenerateRequest, GenerateResponse};
use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
use scribe_interface::ScribeDriver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(ModelErrorKind),
    /// Return a sequence of responses, failing once it runs out
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Answer with this text
    Success(String),
    /// Fail with this error
    Error(ModelErrorKind),
}

impl MockResponse {
    /// Shorthand for a successful response.
    pub fn text(text: impl Into<String>) -> Self {
        MockResponse::Success(text.into())
    }

    /// Shorthand for a failed response with an unavailable model.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        MockResponse::Error(ModelErrorKind::Unavailable(reason.into()))
    }
}

/// Mock driver that replays configured responses and records every prompt.
///
/// Clones share their call count and prompt log, so a test can hand one
/// clone to the code under test and inspect the other afterwards.
///
/// ```
/// use scribe_core::GenerateRequest;
/// use scribe_interface::ScribeDriver;
/// use scribe_models::{MockClient, MockResponse};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockClient::new_sequence(vec![
///     MockResponse::text("first"),
///     MockResponse::unavailable("overloaded"),
/// ]);
/// let request = GenerateRequest::from_prompt("hello", None, None).unwrap();
///
/// assert_eq!(mock.generate(&request).await.unwrap().text(), "first");
/// assert!(mock.generate(&request).await.is_err());
/// assert_eq!(mock.prompts(), vec!["hello", "hello"]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockClient {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
    model_name: String,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockClient {
    /// Create a mock client with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Create a mock client that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock client that always fails with the given error.
    pub fn new_error(error: ModelErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock client with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Prompt text of every call so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    fn next_response(&self) -> Result<GenerateResponse, ModelError> {
        let mut count = lock(&self.call_count);
        let current = *count;
        *count += 1;

        let outcome = match &self.behavior {
            MockBehavior::Success(text) => MockResponse::Success(text.clone()),
            MockBehavior::Error(kind) => MockResponse::Error(kind.clone()),
            MockBehavior::Sequence(responses) => match responses.get(current) {
                Some(response) => response.clone(),
                None => MockResponse::Error(ModelErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current + 1,
                    responses.len()
                ))),
            },
        };

        match outcome {
            MockResponse::Success(text) => Ok(GenerateResponse::from_text(text)),
            MockResponse::Error(kind) => Err(ModelError::new(kind)),
        }
    }
}

#[async_trait]
impl ScribeDriver for MockClient {
    async fn generate(&self, req: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        lock(&self.prompts).push(req.prompt_text());
        tokio::task::yield_now().await;
        self.next_response().map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
