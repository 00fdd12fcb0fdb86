//! Google Gemini API client.
//!
//! One request per [`ScribeDriver::generate`] call. There is no rate limiting
//! and no retry; a failed call surfaces as a [`ModelError`] for the caller to
//! handle.
//!
//! # Example
//!
//! ```no_run
//! use scribe_core::GenerateRequest;
//! use scribe_interface::ScribeDriver;
//! use scribe_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::from_prompt("Name three Roman emperors.", None, None)?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

use std::env;

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument};

use scribe_core::{GenerateRequest, GenerateResponse, Input, Role};
use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
use scribe_interface::ScribeDriver;

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Read the Gemini API key from `GEMINI_API_KEY`, falling back to `GOOGLE_API_KEY`.
///
/// Blank values count as missing.
pub fn api_key_from_env() -> Result<String, ModelError> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| ModelError::new(ModelErrorKind::MissingApiKey))
}

/// Client for the Google Gemini API bound to a single model.
#[derive(Clone)]
pub struct GeminiClient {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for [`DEFAULT_GEMINI_MODEL`] using the key from the environment.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ScribeResult<Self> {
        Self::with_model(DEFAULT_GEMINI_MODEL)
    }

    /// Create a client for `model_name` using the key from the environment.
    #[instrument(name = "gemini_client_with_model")]
    pub fn with_model(model_name: &str) -> ScribeResult<Self> {
        let api_key = api_key_from_env()?;
        Self::with_api_key(&api_key, model_name)
    }

    /// Create a client with an explicit key.
    #[instrument(name = "gemini_client_with_api_key", skip(api_key))]
    pub fn with_api_key(api_key: &str, model_name: &str) -> ScribeResult<Self> {
        let client = Gemini::with_model(api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| ModelError::new(ModelErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            model_name: model_name.to_string(),
        })
    }

    /// Map a configured model name onto the SDK's model enum.
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash-lite" → Model::Custom("models/gemini-2.0-flash-lite")
    /// - "models/gemini-2.0-flash" is passed through unchanged
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    async fn generate_internal(&self, req: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        let mut builder = self.client.generate_content();
        let mut system_prompt = None;

        for msg in req.messages() {
            match msg.role {
                Role::System => {
                    if let Some(text) = msg.content.first().map(Input::as_text) {
                        system_prompt = Some(text.to_string());
                    }
                }
                Role::User => {
                    for text in msg.content.iter().map(Input::as_text) {
                        builder = builder.with_user_message(text);
                    }
                }
                Role::Assistant => {
                    if let Some(text) = msg.content.first().map(Input::as_text) {
                        builder = builder.with_model_message(text);
                    }
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }
        if let Some(temperature) = req.temperature() {
            builder = builder.with_temperature(*temperature);
        }
        if let Some(max_tokens) = req.max_tokens() {
            builder = builder.with_max_output_tokens(*max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;
        let text = response.text();

        if text.trim().is_empty() {
            return Err(ModelError::new(ModelErrorKind::EmptyResponse));
        }

        debug!(chars = text.len(), "Gemini response received");
        Ok(GenerateResponse::from_text(text))
    }

    /// Convert SDK errors, keeping the HTTP status code when the message carries one.
    fn parse_gemini_error(err: impl std::fmt::Display) -> ModelError {
        let err_msg = err.to_string();

        match Self::extract_status_code(&err_msg) {
            Some(status_code) => ModelError::new(ModelErrorKind::HttpError {
                status_code,
                message: err_msg,
            }),
            None => ModelError::new(ModelErrorKind::ApiRequest(err_msg)),
        }
    }

    /// Parses strings like "bad response from server; code 503; description: ...".
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }
}

#[async_trait]
impl ScribeDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.model_name))]
    async fn generate(&self, req: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_is_extracted() {
        assert_eq!(
            GeminiClient::extract_status_code("bad response from server; code 503; description: x"),
            Some(503)
        );
        assert_eq!(GeminiClient::extract_status_code("code 429"), Some(429));
        assert_eq!(GeminiClient::extract_status_code("connection reset"), None);
    }

    #[test]
    fn errors_with_codes_become_http_errors() {
        let err = GeminiClient::parse_gemini_error("bad response from server; code 401; nope");
        assert!(matches!(err.kind, ModelErrorKind::HttpError { status_code: 401, .. }));
        assert!(err.kind.is_auth_failure());

        let err = GeminiClient::parse_gemini_error("dns failure");
        assert!(matches!(err.kind, ModelErrorKind::ApiRequest(_)));
    }

    #[test]
    fn model_names_gain_prefix() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-pro"),
            Model::Gemini25Pro
        ));
        match GeminiClient::model_name_to_enum("gemini-2.0-flash-lite") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash-lite"),
            _ => panic!("expected custom model"),
        }
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
    }
}
