//! Trait definitions for model backends and their capabilities.

use crate::HealthStatus;
use async_trait::async_trait;
use scribe_core::{GenerateRequest, GenerateResponse};
use scribe_error::ScribeResult;
use std::sync::Arc;

/// Core trait that all model backends must implement.
///
/// One call, one answer: implementations never retry internally, and any
/// transport, auth or quota failure surfaces as a `ModelError`.
#[async_trait]
pub trait ScribeDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> ScribeResult<GenerateResponse>;

    /// Provider name (e.g., "gemini", "mock", "offline").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-lite").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: ScribeDriver + ?Sized> ScribeDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: ScribeDriver + ?Sized> ScribeDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Trait for backends that can report their health.
///
/// The default probe issues a single trivial generation and is available
/// to every driver.
#[async_trait]
pub trait Health: ScribeDriver {
    /// Check if the backend is available and functioning.
    async fn health(&self) -> ScribeResult<HealthStatus> {
        let request = GenerateRequest::from_prompt("Reply with the single word OK.", None, None)?;

        match self.generate(&request).await {
            Ok(response) if response.text().trim().is_empty() => {
                tracing::warn!(provider = self.provider_name(), "Health probe returned no text");
                Ok(HealthStatus::Degraded {
                    message: "model returned an empty response".to_string(),
                })
            }
            Ok(_) => {
                tracing::debug!(provider = self.provider_name(), "Health probe succeeded");
                Ok(HealthStatus::Healthy)
            }
            Err(e) => {
                tracing::warn!(provider = self.provider_name(), error = %e, "Health probe failed");
                Ok(HealthStatus::Unhealthy {
                    message: e.to_string(),
                })
            }
        }
    }
}

impl<D: ScribeDriver + ?Sized> Health for D {}
