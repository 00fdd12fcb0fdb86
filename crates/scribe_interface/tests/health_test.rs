use async_trait::async_trait;
use scribe_core::{GenerateRequest, GenerateResponse};
use scribe_error::{ModelError, ModelErrorKind, ScribeResult};
use scribe_interface::{Health, HealthStatus, ScribeDriver};

struct Canned(Option<&'static str>);

#[async_trait]
impl ScribeDriver for Canned {
    async fn generate(&self, _req: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        match self.0 {
            Some(text) => Ok(GenerateResponse::from_text(text)),
            None => Err(ModelError::new(ModelErrorKind::Unavailable("down".into())).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-1"
    }
}

#[tokio::test]
async fn health_reports_healthy_on_text() {
    let status = Canned(Some("OK")).health().await.unwrap();
    assert!(status.is_healthy());
}

#[tokio::test]
async fn health_reports_degraded_on_blank_text() {
    let status = Canned(Some("  ")).health().await.unwrap();
    assert!(matches!(status, HealthStatus::Degraded { .. }));
}

#[tokio::test]
async fn health_reports_unhealthy_on_error_through_box() {
    let driver: Box<dyn ScribeDriver> = Box::new(Canned(None));
    let status = driver.health().await.unwrap();
    match status {
        HealthStatus::Unhealthy { message } => assert!(message.contains("down")),
        other => panic!("unexpected status {other}"),
    }
}
