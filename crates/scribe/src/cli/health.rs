//! `scribe health`

use super::driver::{build_driver, load_config};
use scribe::{Health, HealthStatus, ModelError, ModelErrorKind, ScribeResult};
use std::path::Path;

/// Issue one trivial generation and report whether the model answered.
pub async fn check_health(config_path: Option<&Path>, offline: bool) -> ScribeResult<()> {
    let config = load_config(config_path)?;
    let driver = build_driver(&config, offline)?;

    let status = driver.health().await?;
    println!(
        "{} ({}): {}",
        driver.provider_name(),
        driver.model_name(),
        status
    );

    match status {
        HealthStatus::Healthy => Ok(()),
        HealthStatus::Degraded { message } | HealthStatus::Unhealthy { message } => {
            Err(ModelError::new(ModelErrorKind::Unavailable(message)).into())
        }
    }
}
