//! Configuration loading and model selection shared by the commands.

use scribe::{
    GeminiClient, OfflineClient, ProviderKind, ScribeConfig, ScribeDriver, ScribeResult,
};
use std::path::Path;

/// Load `--config` when given, otherwise the layered defaults.
pub fn load_config(path: Option<&Path>) -> ScribeResult<ScribeConfig> {
    match path {
        Some(path) => ScribeConfig::from_file(path),
        None => ScribeConfig::load(),
    }
}

/// The driver for this invocation. `offline` overrides the configured provider.
pub fn build_driver(config: &ScribeConfig, offline: bool) -> ScribeResult<Box<dyn ScribeDriver>> {
    let provider = if offline {
        ProviderKind::Offline
    } else {
        config.model.provider
    };

    let driver: Box<dyn ScribeDriver> = match provider {
        ProviderKind::Offline => Box::new(OfflineClient::new()),
        ProviderKind::Gemini => Box::new(GeminiClient::with_model(&config.model.name)?),
    };

    tracing::debug!(
        provider = driver.provider_name(),
        model = driver.model_name(),
        "Model driver ready"
    );
    Ok(driver)
}
