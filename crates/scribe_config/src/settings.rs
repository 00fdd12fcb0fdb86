//! Configuration structures and loaders.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use scribe_error::{ConfigError, ScribeError, ScribeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../scribe.toml");

/// Which model backend drives a run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini over HTTPS
    #[default]
    Gemini,
    /// Deterministic local fake, no network
    Offline,
}

/// Model selection and sampling settings.
///
/// ```toml
/// [model]
/// provider = "gemini"
/// name = "gemini-2.0-flash-lite"
/// temperature = 0.8
/// max_tokens = 2048
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Backend to use
    #[serde(default)]
    pub provider: ProviderKind,
    /// Provider model identifier
    pub name: String,
    /// Sampling temperature, provider default when absent
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Output token ceiling, provider default when absent
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

/// Drafting loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftingConfig {
    /// Advisory word count per section
    pub target_words: u32,
    /// Section count offered when the user does not pick one
    pub default_sections: u32,
}

/// Where and how scripts are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created on demand
    pub directory: PathBuf,
    /// Longest slug kept in a file name
    pub max_slug_length: usize,
}

/// Top-level Scribe configuration.
///
/// # Example
///
/// ```no_run
/// use scribe_config::ScribeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScribeConfig::load()?;
/// println!("drafting {} words per section", config.drafting.target_words);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScribeConfig {
    /// `[model]` table
    pub model: ModelConfig,
    /// `[drafting]` table
    pub drafting: DraftingConfig,
    /// `[output]` table
    pub output: OutputConfig,
}

impl ScribeConfig {
    /// Bundled defaults only, ignoring user files and the environment.
    pub fn bundled() -> ScribeResult<Self> {
        Self::finish(Self::base())
    }

    /// Load configuration from the bundled defaults overlaid with one file.
    ///
    /// Keys missing from the file keep their bundled values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScribeResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from file");

        if !path.exists() {
            return Err(ConfigError::new(format!(
                "Configuration file not found: {}",
                path.display()
            ))
            .into());
        }

        Self::finish(Self::base().add_source(File::from(path)))
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> ScribeResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = Self::base();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scribe/scribe.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("scribe").required(false))
            .add_source(
                Environment::with_prefix("SCRIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    fn base() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ScribeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                ScribeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScribeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ScribeResult<()> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::new("model.name must not be empty").into());
        }
        if self.drafting.target_words == 0 {
            return Err(ConfigError::new("drafting.target_words must be positive").into());
        }
        if self.drafting.default_sections == 0 {
            return Err(ConfigError::new("drafting.default_sections must be positive").into());
        }
        if self.output.max_slug_length == 0 {
            return Err(ConfigError::new("output.max_slug_length must be positive").into());
        }
        Ok(())
    }
}
