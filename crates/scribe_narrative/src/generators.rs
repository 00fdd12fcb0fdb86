//! Theme brainstorming and outlining.

use crate::extract_list;
use crate::prompts::{THEME_COUNT, brainstorm_prompt, outline_prompt};
use scribe_core::{GenerateRequest, OutlineEntry, Theme, Topic};
use scribe_error::ScribeResult;
use scribe_interface::ScribeDriver;
use tracing::{debug, info, instrument, warn};

/// Largest outline the pipeline will ask for.
pub const MAX_SECTIONS: u32 = 12;

/// Smallest outline the pipeline will ask for.
pub const MIN_SECTIONS: u32 = 1;

/// Sampling settings shared by every generation call of a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sampling {
    /// Sampling temperature, provider default when `None`
    pub temperature: Option<f32>,
    /// Output token ceiling, provider default when `None`
    pub max_tokens: Option<u32>,
}

impl Sampling {
    pub(crate) fn request(&self, prompt: String) -> ScribeResult<GenerateRequest> {
        GenerateRequest::from_prompt(prompt, self.temperature, self.max_tokens)
    }
}

/// Asks the model for candidate themes for a topic.
#[derive(Debug, Clone)]
pub struct ThemeGenerator<D> {
    driver: D,
    sampling: Sampling,
}

impl<D: ScribeDriver> ThemeGenerator<D> {
    /// Create a generator over `driver`.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            sampling: Sampling::default(),
        }
    }

    /// Use these sampling settings for every call.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// One model call, one extraction, no retry.
    ///
    /// Any non-empty list is accepted; a count other than five is logged
    /// and passed through untouched.
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn generate_themes(&self, topic: &Topic) -> ScribeResult<Vec<Theme>> {
        let prompt = brainstorm_prompt(topic);
        debug!(prompt_len = prompt.len(), "Requesting themes");

        let response = self.driver.generate(&self.sampling.request(prompt)?).await?;
        let themes = extract_list(&response.text())?;

        if themes.len() != THEME_COUNT {
            warn!(expected = THEME_COUNT, got = themes.len(), "Unexpected number of themes");
        }
        info!(count = themes.len(), "Themes generated");
        Ok(themes)
    }
}

/// Asks the model for an ordered outline.
#[derive(Debug, Clone)]
pub struct OutlineGenerator<D> {
    driver: D,
    sampling: Sampling,
}

impl<D: ScribeDriver> OutlineGenerator<D> {
    /// Create a generator over `driver`.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            sampling: Sampling::default(),
        }
    }

    /// Use these sampling settings for every call.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Clamp a requested section count to `[MIN_SECTIONS, MAX_SECTIONS]`.
    pub fn clamp_sections(requested: u32) -> u32 {
        requested.clamp(MIN_SECTIONS, MAX_SECTIONS)
    }

    /// The section count is clamped before the prompt is built. The
    /// extracted list is returned as-is even when its length differs.
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn generate_outline(
        &self,
        topic: &Topic,
        theme: &str,
        section_count: u32,
    ) -> ScribeResult<Vec<OutlineEntry>> {
        let sections = Self::clamp_sections(section_count);
        if sections != section_count {
            warn!(requested = section_count, clamped = sections, "Section count clamped");
        }

        let prompt = outline_prompt(topic, theme, sections);
        debug!(prompt_len = prompt.len(), sections, "Requesting outline");

        let response = self.driver.generate(&self.sampling.request(prompt)?).await?;
        let outline = extract_list(&response.text())?;

        if outline.len() != sections as usize {
            warn!(requested = sections, got = outline.len(), "Outline length differs from request");
        }
        info!(count = outline.len(), "Outline generated");
        Ok(outline)
    }
}
