//! Drafting one section at a time.

use crate::generators::Sampling;
use crate::prompts::DraftPrompt;
use scribe_core::Topic;
use scribe_error::{ScribeError, ScribeErrorKind, ScribeResult, ScriptError, ScriptErrorKind};
use scribe_interface::ScribeDriver;
use tracing::{debug, instrument};

/// Default advisory length of a section.
pub const DEFAULT_TARGET_WORDS: u32 = 750;

/// Writes the prose for a single outline entry.
#[derive(Debug, Clone)]
pub struct SectionDrafter<D> {
    driver: D,
    sampling: Sampling,
    target_words: u32,
}

impl<D: ScribeDriver> SectionDrafter<D> {
    /// Create a drafter over `driver` aiming at [`DEFAULT_TARGET_WORDS`].
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            sampling: Sampling::default(),
            target_words: DEFAULT_TARGET_WORDS,
        }
    }

    /// Use these sampling settings for every call.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Change the advisory section length.
    pub fn with_target_words(mut self, target_words: u32) -> Self {
        self.target_words = target_words;
        self
    }

    /// Advisory section length.
    pub fn target_words(&self) -> u32 {
        self.target_words
    }

    /// Draft the section for `outline_point`, continuing from `prior_text`.
    ///
    /// `section` is the 1-based section number used in errors. The model's
    /// text is returned unmodified. Model failures and blank answers both
    /// come back as [`ScriptErrorKind::Draft`].
    #[instrument(skip(self, topic, theme, prior_text), fields(prior_len = prior_text.len()))]
    pub async fn draft_section(
        &self,
        section: usize,
        topic: &Topic,
        theme: &str,
        outline_point: &str,
        prior_text: &str,
    ) -> ScribeResult<String> {
        let prompt = DraftPrompt {
            topic,
            theme,
            outline_point,
            prior_text,
            target_words: self.target_words,
        }
        .render();
        debug!(prompt_len = prompt.len(), "Requesting section draft");

        let draft_error = |message: String| ScriptError::new(ScriptErrorKind::Draft { section, message });

        let response = self
            .driver
            .generate(&self.sampling.request(prompt)?)
            .await
            .map_err(|e| draft_error(reason(&e)))?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(draft_error("model returned no text".to_string()).into());
        }

        Ok(text)
    }
}

/// Model failures keep only their kind text; source locations stay in the logs.
fn reason(err: &ScribeError) -> String {
    match err.kind() {
        ScribeErrorKind::Model(e) => e.kind.to_string(),
        other => other.to_string(),
    }
}
