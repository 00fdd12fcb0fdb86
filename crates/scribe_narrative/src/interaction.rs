//! Decisions the pipeline delegates to whoever is driving it.

use async_trait::async_trait;
use scribe_core::{DraftedSection, OutlineEntry, SectionFailure, Theme};
use scribe_error::ScribeResult;
use std::sync::Mutex;

/// User-facing decisions and progress notifications of a run.
///
/// The orchestrator only consults the decision methods for values the
/// [`RunRequest`](crate::RunRequest) did not already fix. Progress hooks
/// default to doing nothing.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Pick a theme; returns a 1-based index into `themes`.
    async fn choose_theme(&self, themes: &[Theme]) -> ScribeResult<usize>;

    /// How many outline sections to request.
    async fn section_count(&self, default: u32) -> ScribeResult<u32>;

    /// Whether to go ahead and draft this outline.
    async fn confirm_drafting(&self, outline: &[OutlineEntry]) -> ScribeResult<bool>;

    /// Themes came back from the brainstorm step.
    fn themes_ready(&self, _themes: &[Theme]) {}

    /// The outline came back and is about to be drafted or confirmed.
    fn outline_ready(&self, _outline: &[OutlineEntry]) {}

    /// A section is about to be drafted. `index` is 0-based.
    fn section_started(&self, _index: usize, _total: usize, _outline_point: &str) {}

    /// A section was drafted.
    fn section_drafted(&self, _section: &DraftedSection) {}

    /// A section failed and was skipped.
    fn section_failed(&self, _failure: &SectionFailure) {}
}

/// Canned answers, for tests and non-interactive runs.
///
/// Records every theme list it was shown.
#[derive(Debug)]
pub struct FixedInteraction {
    theme: usize,
    sections: Option<u32>,
    confirm: bool,
    seen_themes: Mutex<Vec<Vec<Theme>>>,
}

impl FixedInteraction {
    /// Always pick theme `theme` (1-based), take the default section count,
    /// and confirm drafting.
    pub fn new(theme: usize) -> Self {
        Self {
            theme,
            sections: None,
            confirm: true,
            seen_themes: Mutex::new(Vec::new()),
        }
    }

    /// Answer the section-count question with `sections`.
    pub fn with_sections(mut self, sections: u32) -> Self {
        self.sections = Some(sections);
        self
    }

    /// Answer the confirmation question with `confirm`.
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// Theme lists offered so far.
    pub fn seen_themes(&self) -> Vec<Vec<Theme>> {
        self.seen_themes
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Interaction for FixedInteraction {
    async fn choose_theme(&self, themes: &[Theme]) -> ScribeResult<usize> {
        if let Ok(mut seen) = self.seen_themes.lock() {
            seen.push(themes.to_vec());
        }
        Ok(self.theme)
    }

    async fn section_count(&self, default: u32) -> ScribeResult<u32> {
        Ok(self.sections.unwrap_or(default))
    }

    async fn confirm_drafting(&self, _outline: &[OutlineEntry]) -> ScribeResult<bool> {
        Ok(self.confirm)
    }
}
