//! End-to-end script run: brainstorm, choose, outline, draft, persist.
//!
//! ```text
//! Idle → ThemesPending → ThemeChosen → OutlinePending → OutlineReady
//!      → Drafting → Persisting → Done
//! ```
//!
//! Any state can move to `Aborted`. Failures before drafting end the run;
//! a failed section is recorded and skipped.

use crate::{
    CancellationFlag, Interaction, OutlineGenerator, Sampling, SectionDrafter, ThemeGenerator,
};
use derive_getters::Getters;
use scribe_core::{DraftedSection, Script, SectionFailure, Theme, Topic};
use scribe_error::{
    ScribeError, ScribeErrorKind, ScribeResult, ScriptError, ScriptErrorKind, ValidationError,
    ValidationErrorKind,
};
use scribe_interface::ScribeDriver;
use scribe_storage::ScriptStorage;
use std::path::PathBuf;
use std::sync::Arc;

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum RunState {
    /// Nothing has happened yet
    Idle,
    /// Waiting on the brainstorm call
    ThemesPending,
    /// A theme has been selected
    ThemeChosen,
    /// Waiting on the outline call
    OutlinePending,
    /// Outline in hand, drafting not started
    OutlineReady,
    /// Sections are being drafted
    Drafting,
    /// Writing the script out
    Persisting,
    /// Script saved
    Done,
    /// The run stopped early
    Aborted,
}

/// Knobs for a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptSettings {
    /// Advisory words per section
    pub target_words: u32,
    /// Section count offered when the caller does not fix one
    pub default_sections: u32,
    /// Sampling settings for every model call
    pub sampling: Sampling,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            target_words: crate::DEFAULT_TARGET_WORDS,
            default_sections: 8,
            sampling: Sampling::default(),
        }
    }
}

/// Inputs of a single run. Unset fields are asked of the [`Interaction`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunRequest {
    /// Raw topic as typed; trimmed and validated by the run
    pub topic: String,
    /// 1-based theme choice
    pub theme: Option<usize>,
    /// Requested outline length, clamped to 1..=12
    pub sections: Option<u32>,
    /// Skip the confirmation question
    pub assume_yes: bool,
}

impl RunRequest {
    /// A request that asks for everything but the topic.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Getters)]
pub struct ScriptRun {
    /// The assembled script
    script: Script,
    /// Where it was written
    path: PathBuf,
    /// Sections that failed and were skipped
    failures: Vec<SectionFailure>,
    /// Every state the run passed through
    states: Vec<RunState>,
}

impl ScriptRun {
    /// Number of outline entries attempted.
    pub fn attempted(&self) -> usize {
        self.script.outline().len()
    }
}

/// Drives one script run at a time and owns its in-progress script.
///
/// After a failed run, [`script`](Self::script) and
/// [`failures`](Self::failures) still describe what was produced, so a
/// persistence failure can be reported without losing the text.
pub struct ScriptOrchestrator<D, S, I> {
    themes: ThemeGenerator<Arc<D>>,
    outliner: OutlineGenerator<Arc<D>>,
    drafter: SectionDrafter<Arc<D>>,
    storage: S,
    interaction: I,
    settings: ScriptSettings,
    cancel: CancellationFlag,
    state: RunState,
    history: Vec<RunState>,
    script: Option<Script>,
    failures: Vec<SectionFailure>,
}

impl<D, S, I> ScriptOrchestrator<D, S, I>
where
    D: ScribeDriver,
    S: ScriptStorage,
    I: Interaction,
{
    /// Build an orchestrator with default settings and its own cancellation flag.
    pub fn new(driver: D, storage: S, interaction: I) -> Self {
        let driver = Arc::new(driver);
        Self {
            themes: ThemeGenerator::new(Arc::clone(&driver)),
            outliner: OutlineGenerator::new(Arc::clone(&driver)),
            drafter: SectionDrafter::new(driver),
            storage,
            interaction,
            settings: ScriptSettings::default(),
            cancel: CancellationFlag::new(),
            state: RunState::Idle,
            history: vec![RunState::Idle],
            script: None,
            failures: Vec::new(),
        }
    }

    /// Apply run settings to every component.
    pub fn with_settings(mut self, settings: ScriptSettings) -> Self {
        self.themes = self.themes.with_sampling(settings.sampling);
        self.outliner = self.outliner.with_sampling(settings.sampling);
        self.drafter = self
            .drafter
            .with_sampling(settings.sampling)
            .with_target_words(settings.target_words);
        self.settings = settings;
        self
    }

    /// Share an externally owned cancellation flag.
    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// States visited by the most recent run.
    pub fn history(&self) -> &[RunState] {
        &self.history
    }

    /// Script of the most recent run, complete or not.
    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    /// Section failures of the most recent run.
    pub fn failures(&self) -> &[SectionFailure] {
        &self.failures
    }

    /// The interaction this orchestrator consults.
    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "Run state change");
        self.state = next;
        self.history.push(next);
    }

    fn abort<T>(&mut self, err: impl Into<ScribeError>) -> ScribeResult<T> {
        let err = err.into();
        tracing::error!(state = %self.state, error = %err, "Script run aborted");
        self.transition(RunState::Aborted);
        Err(err)
    }

    fn cancelled(&self) -> bool {
        if self.cancel.is_cancelled() {
            tracing::warn!(state = %self.state, "Cancellation requested");
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.state = RunState::Idle;
        self.history = vec![RunState::Idle];
        self.script = None;
        self.failures.clear();
    }

    /// Run the whole pipeline for one topic.
    ///
    /// # Errors
    ///
    /// - `Validation(EmptyTopic)` before any model call when the topic is blank
    /// - `Script(ThemeGeneration | NoThemes)` when brainstorming fails
    /// - `Validation(ThemeIndexOutOfRange)` for a bad theme choice
    /// - `Script(OutlineGeneration | NoOutline)` when outlining fails
    /// - `Script(EmptyScript)` when every section failed
    /// - `Script(Cancelled)` when cancelled or the outline was declined
    /// - `Storage(..)` when the script could not be written
    #[tracing::instrument(skip(self, request), fields(topic = %request.topic))]
    pub async fn run(&mut self, request: RunRequest) -> ScribeResult<ScriptRun> {
        self.reset();

        let topic = match Topic::new(request.topic.as_str()) {
            Ok(topic) => topic,
            Err(e) => return self.abort(e),
        };
        if self.cancelled() {
            return self.abort(ScriptError::new(ScriptErrorKind::Cancelled));
        }

        self.transition(RunState::ThemesPending);
        let themes = match self.themes.generate_themes(&topic).await {
            Ok(themes) if themes.is_empty() => {
                return self.abort(ScriptError::new(ScriptErrorKind::NoThemes));
            }
            Ok(themes) => themes,
            Err(e) => {
                return self.abort(ScriptError::new(ScriptErrorKind::ThemeGeneration(
                    describe(&e),
                )));
            }
        };

        self.interaction.themes_ready(&themes);
        let theme = match self.select_theme(&request, &themes).await {
            Ok(theme) => theme,
            Err(e) => return self.abort(e),
        };
        self.transition(RunState::ThemeChosen);
        tracing::info!(theme = %theme, "Theme chosen");

        let sections = match request.sections {
            Some(sections) => sections,
            None => match self
                .interaction
                .section_count(self.settings.default_sections)
                .await
            {
                Ok(sections) => sections,
                Err(e) => return self.abort(e),
            },
        };
        if self.cancelled() {
            return self.abort(ScriptError::new(ScriptErrorKind::Cancelled));
        }

        self.transition(RunState::OutlinePending);
        let outline = match self.outliner.generate_outline(&topic, &theme, sections).await {
            Ok(outline) if outline.is_empty() => {
                return self.abort(ScriptError::new(ScriptErrorKind::NoOutline));
            }
            Ok(outline) => outline,
            Err(e) => {
                return self.abort(ScriptError::new(ScriptErrorKind::OutlineGeneration(
                    describe(&e),
                )));
            }
        };
        self.transition(RunState::OutlineReady);
        self.interaction.outline_ready(&outline);

        if !request.assume_yes {
            match self.interaction.confirm_drafting(&outline).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::info!("Drafting declined");
                    return self.abort(ScriptError::new(ScriptErrorKind::Cancelled));
                }
                Err(e) => return self.abort(e),
            }
        }

        self.transition(RunState::Drafting);
        let mut script = Script::new(topic, theme, outline);
        let drafted = self.draft_all(&mut script).await;
        self.script = Some(script.clone());
        if let Err(e) = drafted {
            return self.abort(e);
        }

        if script.is_empty() {
            return self.abort(ScriptError::new(ScriptErrorKind::EmptyScript));
        }
        if self.cancelled() {
            return self.abort(ScriptError::new(ScriptErrorKind::Cancelled));
        }

        self.transition(RunState::Persisting);
        let path = match self.storage.save(&script).await {
            Ok(path) => path,
            Err(e) => return self.abort(e),
        };
        self.transition(RunState::Done);

        tracing::info!(
            path = %path.display(),
            drafted = script.sections().len(),
            failed = self.failures.len(),
            words = script.word_count(),
            "Script run complete"
        );

        Ok(ScriptRun {
            script,
            path,
            failures: self.failures.clone(),
            states: self.history.clone(),
        })
    }

    async fn select_theme(&self, request: &RunRequest, themes: &[Theme]) -> ScribeResult<Theme> {
        let choice = match request.theme {
            Some(choice) => choice,
            None => self.interaction.choose_theme(themes).await?,
        };

        match choice.checked_sub(1).and_then(|i| themes.get(i)) {
            Some(theme) => Ok(theme.clone()),
            None => Err(ValidationError::new(ValidationErrorKind::ThemeIndexOutOfRange {
                index: choice,
                available: themes.len(),
            })
            .into()),
        }
    }

    /// Draft every outline entry in order, threading the growing body
    /// forward. Only cancellation stops the loop early.
    async fn draft_all(&mut self, script: &mut Script) -> ScribeResult<()> {
        let outline = script.outline().clone();
        let total = outline.len();

        for (index, point) in outline.iter().enumerate() {
            if self.cancelled() {
                return Err(ScriptError::new(ScriptErrorKind::Cancelled).into());
            }

            let number = index + 1;
            self.interaction.section_started(index, total, point);
            let result = self
                .drafter
                .draft_section(number, script.topic(), script.theme(), point, script.body())
                .await;

            match result {
                Ok(text) => {
                    let section = DraftedSection::new(number, point.as_str(), text);
                    tracing::info!(
                        section = number,
                        total,
                        words = section.word_count(),
                        "Section drafted"
                    );
                    self.interaction.section_drafted(&section);
                    script.push_section(section);
                }
                Err(e) => {
                    let failure = SectionFailure::new(number, point.as_str(), describe(&e));
                    tracing::warn!(section = number, total, error = %e, "Section failed, continuing");
                    self.interaction.section_failed(&failure);
                    self.failures.push(failure);
                }
            }
        }

        Ok(())
    }
}

/// The innermost human-readable reason, without source locations.
fn describe(err: &ScribeError) -> String {
    match err.kind() {
        ScribeErrorKind::Model(e) => e.kind.to_string(),
        ScribeErrorKind::Extraction(e) => e.kind.to_string(),
        ScribeErrorKind::Script(e) => match &e.kind {
            ScriptErrorKind::Draft { message, .. } => message.clone(),
            other => other.to_string(),
        },
        ScribeErrorKind::Validation(e) => e.kind.to_string(),
        ScribeErrorKind::Storage(e) => e.kind.to_string(),
        other => other.to_string(),
    }
}
