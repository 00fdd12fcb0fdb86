//! Line-oriented terminal prompts and progress output.

use async_trait::async_trait;
use scribe::{
    CancellationFlag, DraftedSection, Interaction, OutlineEntry, ScribeResult, ScriptError,
    ScriptErrorKind, SectionFailure, Theme, ValidationError, ValidationErrorKind,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Prompts on stdout, reads answers from stdin.
///
/// Every read also watches the cancellation flag so Ctrl-C at a prompt ends
/// the run instead of waiting for a line.
pub struct TerminalInteraction {
    lines: Mutex<Lines<BufReader<Stdin>>>,
    cancel: CancellationFlag,
}

impl TerminalInteraction {
    pub fn new(cancel: CancellationFlag) -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            cancel,
        }
    }

    /// Print `prompt` and read one line; `None` at end of input.
    async fn ask(&self, prompt: &str) -> ScribeResult<Option<String>> {
        print!("{}", prompt);
        let _ = std::io::stdout().flush();

        let mut lines = self.lines.lock().await;
        tokio::select! {
            line = lines.next_line() => Ok(line.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read from stdin");
                None
            })),
            _ = self.cancel.cancelled() => {
                println!();
                Err(ScriptError::new(ScriptErrorKind::Cancelled).into())
            }
        }
    }

    /// Ask for the essay topic. End of input yields an empty topic.
    pub async fn ask_topic(&self) -> ScribeResult<String> {
        Ok(self
            .ask("Enter a video essay topic: ")
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl Interaction for TerminalInteraction {
    async fn choose_theme(&self, themes: &[Theme]) -> ScribeResult<usize> {
        loop {
            let prompt = format!("Choose a theme (1-{}): ", themes.len());
            let Some(answer) = self.ask(&prompt).await? else {
                return Err(ValidationError::new(ValidationErrorKind::InvalidNumber(
                    "no theme chosen before end of input".to_string(),
                ))
                .into());
            };

            match answer.trim().parse::<usize>() {
                Ok(choice) if (1..=themes.len()).contains(&choice) => return Ok(choice),
                _ => println!(
                    "Please enter a number between 1 and {}.",
                    themes.len()
                ),
            }
        }
    }

    async fn section_count(&self, default: u32) -> ScribeResult<u32> {
        loop {
            let prompt = format!("How many sections? (1-12) [{}]: ", default);
            let Some(answer) = self.ask(&prompt).await? else {
                return Ok(default);
            };

            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<u32>() {
                Ok(sections) => return Ok(sections),
                Err(_) => println!("Please enter a whole number."),
            }
        }
    }

    async fn confirm_drafting(&self, _outline: &[OutlineEntry]) -> ScribeResult<bool> {
        let answer = self
            .ask("Proceed with drafting the full script? (y/N): ")
            .await?
            .unwrap_or_default();
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn themes_ready(&self, themes: &[Theme]) {
        println!("\nThemes:");
        for (i, theme) in themes.iter().enumerate() {
            println!("  {}. {}", i + 1, theme);
        }
        println!();
    }

    fn outline_ready(&self, outline: &[OutlineEntry]) {
        println!("\nOutline:");
        for (i, entry) in outline.iter().enumerate() {
            println!("  {}. {}", i + 1, entry);
        }
        println!();
    }

    fn section_started(&self, index: usize, total: usize, outline_point: &str) {
        println!("Drafting section {}/{}: {}", index + 1, total, outline_point);
    }

    fn section_drafted(&self, section: &DraftedSection) {
        println!("  drafted {} words", section.word_count());
    }

    fn section_failed(&self, failure: &SectionFailure) {
        println!(
            "  section {} failed ({}); continuing with the rest",
            failure.index(),
            failure.reason()
        );
    }
}
