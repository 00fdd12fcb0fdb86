//! `scribe run`

use super::driver::{build_driver, load_config};
use super::terminal::TerminalInteraction;
use scribe::{
    CancellationFlag, FileSystemScriptStorage, RunRequest, Sampling, ScribeConfig, ScribeResult,
    ScriptOrchestrator, ScriptRun, ScriptSettings,
};
use std::path::PathBuf;

/// Flags of `scribe run`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub topic: Option<String>,
    pub theme: Option<usize>,
    pub sections: Option<u32>,
    pub yes: bool,
    pub offline: bool,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

fn settings_from(config: &ScribeConfig) -> ScriptSettings {
    ScriptSettings {
        target_words: config.drafting.target_words,
        default_sections: config.drafting.default_sections,
        sampling: Sampling {
            temperature: config.model.temperature,
            max_tokens: config.model.max_tokens,
        },
    }
}

/// Generate one script interactively and print a summary.
///
/// When the run fails after drafting (for example the file could not be
/// written), the drafted text is printed to stdout so it is not lost.
pub async fn run_script(opts: RunOptions, cancel: CancellationFlag) -> ScribeResult<()> {
    let mut config = load_config(opts.config.as_deref())?;
    if let Some(output) = opts.output {
        config.output.directory = output;
    }

    let driver = build_driver(&config, opts.offline)?;
    let storage =
        FileSystemScriptStorage::new(&config.output.directory, config.output.max_slug_length)?;
    let interaction = TerminalInteraction::new(cancel.clone());

    let topic = match opts.topic {
        Some(topic) => topic,
        None => interaction.ask_topic().await?,
    };

    let mut orchestrator = ScriptOrchestrator::new(driver, storage, interaction)
        .with_settings(settings_from(&config))
        .with_cancellation(cancel);

    let request = RunRequest {
        topic,
        theme: opts.theme,
        sections: opts.sections,
        assume_yes: opts.yes,
    };

    match orchestrator.run(request).await {
        Ok(run) => {
            print_summary(&run);
            Ok(())
        }
        Err(e) => {
            if let Some(script) = orchestrator.script().filter(|s| !s.is_empty()) {
                eprintln!("Run failed after drafting; script text follows on stdout.");
                println!("{}", script.body());
            }
            Err(e)
        }
    }
}

fn print_summary(run: &ScriptRun) {
    println!();
    println!("Script saved to {}", run.path().display());
    println!(
        "Sections drafted: {}/{}",
        run.script().sections().len(),
        run.attempted()
    );
    for failure in run.failures() {
        println!(
            "  failed section {} \"{}\": {}",
            failure.index(),
            failure.outline_point(),
            failure.reason()
        );
    }
    println!("Total words: {}", run.script().word_count());
}
