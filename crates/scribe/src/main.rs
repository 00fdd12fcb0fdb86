//! Scribe CLI binary.
//!
//! - Generate a video-essay script from a topic
//! - Check that the configured model answers
//! - Print a saved script

use clap::Parser;
use scribe::{CancellationFlag, ScribeResult, exit_code};
use std::process::ExitCode;

mod cli;

use cli::{Cli, Commands, RunOptions, check_health, run_script, show_script};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Pick up GEMINI_API_KEY and friends from a local .env
    dotenvy::dotenv().ok();

    #[cfg(feature = "observability")]
    let provider = {
        use scribe::observability::{ObservabilityConfig, init_observability};
        let level = if cli.verbose { "debug" } else { "info" };
        let config = ObservabilityConfig::new("scribe").with_log_level(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        );
        match init_observability(config) {
            Ok(provider) => Some(provider),
            Err(e) => {
                eprintln!("Failed to initialize observability: {}", e);
                scribe::init_tracing(cli.verbose);
                None
            }
        }
    };
    #[cfg(not(feature = "observability"))]
    scribe::init_tracing(cli.verbose);

    let cancel = CancellationFlag::new();
    spawn_interrupt_handler(cancel.clone());

    let result = dispatch(cli, cancel).await;

    #[cfg(feature = "observability")]
    if let Some(provider) = provider {
        scribe::observability::shutdown_observability(&provider);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn dispatch(cli: Cli, cancel: CancellationFlag) -> ScribeResult<()> {
    match cli.command {
        Commands::Run {
            topic,
            theme,
            sections,
            yes,
            offline,
            output,
        } => {
            let opts = RunOptions {
                topic,
                theme,
                sections,
                yes,
                offline,
                output,
                config: cli.config,
            };
            run_script(opts, cancel).await
        }

        Commands::Health { offline } => check_health(cli.config.as_deref(), offline).await,

        Commands::Show { path } => show_script(&path).await,
    }
}

/// First Ctrl-C asks the run to stop; a second one exits immediately.
fn spawn_interrupt_handler(cancel: CancellationFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::warn!("Interrupted, stopping after the current step (Ctrl-C again to quit)");
        cancel.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}
