//! Scribe - video-essay scripts from a single topic
//!
//! Scribe brainstorms themes for a topic, outlines the chosen theme, drafts
//! each section in a first-person voice while feeding everything written so
//! far back into the next prompt, and saves the result as a text file.
//!
//! # Quick Start
//!
//! ```no_run
//! use scribe::{FileSystemScriptStorage, FixedInteraction, OfflineClient, RunRequest, ScriptOrchestrator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemScriptStorage::new("outputs", 50)?;
//! let mut orchestrator =
//!     ScriptOrchestrator::new(OfflineClient::new(), storage, FixedInteraction::new(1));
//!
//! let run = orchestrator.run(RunRequest::new("The Dune novels")).await?;
//! println!("{} words saved to {}", run.script().word_count(), run.path().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry to stdout
//! - `api` - enable tests that call the real Gemini API
//!
//! # Architecture
//!
//! - `scribe_error` - error types
//! - `scribe_core` - request/response and script types
//! - `scribe_interface` - `ScribeDriver` trait
//! - `scribe_config` - layered configuration
//! - `scribe_models` - Gemini, mock and offline drivers
//! - `scribe_storage` - script files on disk
//! - `scribe_narrative` - extraction, generators and the run orchestrator
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use scribe_config::*;
pub use scribe_core::*;
pub use scribe_error::*;
pub use scribe_interface::*;
pub use scribe_models::*;
pub use scribe_narrative::*;
pub use scribe_storage::*;

mod exit;
mod logging;

pub use exit::exit_code;
pub use logging::init_tracing;

#[cfg(feature = "observability")]
pub mod observability;
