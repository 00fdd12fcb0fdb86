//! Script generation pipeline for Scribe.
//!
//! A run turns a topic into a saved video-essay script in four model-backed
//! steps:
//!
//! 1. [`ThemeGenerator`] brainstorms candidate themes
//! 2. the caller picks one through an [`Interaction`]
//! 3. [`OutlineGenerator`] produces an ordered outline
//! 4. [`SectionDrafter`] writes each section, seeing everything written so far
//!
//! [`ScriptOrchestrator`] sequences the steps, skips sections that fail, and
//! hands the finished [`Script`](scribe_core::Script) to a
//! [`ScriptStorage`](scribe_storage::ScriptStorage).
//!
//! # Example
//!
//! ```no_run
//! use scribe_models::OfflineClient;
//! use scribe_narrative::{FixedInteraction, RunRequest, ScriptOrchestrator};
//! use scribe_storage::FileSystemScriptStorage;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemScriptStorage::new("outputs", 50)?;
//! let mut orchestrator =
//!     ScriptOrchestrator::new(OfflineClient::new(), storage, FixedInteraction::new(1));
//!
//! let run = orchestrator.run(RunRequest::new("The Roman Empire")).await?;
//! println!("saved to {}", run.path().display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cancel;
mod drafter;
mod extraction;
mod generators;
mod interaction;
mod orchestrator;
mod prompts;

pub use cancel::CancellationFlag;
pub use drafter::{DEFAULT_TARGET_WORDS, SectionDrafter};
pub use extraction::extract_list;
pub use generators::{MAX_SECTIONS, MIN_SECTIONS, OutlineGenerator, Sampling, ThemeGenerator};
pub use interaction::{FixedInteraction, Interaction};
pub use orchestrator::{RunRequest, RunState, ScriptOrchestrator, ScriptRun, ScriptSettings};
pub use prompts::{DraftPrompt, THEME_COUNT, brainstorm_prompt, outline_prompt};
