//! Model drivers for the Scribe video-essay generator.
//!
//! - [`GeminiClient`] talks to Google Gemini (feature `gemini`, on by default)
//! - [`MockClient`] replays scripted responses and records prompts, for tests
//! - [`OfflineClient`] fabricates plausible answers with no network access

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;
mod mock;
mod offline;

#[cfg(feature = "gemini")]
pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiClient, api_key_from_env};
pub use mock::{MockBehavior, MockClient, MockResponse};
pub use offline::OfflineClient;
