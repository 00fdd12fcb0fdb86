//! Google Gemini driver.

mod client;

pub use client::{DEFAULT_GEMINI_MODEL, GeminiClient, api_key_from_env};
