//! Configuration for the Scribe video-essay generator.
//!
//! Values are layered with the `config` crate. Later sources win:
//! - Bundled defaults (`scribe.toml`, compiled in)
//! - `~/.config/scribe/scribe.toml`
//! - `./scribe.toml`
//! - `SCRIBE__<SECTION>__<KEY>` environment variables

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{DraftingConfig, ModelConfig, OutputConfig, ProviderKind, ScribeConfig};
