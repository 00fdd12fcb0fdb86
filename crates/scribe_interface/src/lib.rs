//! Trait definitions for the Scribe video-essay generator.
//!
//! This crate defines the model collaborator seam: anything that can turn a
//! prompt into text implements [`ScribeDriver`].

mod traits;
mod types;

pub use traits::{Health, ScribeDriver};
pub use types::HealthStatus;
