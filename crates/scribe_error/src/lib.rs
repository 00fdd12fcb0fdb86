//! Error types for the Scribe video-essay generator.
//!
//! This crate provides the foundation error types used throughout the Scribe workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scribe_error::{ScribeResult, ValidationError, ValidationErrorKind};
//!
//! fn capture_topic(raw: &str) -> ScribeResult<String> {
//!     if raw.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyTopic))?
//!     }
//!     Ok(raw.trim().to_string())
//! }
//!
//! assert!(capture_topic("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod extraction;
mod model;
mod script;
mod storage;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{ScribeError, ScribeErrorKind, ScribeResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use model::{ModelError, ModelErrorKind};
pub use script::{ScriptError, ScriptErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
