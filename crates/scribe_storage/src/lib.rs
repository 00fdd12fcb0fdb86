//! Script persistence.
//!
//! A finished [`Script`](scribe_core::Script) is written as one UTF-8 text
//! file named `script_<slug>_<YYYYMMDD_HHMMSS>.txt`:
//!
//! ```text
//! VIDEO ESSAY SCRIPT
//! Topic: The Roman Empire
//! Theme: Rome never really fell.
//! Generated: 2024-05-01 12:30:00
//!
//! OUTLINE:
//! 1. Introduction
//! 2. The long decline
//!
//! SCRIPT:
//! I want to start with a confession...
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod render;
mod storage;

pub use filesystem::{FileSystemScriptStorage, read_script};
pub use render::{render_script, script_file_name, slugify};
pub use storage::ScriptStorage;
