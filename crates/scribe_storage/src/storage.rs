//! Storage trait definition.

use scribe_core::Script;
use scribe_error::ScribeResult;
use std::path::{Path, PathBuf};

/// Persistence collaborator for finished scripts.
#[async_trait::async_trait]
pub trait ScriptStorage: Send + Sync {
    /// Persist a script and return where it landed.
    ///
    /// Either the complete file exists afterwards or nothing does.
    async fn save(&self, script: &Script) -> ScribeResult<PathBuf>;

    /// Read a previously saved script back as text.
    async fn load(&self, path: &Path) -> ScribeResult<String>;
}
