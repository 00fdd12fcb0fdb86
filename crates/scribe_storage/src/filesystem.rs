//! Filesystem-backed script storage.

use crate::{ScriptStorage, render_script, script_file_name};
use chrono::Local;
use scribe_core::Script;
use scribe_error::{ScribeResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Writes scripts as text files into one output directory.
///
/// Writes go to a hidden temp file in the same directory and are renamed
/// into place, so a reader never sees a partial script. When two saves land
/// in the same second the later one gets a `_2`, `_3`, ... suffix.
#[derive(Debug, Clone)]
pub struct FileSystemScriptStorage {
    base_path: PathBuf,
    max_slug_length: usize,
}

impl FileSystemScriptStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the output directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>, max_slug_length: usize) -> ScribeResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened script storage");
        Ok(Self {
            base_path,
            max_slug_length,
        })
    }

    /// Output directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    async fn free_path(&self, file_name: &str) -> ScribeResult<PathBuf> {
        let candidate = self.base_path.join(file_name);
        if !Self::exists(&candidate).await? {
            return Ok(candidate);
        }

        let stem = file_name.trim_end_matches(".txt");
        let mut n = 2;
        loop {
            let candidate = self.base_path.join(format!("{}_{}.txt", stem, n));
            if !Self::exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    async fn exists(path: &Path) -> ScribeResult<bool> {
        tokio::fs::try_exists(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidPath(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        })
    }
}

/// Read a saved script file as text.
#[tracing::instrument]
pub async fn read_script(path: &Path) -> ScribeResult<String> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
        } else {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        }
    })?;

    tracing::debug!(bytes = text.len(), "Loaded script");
    Ok(text)
}

#[async_trait::async_trait]
impl ScriptStorage for FileSystemScriptStorage {
    #[tracing::instrument(skip(self, script), fields(topic = %script.topic(), sections = script.sections().len()))]
    async fn save(&self, script: &Script) -> ScribeResult<PathBuf> {
        let now = Local::now();
        let file_name = script_file_name(script.topic().as_str(), self.max_slug_length, &now);
        let contents = render_script(script, &now);

        tokio::fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.base_path.display(),
                e
            )))
        })?;

        let path = self.free_path(&file_name).await?;
        let temp_path = self.base_path.join(format!(".{}.tmp", file_name));

        tokio::fs::write(&temp_path, contents.as_bytes())
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    temp_path.display(),
                    e
                )))
            })?;

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(
            path = %path.display(),
            bytes = contents.len(),
            words = script.word_count(),
            "Saved script"
        );
        Ok(path)
    }

    async fn load(&self, path: &Path) -> ScribeResult<String> {
        read_script(path).await
    }
}
