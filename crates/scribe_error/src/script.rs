//! Script pipeline error types.

/// Run-level failures of the brainstorm → outline → draft → persist pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScriptErrorKind {
    /// Theme brainstorming failed
    #[display("Could not generate themes: {}", _0)]
    ThemeGeneration(String),
    /// Theme brainstorming produced nothing
    #[display("Theme generation returned no themes")]
    NoThemes,
    /// Outline creation failed
    #[display("Could not generate outline: {}", _0)]
    OutlineGeneration(String),
    /// Outline creation produced nothing
    #[display("Outline generation returned no sections")]
    NoOutline,
    /// A single section could not be drafted
    #[display("Section {} failed: {}", section, message)]
    Draft {
        /// 1-based section number
        section: usize,
        /// Error message
        message: String,
    },
    /// Every section failed, nothing to persist
    #[display("No script content was generated")]
    EmptyScript,
    /// The user interrupted or declined the run
    #[display("Script generation cancelled")]
    Cancelled,
}

/// Error type for script pipeline operations.
///
/// # Examples
///
/// ```
/// use scribe_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::EmptyScript);
/// assert!(format!("{}", err).contains("No script content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The specific error condition
    pub kind: ScriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
