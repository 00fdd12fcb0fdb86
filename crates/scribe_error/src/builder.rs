//! Errors from assembling requests with generated builders.

/// Why a builder refused to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A field was left unset or held an invalid value
    #[display("Request could not be built: {}", _0)]
    Incomplete(String),
}

/// Builder error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a builder error at the caller's location.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

/// `derive_builder` reports failures as strings.
impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(BuilderErrorKind::Incomplete(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_message_is_kept() {
        let err = BuilderError::from("messages not set".to_string());
        assert_eq!(
            err.kind(),
            &BuilderErrorKind::Incomplete("messages not set".to_string())
        );
        assert!(err.to_string().contains("messages not set"));
    }
}
