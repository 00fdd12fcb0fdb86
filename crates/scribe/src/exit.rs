//! Process exit codes.

use scribe_error::{
    ModelErrorKind, ScribeError, ScribeErrorKind, ScriptErrorKind, ValidationErrorKind,
};

/// Map a failed run to the process exit code.
///
/// | code | meaning |
/// |------|---------|
/// | 2    | no topic |
/// | 3    | theme generation failed |
/// | 4    | invalid theme choice |
/// | 5    | outline generation failed |
/// | 6    | script could not be saved or read |
/// | 7    | every section failed |
/// | 10   | configuration or credentials |
/// | 130  | cancelled |
/// | 1    | anything else |
pub fn exit_code(err: &ScribeError) -> u8 {
    match err.kind() {
        ScribeErrorKind::Validation(e) => match e.kind {
            ValidationErrorKind::EmptyTopic => 2,
            ValidationErrorKind::ThemeIndexOutOfRange { .. }
            | ValidationErrorKind::InvalidNumber(_) => 4,
        },
        ScribeErrorKind::Script(e) => match e.kind {
            ScriptErrorKind::ThemeGeneration(_) | ScriptErrorKind::NoThemes => 3,
            ScriptErrorKind::OutlineGeneration(_) | ScriptErrorKind::NoOutline => 5,
            ScriptErrorKind::EmptyScript => 7,
            ScriptErrorKind::Cancelled => 130,
            ScriptErrorKind::Draft { .. } => 1,
        },
        ScribeErrorKind::Storage(_) => 6,
        ScribeErrorKind::Config(_) => 10,
        ScribeErrorKind::Model(e) => match &e.kind {
            ModelErrorKind::ClientCreation(_) => 10,
            kind if kind.is_auth_failure() => 10,
            _ => 1,
        },
        _ => 1,
    }
}
