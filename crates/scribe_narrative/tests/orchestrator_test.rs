//! Full runs of the script pipeline against scripted models.

use async_trait::async_trait;
use scribe_core::Script;
use scribe_error::{
    ScribeErrorKind, ScribeResult, ScriptErrorKind, StorageError, StorageErrorKind,
    ValidationErrorKind,
};
use scribe_models::{MockClient, MockResponse};
use scribe_narrative::{
    CancellationFlag, FixedInteraction, RunRequest, RunState, ScriptOrchestrator, ScriptSettings,
};
use scribe_storage::{FileSystemScriptStorage, ScriptStorage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const THEMES: &str = r#"["Rome fell slowly.", "Rome never fell.", "Bread and circuses.", "The army ruled.", "Latin endured."]"#;

fn storage(dir: &TempDir) -> FileSystemScriptStorage {
    FileSystemScriptStorage::new(dir.path(), 50).unwrap()
}

fn script_kind(kind: &ScribeErrorKind) -> Option<&ScriptErrorKind> {
    match kind {
        ScribeErrorKind::Script(e) => Some(&e.kind),
        _ => None,
    }
}

fn files_in(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

/// Storage that always fails.
struct BrokenStorage;

#[async_trait]
impl ScriptStorage for BrokenStorage {
    async fn save(&self, _script: &Script) -> ScribeResult<PathBuf> {
        Err(StorageError::new(StorageErrorKind::FileWrite("disk full".to_string())).into())
    }

    async fn load(&self, path: &Path) -> ScribeResult<String> {
        Err(StorageError::new(StorageErrorKind::NotFound(path.display().to_string())).into())
    }
}

#[tokio::test]
async fn test_full_run_threads_prior_text() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["Opening.", "Middle.", "Ending."]"#),
        MockResponse::text("First section text."),
        MockResponse::text("Second section text."),
        MockResponse::text("Third section text."),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(
        mock.clone(),
        storage(&dir),
        FixedInteraction::new(2).with_sections(3),
    );

    let run = orchestrator.run(RunRequest::new("The Roman Empire")).await.unwrap();

    assert_eq!(run.script().theme(), "Rome never fell.");
    assert_eq!(
        run.script().body(),
        "First section text.\n\nSecond section text.\n\nThird section text."
    );
    assert!(run.failures().is_empty());
    assert_eq!(run.attempted(), 3);
    assert!(run.path().exists());
    assert_eq!(orchestrator.state(), RunState::Done);
    assert_eq!(
        run.states(),
        &vec![
            RunState::Idle,
            RunState::ThemesPending,
            RunState::ThemeChosen,
            RunState::OutlinePending,
            RunState::OutlineReady,
            RunState::Drafting,
            RunState::Persisting,
            RunState::Done,
        ]
    );

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 5);
    assert!(prompts[2].contains("very first section"));
    assert!(prompts[3].contains("First section text."));
    assert!(!prompts[3].contains("Second section text."));
    assert!(prompts[4].contains("First section text.\n\nSecond section text."));

    let saved = std::fs::read_to_string(run.path()).unwrap();
    assert!(saved.contains("Theme: Rome never fell."));
    assert!(saved.contains("OUTLINE:\n1. Opening.\n2. Middle.\n3. Ending.\n"));
}

#[tokio::test]
async fn test_failed_section_is_skipped() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One.", "Two.", "Three."]"#),
        MockResponse::text("Text one."),
        MockResponse::unavailable("overloaded"),
        MockResponse::text("Text three."),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(
        mock.clone(),
        storage(&dir),
        FixedInteraction::new(1).with_sections(3),
    );

    let run = orchestrator.run(RunRequest::new("The Roman Empire")).await.unwrap();

    assert_eq!(run.script().body(), "Text one.\n\nText three.");
    assert_eq!(run.script().sections().len(), 2);
    assert_eq!(*run.script().sections()[0].index(), 1);
    assert_eq!(*run.script().sections()[1].index(), 3);
    assert_eq!(run.failures().len(), 1);
    assert_eq!(*run.failures()[0].index(), 2);
    assert_eq!(run.failures()[0].outline_point(), "Two.");
    assert_eq!(run.failures()[0].reason(), "Model unavailable: overloaded");
    assert!(mock.prompts()[4].contains("Text one."));
    assert_eq!(orchestrator.state(), RunState::Done);
}

#[tokio::test]
async fn test_empty_topic_makes_no_model_call() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_success(THEMES);
    let mut orchestrator = ScriptOrchestrator::new(mock.clone(), storage(&dir), FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("   ")).await.unwrap_err();

    match err.kind() {
        ScribeErrorKind::Validation(e) => assert_eq!(e.kind, ValidationErrorKind::EmptyTopic),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.call_count(), 0);
    assert_eq!(orchestrator.state(), RunState::Aborted);
}

#[tokio::test]
async fn test_section_count_clamped_to_twelve() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["Only."]"#),
        MockResponse::text("Only text."),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(mock.clone(), storage(&dir), FixedInteraction::new(1));

    let request = RunRequest {
        sections: Some(20),
        ..RunRequest::new("The Roman Empire")
    };
    orchestrator.run(request).await.unwrap();

    assert!(mock.prompts()[1].contains("12-part outline"));
}

#[tokio::test]
async fn test_theme_failure_aborts() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_success("No list for you.");
    let mut orchestrator = ScriptOrchestrator::new(mock.clone(), storage(&dir), FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert!(matches!(
        script_kind(err.kind()),
        Some(ScriptErrorKind::ThemeGeneration(_))
    ));
    assert_eq!(mock.call_count(), 1);
    assert_eq!(files_in(&dir), 0);
}

#[tokio::test]
async fn test_empty_theme_list_aborts() {
    let dir = TempDir::new().unwrap();
    let mut orchestrator =
        ScriptOrchestrator::new(MockClient::new_success("[]"), storage(&dir), FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert_eq!(script_kind(err.kind()), Some(&ScriptErrorKind::NoThemes));
}

#[tokio::test]
async fn test_out_of_range_theme_aborts() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_success(THEMES);
    let mut orchestrator = ScriptOrchestrator::new(mock.clone(), storage(&dir), FixedInteraction::new(6));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    match err.kind() {
        ScribeErrorKind::Validation(e) => assert_eq!(
            e.kind,
            ValidationErrorKind::ThemeIndexOutOfRange {
                index: 6,
                available: 5
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mock.call_count(), 1);
    assert_eq!(orchestrator.interaction().seen_themes().len(), 1);
}

#[tokio::test]
async fn test_zero_theme_index_aborts() {
    let dir = TempDir::new().unwrap();
    let mut orchestrator =
        ScriptOrchestrator::new(MockClient::new_success(THEMES), storage(&dir), FixedInteraction::new(1));

    let request = RunRequest {
        theme: Some(0),
        ..RunRequest::new("Tea")
    };
    let err = orchestrator.run(request).await.unwrap_err();

    assert!(matches!(err.kind(), ScribeErrorKind::Validation(_)));
    assert!(orchestrator.interaction().seen_themes().is_empty());
}

#[tokio::test]
async fn test_outline_failure_aborts() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::unavailable("quota"),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(mock, storage(&dir), FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    match script_kind(err.kind()) {
        Some(ScriptErrorKind::OutlineGeneration(reason)) => assert!(reason.contains("quota")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_outline_aborts() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![MockResponse::text(THEMES), MockResponse::text("[]")]);
    let mut orchestrator = ScriptOrchestrator::new(mock, storage(&dir), FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert_eq!(script_kind(err.kind()), Some(&ScriptErrorKind::NoOutline));
}

#[tokio::test]
async fn test_all_sections_failing_is_empty_script() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One.", "Two."]"#),
        MockResponse::unavailable("down"),
        MockResponse::text("   "),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(mock, storage(&dir), FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert_eq!(script_kind(err.kind()), Some(&ScriptErrorKind::EmptyScript));
    assert_eq!(orchestrator.failures().len(), 2);
    assert_eq!(files_in(&dir), 0);
}

#[tokio::test]
async fn test_declined_outline_is_cancelled_without_drafting() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One."]"#),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(
        mock.clone(),
        storage(&dir),
        FixedInteraction::new(1).with_confirm(false),
    );

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert_eq!(script_kind(err.kind()), Some(&ScriptErrorKind::Cancelled));
    assert_eq!(mock.call_count(), 2);
    assert_eq!(files_in(&dir), 0);
}

#[tokio::test]
async fn test_assume_yes_skips_confirmation() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One."]"#),
        MockResponse::text("Done."),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(
        mock,
        storage(&dir),
        FixedInteraction::new(1).with_confirm(false),
    );

    let request = RunRequest {
        assume_yes: true,
        ..RunRequest::new("Tea")
    };

    assert!(orchestrator.run(request).await.is_ok());
}

#[tokio::test]
async fn test_cancellation_before_start_makes_no_call() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_success(THEMES);
    let cancel = CancellationFlag::new();
    cancel.cancel();
    let mut orchestrator = ScriptOrchestrator::new(mock.clone(), storage(&dir), FixedInteraction::new(1))
        .with_cancellation(cancel);

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert_eq!(script_kind(err.kind()), Some(&ScriptErrorKind::Cancelled));
    assert_eq!(mock.call_count(), 0);
}

/// Cancels the shared flag as soon as the first section is drafted.
struct CancelAfterFirst {
    inner: FixedInteraction,
    cancel: CancellationFlag,
}

#[async_trait]
impl scribe_narrative::Interaction for CancelAfterFirst {
    async fn choose_theme(&self, themes: &[String]) -> ScribeResult<usize> {
        self.inner.choose_theme(themes).await
    }

    async fn section_count(&self, default: u32) -> ScribeResult<u32> {
        self.inner.section_count(default).await
    }

    async fn confirm_drafting(&self, outline: &[String]) -> ScribeResult<bool> {
        self.inner.confirm_drafting(outline).await
    }

    fn section_drafted(&self, _section: &scribe_core::DraftedSection) {
        self.cancel.cancel();
    }
}

#[tokio::test]
async fn test_cancellation_mid_draft_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One.", "Two."]"#),
        MockResponse::text("First."),
        MockResponse::text("Second."),
    ]);
    let cancel = CancellationFlag::new();
    let interaction = CancelAfterFirst {
        inner: FixedInteraction::new(1),
        cancel: cancel.clone(),
    };
    let mut orchestrator =
        ScriptOrchestrator::new(mock.clone(), storage(&dir), interaction).with_cancellation(cancel);

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert_eq!(script_kind(err.kind()), Some(&ScriptErrorKind::Cancelled));
    assert_eq!(mock.call_count(), 3);
    assert_eq!(orchestrator.script().unwrap().body(), "First.");
    assert_eq!(files_in(&dir), 0);
}

#[tokio::test]
async fn test_storage_failure_keeps_script() {
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One."]"#),
        MockResponse::text("Kept text."),
    ]);
    let mut orchestrator = ScriptOrchestrator::new(mock, BrokenStorage, FixedInteraction::new(1));

    let err = orchestrator.run(RunRequest::new("Tea")).await.unwrap_err();

    assert!(matches!(err.kind(), ScribeErrorKind::Storage(_)));
    assert_eq!(orchestrator.state(), RunState::Aborted);
    assert_eq!(orchestrator.script().unwrap().body(), "Kept text.");
}

#[tokio::test]
async fn test_settings_reach_the_drafter() {
    let dir = TempDir::new().unwrap();
    let mock = MockClient::new_sequence(vec![
        MockResponse::text(THEMES),
        MockResponse::text(r#"["One."]"#),
        MockResponse::text("Short."),
    ]);
    let settings = ScriptSettings {
        target_words: 120,
        default_sections: 4,
        ..ScriptSettings::default()
    };
    let mut orchestrator = ScriptOrchestrator::new(mock.clone(), storage(&dir), FixedInteraction::new(1))
        .with_settings(settings);

    orchestrator.run(RunRequest::new("Tea")).await.unwrap();

    let prompts = mock.prompts();
    assert!(prompts[1].contains("4-part outline"));
    assert!(prompts[2].contains("approximately 120 words"));
}
