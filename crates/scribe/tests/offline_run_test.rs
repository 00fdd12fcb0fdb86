//! A complete run against the offline model, read back from disk.

use scribe::{
    FileSystemScriptStorage, FixedInteraction, OfflineClient, RunRequest, RunState,
    ScriptOrchestrator, ScriptStorage, read_script,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_offline_run_writes_readable_script() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = FileSystemScriptStorage::new(dir.path(), 50)?;
    let mut orchestrator = ScriptOrchestrator::new(
        OfflineClient::new(),
        storage,
        FixedInteraction::new(2).with_sections(3),
    );

    let run = orchestrator.run(RunRequest::new("The Dune novels")).await?;

    assert_eq!(orchestrator.state(), RunState::Done);
    assert_eq!(run.attempted(), 3);
    assert_eq!(run.script().sections().len(), 3);
    assert!(run.failures().is_empty());
    assert!(run.script().word_count() > 0);

    let file_name = run
        .path()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    assert!(file_name.starts_with("script_The_Dune_novels_"));
    assert!(file_name.ends_with(".txt"));

    let text = read_script(run.path()).await?;
    assert!(text.starts_with("VIDEO ESSAY SCRIPT"));
    assert!(text.contains("Topic: The Dune novels"));
    assert!(text.contains("OUTLINE:"));
    assert!(text.contains(run.script().body()));

    let storage = FileSystemScriptStorage::new(dir.path(), 50)?;
    assert_eq!(storage.load(run.path()).await?, text);
    Ok(())
}

#[tokio::test]
async fn test_offline_run_respects_presets() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = FileSystemScriptStorage::new(dir.path(), 50)?;
    let interaction = FixedInteraction::new(1).with_confirm(false);
    let mut orchestrator = ScriptOrchestrator::new(OfflineClient::new(), storage, interaction);

    let request = RunRequest {
        topic: "Lighthouses".to_string(),
        theme: Some(4),
        sections: Some(2),
        assume_yes: true,
    };
    let run = orchestrator.run(request).await?;

    assert_eq!(run.attempted(), 2);
    assert!(orchestrator.interaction().seen_themes().is_empty());
    Ok(())
}
