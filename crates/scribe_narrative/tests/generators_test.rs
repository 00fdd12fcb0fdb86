//! Theme, outline and drafting steps against a scripted model.

use scribe_core::Topic;
use scribe_error::{ModelErrorKind, ScribeErrorKind, ScriptErrorKind};
use scribe_models::{MockClient, MockResponse};
use scribe_narrative::{OutlineGenerator, SectionDrafter, ThemeGenerator};

fn roman_empire() -> Topic {
    Topic::new("The Roman Empire").unwrap()
}

#[tokio::test]
async fn test_themes_returned_in_order() {
    let themes = [
        "Rome fell slowly.",
        "Rome never fell.",
        "Bread and circuses still rule.",
        "The army made the emperors.",
        "Latin outlived the legions.",
    ];
    let mock = MockClient::new_success(serde_json::to_string(&themes).unwrap());
    let generator = ThemeGenerator::new(mock.clone());

    let result = generator.generate_themes(&roman_empire()).await.unwrap();

    assert_eq!(result, themes);
    assert_eq!(mock.call_count(), 1);
    assert!(mock.prompts()[0].contains("The Roman Empire"));
}

#[tokio::test]
async fn test_theme_count_other_than_five_is_accepted() {
    let mock = MockClient::new_success(r#"["Only one."]"#);
    let generator = ThemeGenerator::new(mock);

    let result = generator.generate_themes(&roman_empire()).await.unwrap();

    assert_eq!(result, vec!["Only one."]);
}

#[tokio::test]
async fn test_theme_extraction_failure_propagates() {
    let mock = MockClient::new_success("I'd rather not.");
    let generator = ThemeGenerator::new(mock.clone());

    let err = generator.generate_themes(&roman_empire()).await.unwrap_err();

    assert!(matches!(err.kind(), ScribeErrorKind::Extraction(_)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_outline_returned_as_extracted() {
    let mock = MockClient::new_success(r#"["A.","B.","C."]"#);
    let generator = OutlineGenerator::new(mock.clone());

    let outline = generator
        .generate_outline(&roman_empire(), "Rome never fell.", 3)
        .await
        .unwrap();

    assert_eq!(outline, vec!["A.", "B.", "C."]);
    assert!(mock.prompts()[0].contains("3-part outline"));
}

#[tokio::test]
async fn test_section_count_clamped_before_prompt() {
    let mock = MockClient::new_success(r#"["A."]"#);
    let generator = OutlineGenerator::new(mock.clone());

    generator
        .generate_outline(&roman_empire(), "Rome never fell.", 20)
        .await
        .unwrap();
    generator
        .generate_outline(&roman_empire(), "Rome never fell.", 0)
        .await
        .unwrap();

    let prompts = mock.prompts();
    assert!(prompts[0].contains("12-part outline"));
    assert!(!prompts[0].contains("20"));
    assert!(prompts[1].contains("1-part outline"));
}

#[tokio::test]
async fn test_outline_length_mismatch_is_propagated() {
    let mock = MockClient::new_success(r#"["A.","B."]"#);
    let generator = OutlineGenerator::new(mock);

    let outline = generator
        .generate_outline(&roman_empire(), "Rome never fell.", 5)
        .await
        .unwrap();

    assert_eq!(outline.len(), 2);
}

#[tokio::test]
async fn test_drafter_returns_raw_text() {
    let mock = MockClient::new_success("  I was struck by the roads.  ");
    let drafter = SectionDrafter::new(mock.clone()).with_target_words(400);

    let text = drafter
        .draft_section(1, &roman_empire(), "Rome never fell.", "The roads", "")
        .await
        .unwrap();

    assert_eq!(text, "  I was struck by the roads.  ");
    assert!(mock.prompts()[0].contains("approximately 400 words"));
}

#[tokio::test]
async fn test_drafter_blank_answer_is_draft_error() {
    let drafter = SectionDrafter::new(MockClient::new_success("   \n"));

    let err = drafter
        .draft_section(2, &roman_empire(), "Rome never fell.", "The roads", "Before.")
        .await
        .unwrap_err();

    match err.kind() {
        ScribeErrorKind::Script(e) => {
            assert!(matches!(e.kind, ScriptErrorKind::Draft { section: 2, .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_drafter_model_failure_is_draft_error() {
    let drafter = SectionDrafter::new(MockClient::new_sequence(vec![MockResponse::Error(
        ModelErrorKind::HttpError {
            status_code: 500,
            message: "boom".to_string(),
        },
    )]));

    let err = drafter
        .draft_section(3, &roman_empire(), "Rome never fell.", "The roads", "")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("boom"));
    match err.kind() {
        ScribeErrorKind::Script(e) => match &e.kind {
            ScriptErrorKind::Draft { section, message } => {
                assert_eq!(*section, 3);
                assert_eq!(message, "HTTP 500 error: boom");
            }
            other => panic!("unexpected script error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}
