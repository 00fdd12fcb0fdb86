use scribe_core::{DraftedSection, GenerateRequest, GenerateResponse, Output, Script, Topic};
use scribe_error::{ScribeErrorKind, ValidationErrorKind};

#[test]
fn empty_topic_is_rejected_with_validation_error() {
    let err = Topic::new("\t \n").unwrap_err();
    match err.kind() {
        ScribeErrorKind::Validation(v) => assert_eq!(v.kind, ValidationErrorKind::EmptyTopic),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn script_body_threads_sections_verbatim() {
    let topic = Topic::new("Lighthouses").unwrap();
    let outline = vec!["Why".to_string(), "How".to_string(), "Now".to_string()];
    let mut script = Script::new(topic, "Keepers of light", outline);

    let first = "  The first time I climbed one, my legs shook.  ";
    script.push_section(DraftedSection::new(1, "Why", first));
    let context_for_second = script.body().to_string();
    script.push_section(DraftedSection::new(3, "Now", "Today they run themselves."));

    assert!(context_for_second.contains(first));
    assert!(script.body().starts_with(&context_for_second));
    assert_eq!(script.sections().len(), 2);
    assert_eq!(*script.sections()[1].index(), 3);
}

#[test]
fn whitespace_only_body_counts_as_empty() {
    let topic = Topic::new("Fog").unwrap();
    let mut script = Script::new(topic, "Theme", vec!["One".to_string()]);
    script.push_section(DraftedSection::new(1, "One", "   \n "));
    assert!(script.is_empty());
}

#[test]
fn request_prompt_text_joins_messages() {
    let request = GenerateRequest::from_prompt("Write a haiku", Some(0.5), None).unwrap();
    assert_eq!(request.prompt_text(), "Write a haiku");
    assert_eq!(*request.temperature(), Some(0.5));
    assert_eq!(*request.max_tokens(), None);
}

#[test]
fn response_text_joins_outputs() {
    let response = GenerateResponse {
        outputs: vec![Output::Text("a".into()), Output::Text("b".into())],
    };
    assert_eq!(response.text(), "a\nb");
}
