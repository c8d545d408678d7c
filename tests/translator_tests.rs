mod common;
use common::ScriptedGenerator;
use eventquery::core::QuerySource;
use eventquery::core::translator::{EVENT_COLUMNS, Translator, build_prompt, strip_markup};
use eventquery::errors::AppError;

#[test]
fn test_prompt_embeds_raw_query_and_schema() {
    let prompt = build_prompt("  cheap food festivals near the river  ");

    assert!(prompt.contains("User query: \"cheap food festivals near the river\""));
    assert!(prompt.contains("named `events`"));
    for col in EVENT_COLUMNS {
        assert!(prompt.contains(col), "column {} missing from prompt", col);
    }
    assert!(prompt.contains("music → 6"));
    assert!(prompt.contains("food → 7"));
    assert!(prompt.contains("Always use LIMIT 10."));
}

#[test]
fn test_strip_markup() {
    assert_eq!(
        strip_markup("```sql\nSELECT * FROM events LIMIT 10;\n```"),
        "SELECT * FROM events LIMIT 10"
    );
    assert_eq!(
        strip_markup("  SELECT title FROM events LIMIT 3  "),
        "SELECT title FROM events LIMIT 3"
    );
    assert_eq!(strip_markup("```\n```"), "");
}

#[test]
fn test_translate_calls_service_once() {
    let generator = ScriptedGenerator::replying("```sql\nSELECT * FROM events LIMIT 10;\n```");
    let translator = Translator::new(&generator, 0.0);

    let q = translator.translate("any jazz?").expect("translated");

    assert_eq!(q.sql, "SELECT * FROM events LIMIT 10");
    assert_eq!(q.source, QuerySource::Translator);
    assert_eq!(generator.calls(), 1);
    assert!(generator.prompts.borrow()[0].contains("User query: \"any jazz?\""));
}

#[test]
fn test_translate_empty_completion_is_an_error() {
    let generator = ScriptedGenerator::replying("```sql\n```");
    let err = Translator::new(&generator, 0.0)
        .translate("anything")
        .unwrap_err();

    assert!(matches!(err, AppError::Translation(_)));
    assert!(err.is_translation());
}

#[test]
fn test_translate_service_failure_is_not_retried() {
    let generator = ScriptedGenerator::failing("quota exceeded");
    let err = Translator::new(&generator, 0.0)
        .translate("anything")
        .unwrap_err();

    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(generator.calls(), 1);
}
