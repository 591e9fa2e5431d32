use poemstore_core::{Poem, DEFAULT_TEXT};
use uuid::Uuid;

#[test]
fn poem_new_uses_schema_default_text() {
    let poem = Poem::new();

    assert!(!poem.uuid.is_nil());
    assert_eq!(poem.text, "to be or not to be");
    assert_eq!(poem.text, DEFAULT_TEXT);
}

#[test]
fn with_text_overrides_schema_default() {
    let poem = Poem::with_text("Hello");

    assert!(!poem.uuid.is_nil());
    assert_eq!(poem.text, "Hello");
}

#[test]
fn with_id_preserves_caller_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let poem = Poem::with_id(id, "borrowed identity");

    assert_eq!(poem.uuid, id);
    assert_eq!(poem.text, "borrowed identity");
}

#[test]
fn two_new_poems_never_share_identity() {
    let first = Poem::new();
    let second = Poem::new();

    assert_ne!(first.uuid, second.uuid);
}

#[test]
fn poem_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let poem = Poem::with_id(id, "shall I compare thee");

    let json = serde_json::to_value(&poem).unwrap();
    assert_eq!(json["uuid"], id.to_string());
    assert_eq!(json["text"], "shall I compare thee");

    let decoded: Poem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, poem);
}

#[test]
fn deserialize_missing_text_applies_schema_default() {
    let value = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555"
    });

    let poem: Poem = serde_json::from_value(value).unwrap();
    assert_eq!(poem.text, DEFAULT_TEXT);
}
