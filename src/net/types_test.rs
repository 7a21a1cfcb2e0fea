use super::*;
use serde_json::json;

// =============================================================
// Message deserialization
// =============================================================

#[test]
fn message_list_deserializes_in_order() {
    let body = r#"[
        {"content": "first", "timestamp": "2024-03-05T08:15:30Z"},
        {"content": "second", "timestamp": "2024-03-05T08:16:00Z"}
    ]"#;

    let list: Vec<Message> = serde_json::from_str(body).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].content, "first");
    assert_eq!(list[1].content, "second");
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"id": "65f1c0de", "content": "hello", "timestamp": "2024-03-05T08:15:30Z"}"#;
    let message: Message = serde_json::from_str(body).unwrap();
    assert_eq!(message.content, "hello");
    assert_eq!(message.timestamp, "2024-03-05T08:15:30Z");
}

#[test]
fn missing_timestamp_defaults_to_empty() {
    let body = r#"{"content": "hello"}"#;
    let message: Message = serde_json::from_str(body).unwrap();
    assert_eq!(message.timestamp, "");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_expected_fields() {
    let body = LoginRequest {
        username: "User A".to_owned(),
        password: "Pwd&1234".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"username": "User A", "password": "Pwd&1234"})
    );
}

#[test]
fn new_message_serializes_content_only() {
    let body = NewMessage {
        content: "hi".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"content": "hi"})
    );
}
