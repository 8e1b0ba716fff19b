use super::*;

fn record() -> SessionRecord {
    SessionRecord {
        token: "tok123".to_owned(),
        user: User {
            id: 1,
            email: "a@b.com".to_owned(),
            name: "A".to_owned(),
            role: Some("user".to_owned()),
            avatar: None,
            telephone: None,
        },
    }
}

#[test]
fn encode_then_decode_reproduces_record() {
    // Simulates login followed by a reload.
    let raw = encode_record(&record()).expect("encode");
    let loaded = decode_record(&raw).expect("decode");
    assert_eq!(loaded, record());
}

#[test]
fn decode_rejects_unparsable_input() {
    assert!(decode_record("not json").is_none());
    assert!(decode_record("").is_none());
    assert!(decode_record("{\"token\":\"t\"}").is_none());
}

#[test]
fn decode_rejects_record_missing_token() {
    let raw = r#"{"user":{"id":1,"email":"a@b.com","name":"A","role":null,"avatar":null,"telephone":null}}"#;
    assert!(decode_record(raw).is_none());
}
