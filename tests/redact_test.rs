use serde_json::{json, Value};

use fake_export::redact::{self, RedactError, PLACEHOLDER_IP, PLACEHOLDER_URI, PLACEHOLDER_URL};

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Same JSON type at every node, same keys, same array lengths
fn assert_same_shape(before: &Value, after: &Value) {
    match (before, after) {
        (Value::Object(a), Value::Object(b)) => {
            let ka: Vec<&String> = a.keys().collect();
            let kb: Vec<&String> = b.keys().collect();
            assert_eq!(ka, kb);
            for (k, v) in a {
                assert_same_shape(v, &b[k]);
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                assert_same_shape(x, y);
            }
        }
        (Value::String(_), Value::String(_)) | (Value::Bool(_), Value::Bool(_)) => {}
        (Value::Number(x), Value::Number(y)) => assert_eq!(x.is_f64(), y.is_f64()),
        _ => panic!("type changed: {} -> {}", before, after),
    }
}

// ─── Shape ───────────────────────────────────────────────────────────────────

#[test]
fn test_message_thread_keeps_shape() {
    let thread = json!({
        "participants": [{ "name": "Alice" }, { "name": "Bob" }],
        "messages": [
            {
                "sender_name": "Alice",
                "timestamp_ms": 1_546_300_800_000_i64,
                "content": "See you at 8",
                "photos": [{ "uri": "messages/inbox/alice/photos/1.jpg", "creation_timestamp": 1_546_300_800 }],
                "reactions": [{ "reaction": "\u{1f60d}", "actor": "Bob" }],
                "is_unsent": false
            }
        ],
        "title": "Alice",
        "is_still_participant": true,
        "thread_type": "Regular",
        "share": { "link": "https://example.org/x", "url": "https://example.org/x" },
        "location": { "latitude": 52.52, "longitude": 13.405 },
        "last_ip": "192.168.0.10"
    });

    let redacted = redact::redact_document(thread.clone()).unwrap();
    assert_same_shape(&thread, &redacted);

    let msg = &redacted["messages"][0];
    assert_eq!(msg["sender_name"], json!("A"));
    assert_eq!(msg["content"], json!("S"));
    assert_eq!(msg["photos"][0]["uri"], json!(PLACEHOLDER_URI));
    assert_eq!(msg["reactions"][0]["reaction"], json!("\u{1f60d}"));
    assert_eq!(msg["reactions"][0]["actor"], json!("B"));
    assert_eq!(msg["is_unsent"], json!(false));
    assert_eq!(redacted["is_still_participant"], json!(false));
    assert_eq!(redacted["share"]["link"], json!("h"));
    assert_eq!(redacted["share"]["url"], json!(PLACEHOLDER_URL));
    assert_eq!(redacted["location"]["latitude"], json!(0.0));
    assert_eq!(redacted["last_ip"], json!(PLACEHOLDER_IP));
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

#[test]
fn test_timestamp_ms_is_current_millis() {
    let before = now_millis();
    let out = redact::transform(json!(1), "timestamp_ms").unwrap();
    let after = now_millis();
    let got = out.as_i64().unwrap();
    assert!(got >= before && got <= after, "{} not in [{}, {}]", got, before, after);
}

#[test]
fn test_timestamp_is_current_seconds() {
    let before = now_secs();
    let out = redact::transform(json!(1), "creation_timestamp").unwrap();
    let after = now_secs();
    let got = out.as_i64().unwrap();
    assert!(got >= before && got <= after);
}

#[test]
fn test_timestamp_key_on_non_integers() {
    assert_eq!(redact::transform(json!(1.5), "timestamp").unwrap(), json!(0.0));
    assert_eq!(redact::transform(json!("2019"), "timestamp").unwrap(), json!("2"));
}

// ─── Scalars ─────────────────────────────────────────────────────────────────

#[test]
fn test_scalars_under_plain_keys() {
    for key in ["", "count", "name", "value"] {
        assert_eq!(redact::transform(json!(42), key).unwrap(), json!(0));
        assert_eq!(redact::transform(json!(-3.25), key).unwrap(), json!(0.0));
        assert_eq!(redact::transform(json!(true), key).unwrap(), json!(false));
        assert_eq!(redact::transform(json!(false), key).unwrap(), json!(false));
        assert_eq!(redact::transform(json!(""), key).unwrap(), json!(""));
        assert_eq!(redact::transform(json!("xyz"), key).unwrap(), json!("x"));
    }
}

#[test]
fn test_reaction_passes_through() {
    for s in ["", "LIKE", "\u{1f622}", "a long reaction string"] {
        assert_eq!(redact::transform(json!(s), "reaction").unwrap(), json!(s));
    }
}

// Loose key matching: these are not IP fields but still get the IP placeholder.
#[test]
fn test_ip_suffix_heuristic_catches_unrelated_keys() {
    assert_eq!(redact::transform(json!("Berlin trip"), "trip").unwrap(), json!(PLACEHOLDER_IP));
    assert_eq!(redact::transform(json!("10115"), "zip").unwrap(), json!(PLACEHOLDER_IP));
}

// ─── Unsupported ─────────────────────────────────────────────────────────────

#[test]
fn test_null_aborts_redaction() {
    let err = redact::redact_document(json!({ "items": [1, null] })).unwrap_err();
    assert_eq!(
        err,
        RedactError::UnsupportedType {
            type_name: "null",
            key: String::new()
        }
    );
    assert!(err.to_string().contains("null"));
}
