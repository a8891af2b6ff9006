//! End-to-end tests for the public redaction API.
//!
//! These tests exercise the integration of:
//! - key normalization and registry lookups,
//! - per-entry masking strategy selection, and
//! - bounded recursive traversal over the value model.

use serde_json::{json, Value as JsonValue};
use wirelog_core::{
    normalize_key, Map, RedactionConfig, Redactor, Value, DEFAULT_MARKER,
};

fn redact_json(redactor: &Redactor, input: serde_json::Value) -> JsonValue {
    JsonValue::from(redactor.redact(&Value::from(input)))
}

#[test]
fn test_normalization_is_idempotent() {
    for key in ["Card_Number", "CARD NUMBER", "api.key", "plain", ""] {
        let once = normalize_key(key);
        assert_eq!(normalize_key(&once), once);
    }
}

#[test]
fn test_case_and_punctuation_invariance() {
    let redactor = Redactor::new();
    assert!(redactor.is_sensitive("Card_Number"));
    assert!(redactor.is_sensitive("cardnumber"));
    assert!(redactor.is_sensitive("CARD-NUMBER"));
    assert!(redactor.is_sensitive("card number"));
    assert!(redactor.is_sensitive("card.number"));
}

#[test]
fn test_remove_entirely_field_leaves_no_trace() {
    let redactor = Redactor::new();
    let out = redact_json(
        &redactor,
        json!({"cvv": "123", "pin": 9876, "amount": 100}),
    );
    assert_eq!(out, json!({"amount": 100}));
}

#[test]
fn test_partial_reveal_keeps_last_four_digits() {
    let redactor = Redactor::new();
    let out = redact_json(&redactor, json!({"cardNumber": "4111 1111 1111 1234"}));
    assert_eq!(out, json!({"cardNumber": "****-****-****-1234"}));
}

#[test]
fn test_partial_reveal_with_too_few_digits_uses_marker() {
    let redactor = Redactor::new();
    let out = redact_json(&redactor, json!({"cardNumber": "12"}));
    assert_eq!(out, json!({"cardNumber": DEFAULT_MARKER}));
}

#[test]
fn test_email_under_any_sensitive_key_reveals_domain_only() {
    let redactor = Redactor::new();
    // "secret" is neither a remove nor a partial-reveal key, but the email
    // shape of the value still switches the strategy to domain-only.
    let out = redact_json(&redactor, json!({"secret": "alice@example.com"}));
    assert_eq!(out, json!({"secret": "***@example.com"}));
}

#[test]
fn test_depth_bound_leaves_deep_subtrees_unredacted() {
    let redactor = Redactor::new();
    let config = RedactionConfig::default().with_max_depth(2);

    let input = Value::from(json!({
        "l1": {
            "password": "masked-here",
            "l2": {
                "password": "also-masked",
                "l3": {
                    "password": "survives-untouched"
                }
            }
        }
    }));
    let out = JsonValue::from(redactor.redact_with(&input, &config));

    assert_eq!(
        out,
        json!({
            "l1": {
                "password": DEFAULT_MARKER,
                "l2": {
                    "password": DEFAULT_MARKER,
                    "l3": {
                        "password": "survives-untouched"
                    }
                }
            }
        })
    );
}

#[test]
fn test_non_sensitive_structures_pass_through_deep_equal() {
    let redactor = Redactor::new();
    let input = json!({
        "method": "POST",
        "path": "/v1/charges",
        "status": 201,
        "timings": [0.12, 0.34],
        "meta": {"retries": 0, "idempotent": true, "trace": null}
    });
    let out = redact_json(&redactor, input.clone());
    assert_eq!(out, input);
}

#[test]
fn test_bare_scalars_are_never_masked() {
    let redactor = Redactor::new();
    // Sensitive-looking content with no enclosing mapping key stays as-is.
    let card = Value::from("4111 1111 1111 1111");
    assert_eq!(redactor.redact(&card), card);

    let seq = Value::Seq(vec![Value::from("alice@example.com"), Value::Int(1234)]);
    assert_eq!(redactor.redact(&seq), seq);
}

#[test]
fn test_mapping_key_order_is_preserved() {
    let redactor = Redactor::new();
    let mut map = Map::new();
    map.insert("zeta", 1);
    map.insert("password", "hunter2");
    map.insert("alpha", 2);
    map.insert("cardNumber", "4242424242424242");

    let out = redactor.redact(&Value::Map(map));
    let keys: Vec<&str> = out.as_map().expect("map in, map out").keys().collect();
    assert_eq!(keys, vec!["zeta", "password", "alpha", "cardNumber"]);
}

#[test]
fn test_sequences_keep_order_and_length() {
    let redactor = Redactor::new();
    let out = redact_json(
        &redactor,
        json!([
            {"password": "one"},
            "plain",
            {"cvv": "999"},
            42
        ]),
    );
    // The cvv *entry* is dropped, but its containing element is not.
    assert_eq!(
        out,
        json!([{"password": DEFAULT_MARKER}, "plain", {}, 42])
    );
}

#[test]
fn test_registry_mutation_round_trip() {
    let redactor = Redactor::new();
    redactor.add_keys(["foo"]);
    assert!(redactor.is_sensitive("foo"));
    redactor.remove_keys(["foo"]);
    assert!(!redactor.is_sensitive("foo"));
}

#[test]
fn test_runtime_added_keys_are_redacted() {
    let redactor = Redactor::new();
    redactor.add_keys(["internalNote"]);
    let out = redact_json(&redactor, json!({"internal_note": "do not log"}));
    assert_eq!(out, json!({"internal_note": DEFAULT_MARKER}));
}

#[test]
fn test_removed_keys_pass_through_again() {
    let redactor = Redactor::new();
    redactor.remove_keys(["email"]);
    let out = redact_json(&redactor, json!({"email": "alice@example.com"}));
    assert_eq!(out, json!({"email": "alice@example.com"}));
}

#[test]
fn test_sensitive_key_holding_structure_is_masked_whole() {
    let redactor = Redactor::new();
    let out = redact_json(
        &redactor,
        json!({"credentials": {"user": "bob", "password": "hunter2"}}),
    );
    // The masker replaces the entire subtree; traversal does not descend.
    assert_eq!(out, json!({"credentials": DEFAULT_MARKER}));
}

#[test]
fn test_custom_marker_is_used() {
    let redactor = Redactor::new();
    let config = RedactionConfig::default().with_marker("<hidden>");
    let input = Value::from(json!({"password": "hunter2", "cardNumber": "88"}));
    let out = JsonValue::from(redactor.redact_with(&input, &config));
    assert_eq!(out, json!({"password": "<hidden>", "cardNumber": "<hidden>"}));
}

#[test]
fn test_end_to_end_scenario() {
    let redactor = Redactor::new();
    let out = redact_json(
        &redactor,
        json!({
            "user": "bob",
            "password": "hunter2",
            "account": {
                "accountNumber": "000123456789",
                "note": "vip"
            }
        }),
    );
    assert_eq!(
        out,
        json!({
            "user": "bob",
            "password": DEFAULT_MARKER,
            "account": {
                "accountNumber": "****-****-****-6789",
                "note": "vip"
            }
        })
    );
}

#[test]
fn test_input_is_not_mutated() {
    let redactor = Redactor::new();
    let input = Value::from(json!({"password": "hunter2", "user": "bob"}));
    let snapshot = input.clone();
    let _ = redactor.redact(&input);
    assert_eq!(input, snapshot);
}
