//! Masking strategies applied to values under sensitive keys.
//!
//! Strategies are pure value transformations. They do not traverse
//! structures or consult the registry; the caller has already decided the
//! key is sensitive and which subsets it belongs to.

use std::collections::HashSet;

use crate::value::Value;

/// Applies the masking decision for one mapping entry.
///
/// Returns `None` when the entry must be dropped from its containing
/// mapping entirely. The precedence is fixed and significant:
///
/// 1. keys in the remove-entirely subset leave no trace, not even a
///    placeholder;
/// 2. textual values under partial-reveal keys keep their last four digits
///    (or fall back to the full marker when fewer than four remain);
/// 3. any remaining textual value that looks like an email address reveals
///    only its domain, regardless of which sensitive key holds it;
/// 4. everything else becomes the full marker.
pub(crate) fn mask_entry(
    remove_entirely: &HashSet<String>,
    partial_reveal: &HashSet<String>,
    normalized_key: &str,
    value: &Value,
    marker: &str,
) -> Option<Value> {
    if remove_entirely.contains(normalized_key) {
        return None;
    }
    if partial_reveal.contains(normalized_key) {
        if let Some(text) = value.as_text() {
            return Some(Value::Text(partial_reveal_digits(text, marker)));
        }
    }
    if let Some(text) = value.as_text() {
        if let Some(masked) = email_domain_only(text) {
            return Some(Value::Text(masked));
        }
    }
    Some(Value::Text(marker.to_string()))
}

/// Keeps only the last four decimal digits of a numeric identifier.
///
/// Non-digit characters (spaces, dashes, letters) are ignored when
/// collecting digits. Fewer than four digits yields the full marker.
fn partial_reveal_digits(text: &str, marker: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return marker.to_string();
    }
    // ASCII digits only, so byte indexing is safe here.
    let last_four = &digits[digits.len() - 4..];
    format!("****-****-****-{last_four}")
}

/// Reveals only the domain of an email-shaped string.
///
/// A value qualifies when it contains both `@` and `.`. The domain is
/// everything after the first `@`; a trailing `@` (empty domain) is
/// malformed and returns `None` so the caller falls back to the marker.
fn email_domain_only(text: &str) -> Option<String> {
    if !text.contains('.') {
        return None;
    }
    let at = text.find('@')?;
    let domain = &text[at + 1..];
    if domain.is_empty() {
        return None;
    }
    Some(format!("***@{domain}"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::mask_entry;
    use crate::value::Value;

    const MARKER: &str = "***[REDACTED]***";

    fn subsets(remove: &[&str], partial: &[&str]) -> (HashSet<String>, HashSet<String>) {
        (
            remove.iter().map(ToString::to_string).collect(),
            partial.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn remove_entirely_drops_the_entry() {
        let (remove, partial) = subsets(&["cvv"], &[]);
        let outcome = mask_entry(&remove, &partial, "cvv", &Value::from("123"), MARKER);
        assert_eq!(outcome, None);
    }

    #[test]
    fn remove_wins_over_partial_reveal() {
        // A key in both subsets must still leave no trace.
        let (remove, partial) = subsets(&["pinblock"], &["pinblock"]);
        let outcome = mask_entry(
            &remove,
            &partial,
            "pinblock",
            &Value::from("4111111111111111"),
            MARKER,
        );
        assert_eq!(outcome, None);
    }

    #[test]
    fn partial_reveal_keeps_last_four_digits() {
        let (remove, partial) = subsets(&[], &["cardnumber"]);
        let outcome = mask_entry(
            &remove,
            &partial,
            "cardnumber",
            &Value::from("4111 1111 1111 1234"),
            MARKER,
        );
        assert_eq!(outcome, Some(Value::from("****-****-****-1234")));
    }

    #[test]
    fn partial_reveal_with_too_few_digits_falls_back_to_marker() {
        let (remove, partial) = subsets(&[], &["cardnumber"]);
        let outcome = mask_entry(&remove, &partial, "cardnumber", &Value::from("12"), MARKER);
        assert_eq!(outcome, Some(Value::from(MARKER)));
    }

    #[test]
    fn partial_reveal_does_not_chain_into_email_masking() {
        // Once the key is in the partial subset and the value is textual,
        // the outcome is decided there, even for email-shaped values.
        let (remove, partial) = subsets(&[], &["accountnumber"]);
        let outcome = mask_entry(
            &remove,
            &partial,
            "accountnumber",
            &Value::from("acct@bank.example"),
            MARKER,
        );
        assert_eq!(outcome, Some(Value::from(MARKER)));
    }

    #[test]
    fn partial_reveal_key_with_non_text_value_gets_marker() {
        let (remove, partial) = subsets(&[], &["cardnumber"]);
        let outcome = mask_entry(
            &remove,
            &partial,
            "cardnumber",
            &Value::Int(4_111_1111_1111_1234),
            MARKER,
        );
        assert_eq!(outcome, Some(Value::from(MARKER)));
    }

    #[test]
    fn email_shaped_values_reveal_only_the_domain() {
        let (remove, partial) = subsets(&[], &[]);
        let outcome = mask_entry(
            &remove,
            &partial,
            "secret",
            &Value::from("alice@example.com"),
            MARKER,
        );
        assert_eq!(outcome, Some(Value::from("***@example.com")));
    }

    #[test]
    fn trailing_at_sign_is_not_an_email() {
        let (remove, partial) = subsets(&[], &[]);
        let outcome = mask_entry(&remove, &partial, "secret", &Value::from("a.b@"), MARKER);
        assert_eq!(outcome, Some(Value::from(MARKER)));
    }

    #[test]
    fn at_sign_without_dot_is_not_an_email() {
        let (remove, partial) = subsets(&[], &[]);
        let outcome = mask_entry(&remove, &partial, "secret", &Value::from("user@host"), MARKER);
        assert_eq!(outcome, Some(Value::from(MARKER)));
    }

    #[test]
    fn everything_else_becomes_the_marker() {
        let (remove, partial) = subsets(&[], &[]);
        for value in [
            Value::from("hunter2"),
            Value::Int(42),
            Value::Bool(true),
            Value::Null,
            Value::Seq(vec![Value::from("a")]),
        ] {
            let outcome = mask_entry(&remove, &partial, "password", &value, MARKER);
            assert_eq!(outcome, Some(Value::from(MARKER)));
        }
    }
}
