//! Canonical field-name form for case- and punctuation-insensitive matching.

/// Separator characters stripped during normalization.
const SEPARATORS: [char; 4] = ['_', '-', ' ', '.'];

/// Lowercases `key` and removes every `_`, `-`, space, and `.`.
///
/// Normalization is pure, total, and idempotent. It is applied both when
/// registering sensitive keys and when looking up a field during traversal,
/// so `"Card_Number"`, `"card-number"`, `"CARD NUMBER"`, and `"cardnumber"`
/// all match the same registry entry.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|ch| !SEPARATORS.contains(ch))
        .flat_map(char::to_lowercase)
        .collect()
}
