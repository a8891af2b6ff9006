//! The sensitive-key registry and the recursive redaction engine.
//!
//! A [`Redactor`] owns its vocabulary. There is no process-wide state:
//! whoever needs shared redaction behavior (a logging layer, a test
//! harness) constructs one and shares it explicitly. The general key set
//! sits behind a read-write lock so lookups from concurrent log calls and
//! runtime vocabulary mutations stay race-free; redaction of independent
//! inputs needs no locking beyond those lookups.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::value::{Map, Value};

use super::normalize::normalize_key;
use super::strategy::mask_entry;
use super::vocabulary::{DEFAULT_SENSITIVE_KEYS, PARTIAL_REVEAL_KEYS, REMOVE_ENTIRELY_KEYS};

/// Replacement for fully masked values.
pub const DEFAULT_MARKER: &str = "***[REDACTED]***";

/// Depth at which traversal stops descending.
pub const DEFAULT_MAX_DEPTH: u32 = 15;

/// Per-call redaction parameters.
///
/// These are pass-through values, not stored state: every call supplies its
/// own (usually [`RedactionConfig::default`]).
#[derive(Clone, Debug)]
pub struct RedactionConfig {
    /// Replacement text for fully masked values.
    pub marker: String,
    /// Maximum recursion depth. The root mapping sits at depth 0; once the
    /// traversal passes this bound the remaining subtree is returned
    /// unchanged.
    pub max_depth: u32,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RedactionConfig {
    /// Uses a specific replacement marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Uses a specific recursion bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Key-driven redaction engine over [`Value`] trees.
///
/// Construction seeds the built-in vocabulary; [`Redactor::add_keys`] and
/// [`Redactor::remove_keys`] mutate it at runtime. The remove-entirely and
/// partial-reveal subsets are fixed at construction time (see
/// [`RedactorBuilder`]).
///
/// All operations are total: redaction never fails, it returns best-effort
/// transformed output for any input.
#[derive(Debug)]
pub struct Redactor {
    /// Normalized sensitive key names. Membership here is what triggers
    /// masking; the subsets below only select the strategy.
    keys: RwLock<HashSet<String>>,
    remove_entirely: HashSet<String>,
    partial_reveal: HashSet<String>,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Redactor {
    /// Constructs a redactor seeded with the built-in vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a redactor with a customized vocabulary.
    #[must_use]
    pub fn builder() -> RedactorBuilder {
        RedactorBuilder::default()
    }

    /// Returns `true` if `key` is currently redacted. Matching is
    /// case- and separator-insensitive.
    #[must_use]
    pub fn is_sensitive(&self, key: &str) -> bool {
        self.read_keys().contains(&normalize_key(key))
    }

    /// Registers additional sensitive keys. Idempotent.
    pub fn add_keys<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut guard = self.write_keys();
        for key in keys {
            guard.insert(normalize_key(key.as_ref()));
        }
    }

    /// Unregisters sensitive keys. Absent keys are ignored.
    ///
    /// Removing a key that belongs to one of the fixed subsets stops it
    /// from being redacted at all; subset membership alone never triggers
    /// masking.
    pub fn remove_keys<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut guard = self.write_keys();
        for key in keys {
            guard.remove(&normalize_key(key.as_ref()));
        }
    }

    /// Redacts `value` with the default configuration.
    #[must_use]
    pub fn redact(&self, value: &Value) -> Value {
        self.redact_with(value, &RedactionConfig::default())
    }

    /// Redacts `value`, producing a new value with the same shape except
    /// where masking or removal applies. The input is never mutated.
    #[must_use]
    pub fn redact_with(&self, value: &Value, config: &RedactionConfig) -> Value {
        self.redact_at(value, config, 0)
    }

    fn redact_at(&self, value: &Value, config: &RedactionConfig, depth: u32) -> Value {
        if depth > config.max_depth {
            return value.clone();
        }
        match value {
            Value::Map(entries) => {
                let mut out = Map::with_capacity(entries.len());
                for (key, entry_value) in entries.iter() {
                    let normalized = normalize_key(key);
                    if self.contains_normalized(&normalized) {
                        // Sensitive entries are handed to the masker whole;
                        // the traversal does not descend into them.
                        if let Some(masked) = mask_entry(
                            &self.remove_entirely,
                            &self.partial_reveal,
                            &normalized,
                            entry_value,
                            &config.marker,
                        ) {
                            out.insert(key, masked);
                        }
                    } else {
                        out.insert(key, self.redact_at(entry_value, config, depth + 1));
                    }
                }
                Value::Map(out)
            }
            Value::Seq(items) => Value::Seq(
                items
                    .iter()
                    .map(|item| self.redact_at(item, config, depth + 1))
                    .collect(),
            ),
            // Bare scalars are never masked, whatever their content looks
            // like; only mapping keys select values for redaction.
            scalar => scalar.clone(),
        }
    }

    fn contains_normalized(&self, normalized: &str) -> bool {
        self.read_keys().contains(normalized)
    }

    // Lock poisoning is not propagated: the set stays structurally intact
    // across a panicking writer, and log call sites must never panic.
    fn read_keys(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.keys.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_keys(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.keys.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds a [`Redactor`] with a customized vocabulary.
///
/// The general set always starts from the built-in defaults plus both
/// subsets; `add_keys` extends it. Overriding a subset replaces the
/// built-in subset entirely.
#[derive(Clone, Debug, Default)]
pub struct RedactorBuilder {
    extra_keys: Vec<String>,
    remove_entirely: Option<Vec<String>>,
    partial_reveal: Option<Vec<String>>,
}

impl RedactorBuilder {
    /// Extends the general sensitive set.
    #[must_use]
    pub fn add_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.extra_keys
            .extend(keys.into_iter().map(|key| key.as_ref().to_string()));
        self
    }

    /// Replaces the remove-entirely subset.
    #[must_use]
    pub fn remove_entirely<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.remove_entirely = Some(collect_keys(keys));
        self
    }

    /// Replaces the partial-reveal subset.
    #[must_use]
    pub fn partial_reveal<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.partial_reveal = Some(collect_keys(keys));
        self
    }

    /// Builds the redactor. Subset members are folded into the general set
    /// so they are sensitive out of the box.
    #[must_use]
    pub fn build(self) -> Redactor {
        let remove_entirely: HashSet<String> = self
            .remove_entirely
            .map_or_else(
                || normalized_set(REMOVE_ENTIRELY_KEYS.iter().copied()),
                |keys| normalized_set(keys.iter().map(String::as_str)),
            );
        let partial_reveal: HashSet<String> = self
            .partial_reveal
            .map_or_else(
                || normalized_set(PARTIAL_REVEAL_KEYS.iter().copied()),
                |keys| normalized_set(keys.iter().map(String::as_str)),
            );

        let mut keys = normalized_set(DEFAULT_SENSITIVE_KEYS.iter().copied());
        keys.extend(remove_entirely.iter().cloned());
        keys.extend(partial_reveal.iter().cloned());
        keys.extend(self.extra_keys.iter().map(|key| normalize_key(key)));

        Redactor {
            keys: RwLock::new(keys),
            remove_entirely,
            partial_reveal,
        }
    }
}

fn collect_keys<I, K>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter().map(|key| key.as_ref().to_string()).collect()
}

fn normalized_set<'a, I>(keys: I) -> HashSet<String>
where
    I: Iterator<Item = &'a str>,
{
    keys.map(normalize_key).collect()
}

#[cfg(test)]
mod tests {
    use super::{RedactionConfig, Redactor, DEFAULT_MARKER};
    use crate::value::{Map, Value};

    #[test]
    fn registry_round_trip() {
        let redactor = Redactor::new();
        assert!(!redactor.is_sensitive("foo"));

        redactor.add_keys(["foo"]);
        assert!(redactor.is_sensitive("foo"));
        assert!(redactor.is_sensitive("F_o-O"));

        redactor.remove_keys(["FOO"]);
        assert!(!redactor.is_sensitive("foo"));
    }

    #[test]
    fn add_is_idempotent_and_remove_tolerates_absent_keys() {
        let redactor = Redactor::new();
        redactor.add_keys(["foo", "foo", "Foo"]);
        assert!(redactor.is_sensitive("foo"));

        redactor.remove_keys(["never-registered"]);
        redactor.remove_keys(["foo"]);
        redactor.remove_keys(["foo"]);
        assert!(!redactor.is_sensitive("foo"));
    }

    #[test]
    fn custom_subsets_replace_the_defaults() {
        let redactor = Redactor::builder()
            .remove_entirely(["internalAudit"])
            .partial_reveal(["membershipNumber"])
            .build();

        let mut map = Map::new();
        map.insert("internalAudit", "trace");
        map.insert("membershipNumber", "9876 5432 10");
        // No longer in the remove subset, so cvv falls back to the general
        // full-mask behavior.
        map.insert("cvv", "123");

        let out = redactor.redact(&Value::Map(map));
        let out = out.as_map().expect("map in, map out");
        assert!(!out.contains_key("internalAudit"));
        assert_eq!(
            out.get("membershipNumber"),
            Some(&Value::from("****-****-****-3210"))
        );
        assert_eq!(out.get("cvv"), Some(&Value::from(DEFAULT_MARKER)));
    }

    #[test]
    fn depth_zero_root_is_still_processed() {
        let redactor = Redactor::new();
        let config = RedactionConfig::default().with_max_depth(0);

        let mut map = Map::new();
        map.insert("password", "hunter2");
        let out = redactor.redact_with(&Value::Map(map), &config);
        assert_eq!(
            out.as_map().and_then(|m| m.get("password")),
            Some(&Value::from(DEFAULT_MARKER))
        );
    }
}
