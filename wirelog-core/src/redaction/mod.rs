//! Key-driven redaction of structured values.
//!
//! This module ties the pieces together:
//!
//! - **`normalize`**: canonical field-name form for matching
//! - **`vocabulary`**: built-in sensitive-field tables
//! - **`strategy`**: per-entry masking decisions (drop, partial reveal,
//!   domain-only, full mask)
//! - **`redactor`**: the registry and the recursive traversal
//!
//! The value model lives in `crate::value`.

mod normalize;
mod redactor;
mod strategy;
mod vocabulary;

pub use normalize::normalize_key;
pub use redactor::{
    RedactionConfig, Redactor, RedactorBuilder, DEFAULT_MARKER, DEFAULT_MAX_DEPTH,
};
pub use vocabulary::{DEFAULT_SENSITIVE_KEYS, PARTIAL_REVEAL_KEYS, REMOVE_ENTIRELY_KEYS};
