//! Key-driven redaction for structured log payloads.
//!
//! This crate walks arbitrarily nested structured data and masks or removes
//! values held under sensitive field names before anything reaches a log
//! sink. It separates:
//!
//! - **Shape**: the [`Value`] model - a closed union of scalars, sequences,
//!   and insertion-ordered mappings.
//! - **Vocabulary**: which field names are sensitive ([`Redactor`] registry,
//!   seeded with a built-in list, mutable at runtime).
//! - **Strategy**: how a sensitive value is masked (dropped entirely,
//!   last-four-digits reveal, email domain-only reveal, or full marker).
//!
//! Key rules:
//! - Field names match case- and separator-insensitively: `"Card_Number"`,
//!   `"card-number"`, and `"cardNumber"` are the same key.
//! - Only mapping entries are masked. Bare scalars and sequence elements
//!   pass through untouched no matter what their content looks like.
//! - Traversal is bounded by a configurable depth; subtrees beyond the
//!   bound are returned unchanged rather than erroring.
//!
//! What this crate does not do:
//! - perform I/O or logging (see the `wirelog` crate)
//! - detect sensitive *content* - classification is purely key-driven
//!
//! All operations are total: redaction returns best-effort transformed
//! output for any structurally valid input and never panics.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod redaction;
mod value;

pub use redaction::{
    normalize_key, RedactionConfig, Redactor, RedactorBuilder, DEFAULT_MARKER, DEFAULT_MAX_DEPTH,
    DEFAULT_SENSITIVE_KEYS, PARTIAL_REVEAL_KEYS, REMOVE_ENTIRELY_KEYS,
};
pub use value::{Map, Value};
