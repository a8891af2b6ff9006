//! Redacting console log layer for HTTP and GraphQL client traffic.
//!
//! This crate is the control layer between instrumented clients and their
//! console output. It decides *whether* a payload is sanitized and *when*
//! a call is suppressed; the sanitization itself lives in `wirelog-core`
//! and the final rendering lives behind the [`Sink`] trait.
//!
//! Key rules:
//! - Redaction resolves per call: an explicit [`Entry::redact`] override
//!   wins, otherwise the logger's global flag (on by default) applies.
//! - Calls below the configured minimum level do no work at all.
//! - A log call never panics and never returns an error. Sink failures
//!   degrade to a `[Failed to encode]` placeholder line plus a separate
//!   internal diagnostic record.
//!
//! ```no_run
//! use wirelog::{Entry, Level, Logger};
//!
//! let logger = Logger::builder().min_level(Level::Info).build();
//!
//! let mut payload = wirelog::Map::new();
//! payload.insert("path", "/v1/charges");
//! payload.insert("cardNumber", "4111 1111 1111 1234");
//! logger.info(Entry::new(payload).tag("http"));
//! // -> INFO    [http] {"path":"/v1/charges","cardNumber":"****-****-****-1234"}
//! ```
//!
//! What this crate does not do:
//! - own a wire protocol, file format, or CLI
//! - draw boxes, colorize, or hex-dump - that belongs in [`Sink`]
//!   implementations
//!
//! The `slog` feature adds a `SlogSink` (in `wirelog::slog`) that forwards
//! records to an `slog::Logger`.

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
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod level;
mod logger;
mod record;
mod sink;
#[cfg(feature = "slog")]
pub mod slog;

pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use record::{Entry, Record};
pub use sink::{Sink, SinkError, WriterSink};

// The redaction surface, re-exported so most users depend on this crate
// alone.
pub use wirelog_core::{
    normalize_key, Map, RedactionConfig, Redactor, RedactorBuilder, Value, DEFAULT_MARKER,
    DEFAULT_MAX_DEPTH,
};
