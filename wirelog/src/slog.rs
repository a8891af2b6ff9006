//! Adapter for emitting records through `slog`.
//!
//! This module exists to connect the [`Sink`] boundary with `slog` by
//! forwarding each record to an `slog::Logger`, serializing structured
//! payloads via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Mapping levels (`Success` has no `slog` counterpart and is emitted at
//!   `Info`).
//! - Attaching structured payloads, error payloads, and tags as key-value
//!   pairs rather than flattening them into the message text.
//!
//! It does not configure `slog`, and it receives payloads *after* the
//! logger's redaction resolution - raw values never reach it unless the
//! caller turned redaction off.

use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};
use wirelog_core::Value;

use crate::level::Level;
use crate::record::Record;
use crate::sink::{Sink, SinkError};

/// A [`Sink`] that forwards records to an `slog::Logger`.
pub struct SlogSink {
    logger: slog::Logger,
}

impl SlogSink {
    /// Wraps `logger`. Its drain decides the final output format.
    #[must_use]
    pub fn new(logger: slog::Logger) -> Self {
        Self { logger }
    }
}

/// An `slog::Value` that emits a sanitized payload as structured data.
struct Payload {
    value: Value,
}

impl SlogValue for Payload {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl Sink for SlogSink {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        // Text messages become the slog message; structured ones travel as
        // a "payload" key-value so drains can render them natively.
        let (text, payload) = match &record.message {
            Value::Text(message) => (message.as_str(), None),
            other => ("", Some(Payload {
                value: other.clone(),
            })),
        };
        let error = record.error.clone().map(|value| Payload { value });
        let tag = record.tag.as_deref();

        match record.level {
            Level::Debug => slog::debug!(self.logger, "{text}";
                "payload" => payload, "error" => error, "tag" => tag),
            Level::Info | Level::Success => slog::info!(self.logger, "{text}";
                "payload" => payload, "error" => error, "tag" => tag),
            Level::Warning => slog::warn!(self.logger, "{text}";
                "payload" => payload, "error" => error, "tag" => tag),
            Level::Error => slog::error!(self.logger, "{text}";
                "payload" => payload, "error" => error, "tag" => tag),
        }
        Ok(())
    }
}
