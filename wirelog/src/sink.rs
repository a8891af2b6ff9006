//! The output boundary where sanitized records leave the logging layer.
//!
//! Formatting is the sink's business. The bundled [`WriterSink`] emits one
//! compact line per record; fancier console rendering (boxes, colors, hex
//! dumps) belongs in external sink implementations.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use wirelog_core::Value;

use crate::record::Record;

/// Failure while emitting a record.
///
/// Sinks may fail; the [`Logger`](crate::Logger) never lets these escape a
/// log call. They surface only as a degraded placeholder line plus an
/// internal diagnostic record.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The payload could not be encoded for output.
    #[error("failed to encode log payload: {0}")]
    Encode(#[from] serde_json::Error),
    /// The underlying writer rejected the line.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}

/// Receives records after level gating and redaction resolution.
pub trait Sink: Send + Sync {
    /// Formats and delivers one record.
    fn emit(&self, record: &Record) -> Result<(), SinkError>;
}

/// A line-oriented sink over any writer.
///
/// Text messages are written as-is; structured payloads are encoded as
/// compact JSON (map key order is preserved). Output looks like:
///
/// ```text
/// INFO    [http] {"status":201,"path":"/v1/charges"}
/// ERROR   [graphql] request failed error={"code":"TIMEOUT"}
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps `writer`. Concurrent emits are serialized by an internal lock.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl WriterSink<io::Stderr> {
    /// A sink over standard error, the default output for a new logger.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        let mut line = format!("{:<7} ", record.level.as_str());
        if let Some(tag) = &record.tag {
            line.push_str(&format!("[{tag}] "));
        }
        line.push_str(&render(&record.message)?);
        if let Some(error) = &record.error {
            line.push_str(" error=");
            line.push_str(&render(error)?);
        }

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        Ok(())
    }
}

fn render(value: &Value) -> Result<String, SinkError> {
    match value {
        Value::Text(text) => Ok(text.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}
