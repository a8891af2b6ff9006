//! The logging facade: level gating, redaction resolution, degradation.

use std::sync::atomic::{AtomicBool, Ordering};

use wirelog_core::{RedactionConfig, Redactor, Value};

use crate::level::Level;
use crate::record::{Entry, Record};
use crate::sink::{Sink, SinkError, WriterSink};

/// Placeholder message emitted when a record cannot be delivered as-is.
const ENCODE_FAILURE_PLACEHOLDER: &str = "[Failed to encode]";

/// Tag on internal diagnostic records.
const INTERNAL_TAG: &str = "wirelog";

/// A redacting logger.
///
/// Owns a [`Redactor`], a sink, a minimum level, and the global redaction
/// flag. Every log call resolves redaction (per-call override, else the
/// global flag), sanitizes the payloads when it resolves on, and hands the
/// record to the sink.
///
/// A log call never panics and never returns an error: if the sink fails,
/// the call degrades to a short placeholder line plus an internal
/// diagnostic record, both best-effort.
///
/// ```no_run
/// use wirelog::{Entry, Logger};
///
/// let logger = Logger::new();
/// logger.info(Entry::new("request sent").tag("http"));
/// logger.add_sensitive_keys(["merchantReference"]);
/// ```
pub struct Logger {
    redactor: Redactor,
    sink: Box<dyn Sink>,
    min_level: Level,
    config: RedactionConfig,
    redact_by_default: AtomicBool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// A logger with the built-in vocabulary, redaction on, every level
    /// enabled, and a stderr sink.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a customized logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logs at [`Level::Debug`].
    pub fn debug(&self, entry: impl Into<Entry>) {
        self.log(Level::Debug, entry);
    }

    /// Logs at [`Level::Info`].
    pub fn info(&self, entry: impl Into<Entry>) {
        self.log(Level::Info, entry);
    }

    /// Logs at [`Level::Success`].
    pub fn success(&self, entry: impl Into<Entry>) {
        self.log(Level::Success, entry);
    }

    /// Logs at [`Level::Warning`].
    pub fn warning(&self, entry: impl Into<Entry>) {
        self.log(Level::Warning, entry);
    }

    /// Logs at [`Level::Error`].
    pub fn error(&self, entry: impl Into<Entry>) {
        self.log(Level::Error, entry);
    }

    /// Logs `entry` at `level`.
    ///
    /// Calls below the minimum level return before any redaction work.
    pub fn log(&self, level: Level, entry: impl Into<Entry>) {
        if level < self.min_level {
            return;
        }
        let entry = entry.into();
        let redact = entry
            .redact
            .unwrap_or_else(|| self.redact_by_default.load(Ordering::Relaxed));

        let (message, error) = if redact {
            (
                self.redactor.redact_with(&entry.message, &self.config),
                entry
                    .error
                    .as_ref()
                    .map(|error| self.redactor.redact_with(error, &self.config)),
            )
        } else {
            (entry.message, entry.error)
        };

        let record = Record {
            level,
            message,
            error,
            tag: entry.tag,
        };
        if let Err(error) = self.sink.emit(&record) {
            self.emit_degraded(&record, &error);
        }
    }

    /// Registers additional sensitive keys on the owned redactor.
    pub fn add_sensitive_keys<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.redactor.add_keys(keys);
    }

    /// Unregisters sensitive keys on the owned redactor.
    pub fn remove_sensitive_keys<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.redactor.remove_keys(keys);
    }

    /// Returns `true` if `key` is currently redacted.
    #[must_use]
    pub fn is_sensitive_key(&self, key: &str) -> bool {
        self.redactor.is_sensitive(key)
    }

    /// Flips the global redaction flag. Per-call overrides still win.
    pub fn set_redact_by_default(&self, enabled: bool) {
        self.redact_by_default.store(enabled, Ordering::Relaxed);
    }

    /// The redactor backing this logger, for direct use outside log calls.
    #[must_use]
    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Replaces the failed record with a placeholder line and reports the
    /// failure on a separate internal record. Both emits are best-effort;
    /// a sink that keeps failing is silently given up on.
    fn emit_degraded(&self, failed: &Record, error: &SinkError) {
        let placeholder = Record {
            level: failed.level,
            message: Value::from(ENCODE_FAILURE_PLACEHOLDER),
            error: None,
            tag: failed.tag.clone(),
        };
        let _ = self.sink.emit(&placeholder);

        let diagnostic = Record {
            level: Level::Error,
            message: Value::from(format!("log emission failed: {error}")),
            error: None,
            tag: Some(INTERNAL_TAG.to_string()),
        };
        let _ = self.sink.emit(&diagnostic);
    }
}

/// Builds a [`Logger`].
///
/// Startup-time policy (minimum level, default redaction, marker, depth
/// bound, sink, vocabulary) is fixed here; only the vocabulary and the
/// global redaction flag remain mutable afterwards.
#[derive(Default)]
pub struct LoggerBuilder {
    redactor: Option<Redactor>,
    sink: Option<Box<dyn Sink>>,
    min_level: Option<Level>,
    config: Option<RedactionConfig>,
    redact_by_default: Option<bool>,
}

impl LoggerBuilder {
    /// Suppresses calls below `level`.
    #[must_use]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Sets the global redaction flag's initial value.
    #[must_use]
    pub fn redact_by_default(mut self, enabled: bool) -> Self {
        self.redact_by_default = Some(enabled);
        self
    }

    /// Replaces the full-mask replacement marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.config = Some(self.config.unwrap_or_default().with_marker(marker));
        self
    }

    /// Replaces the traversal depth bound.
    #[must_use]
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config = Some(self.config.unwrap_or_default().with_max_depth(max_depth));
        self
    }

    /// Sends records to `sink` instead of stderr.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Uses a pre-built redactor (e.g. with customized subsets).
    #[must_use]
    pub fn redactor(mut self, redactor: Redactor) -> Self {
        self.redactor = Some(redactor);
        self
    }

    /// Builds the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            redactor: self.redactor.unwrap_or_default(),
            sink: self
                .sink
                .unwrap_or_else(|| Box::new(WriterSink::stderr())),
            min_level: self.min_level.unwrap_or(Level::Debug),
            config: self.config.unwrap_or_default(),
            redact_by_default: AtomicBool::new(self.redact_by_default.unwrap_or(true)),
        }
    }
}
