//! Log call inputs and the records sinks receive.

use wirelog_core::Value;

use crate::level::Level;

/// A single log call, before redaction resolution.
///
/// Leveled logger methods accept anything `Into<Entry>`, so plain strings
/// work directly; the builder methods add the optional parts:
///
/// ```
/// use wirelog::Entry;
///
/// let entry = Entry::new("charge declined")
///     .tag("payments")
///     .redact(false);
/// ```
#[derive(Clone, Debug)]
pub struct Entry {
    pub(crate) message: Value,
    pub(crate) error: Option<Value>,
    pub(crate) tag: Option<String>,
    pub(crate) redact: Option<bool>,
}

impl Entry {
    /// Creates an entry carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<Value>) -> Self {
        Self {
            message: message.into(),
            error: None,
            tag: None,
            redact: None,
        }
    }

    /// Attaches a structured error payload. Redacted alongside the message
    /// when redaction resolves on.
    #[must_use]
    pub fn error(mut self, error: impl Into<Value>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attaches a routing tag (e.g. `"http"`, `"graphql"`).
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Overrides the logger's global redaction flag for this call only.
    #[must_use]
    pub fn redact(mut self, redact: bool) -> Self {
        self.redact = Some(redact);
        self
    }
}

impl From<&str> for Entry {
    fn from(message: &str) -> Self {
        Entry::new(message)
    }
}

impl From<String> for Entry {
    fn from(message: String) -> Self {
        Entry::new(message)
    }
}

impl From<Value> for Entry {
    fn from(message: Value) -> Self {
        Entry::new(message)
    }
}

impl From<wirelog_core::Map> for Entry {
    fn from(message: wirelog_core::Map) -> Self {
        Entry::new(message)
    }
}

/// What a [`Sink`](crate::Sink) receives: the entry after level gating and
/// redaction resolution. Payloads are already sanitized (or deliberately
/// raw, when redaction resolved off).
#[derive(Clone, Debug)]
pub struct Record {
    /// Severity of the call.
    pub level: Level,
    /// The (possibly redacted) message payload.
    pub message: Value,
    /// The (possibly redacted) error payload, if any.
    pub error: Option<Value>,
    /// Routing tag, passed through untouched.
    pub tag: Option<String>,
}
