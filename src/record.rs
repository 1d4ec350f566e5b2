use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

/// A normalized log record handed to the reporter by an upstream logging
/// core (or built by hand).
///
/// The record is consumed by a single [`Reporter::log`] call and carries
/// no state across calls.
///
/// [`Reporter::log`]: crate::reporter::Reporter::log
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// Event timestamp, rendered as a local time-of-day string.
    pub date: DateTime<Local>,
    pub message: Option<String>,
    /// Category label such as "info" or "error".
    pub kind: Option<String>,
    /// Sub-category label, e.g. a subsystem name.
    pub tag: Option<String>,
    /// Ordered heterogeneous arguments.
    pub args: Vec<Arg>,
    /// Selects the error channel when true.
    pub is_error: bool,
}

impl LogRecord {
    /// Record with the current local time, a message, no labels, no args.
    pub fn new(message: impl Into<String>) -> Self {
        LogRecord {
            date: Local::now(),
            message: Some(message.into()),
            kind: None,
            tag: None,
            args: Vec::new(),
            is_error: false,
        }
    }
}

/// One argument attached to a [`LogRecord`].
///
/// This is an explicit tagged union: whether a value is "error-like" is a
/// property of its variant, never inferred by probing fields on it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Arg {
    /// Plain text, rendered verbatim.
    Str(String),
    /// Structured data: objects, arrays, numbers, booleans, null.
    Value(Value),
    /// An error with an optional message and a raw stack trace.
    Error(ErrorArg),
}

impl Arg {
    pub fn is_error_like(&self) -> bool {
        matches!(self, Arg::Error(_))
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

/// Error-like argument payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorArg {
    pub message: Option<String>,
    /// Raw multi-line stack dump, one frame per line.
    pub stack: String,
}

impl ErrorArg {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        ErrorArg { message: Some(message.into()), stack: stack.into() }
    }

    /// Capture an arbitrary `std::error::Error` as an argument, using its
    /// `Display` output as the message and synthesizing stack lines from
    /// the source chain.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {}", message);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        ErrorArg { message: Some(message), stack }
    }
}
