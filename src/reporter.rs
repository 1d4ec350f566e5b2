use crate::record::{Arg, LogRecord};
use crate::sink::{Sink, StderrSink, StdoutSink};
use crate::text::{is_plain_object, pad, parse_stack, stringify};

/// Which side a fixed-width field is padded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Reporter configuration, immutable for the reporter's lifetime.
///
/// Construct with struct-update syntax over [`ReporterConfig::default`]
/// to override individual fields.
pub struct ReporterConfig {
    /// Channel for ordinary records.
    pub stream: Box<dyn Sink>,
    /// Channel for records flagged `is_error`.
    pub err_stream: Box<dyn Sink>,
    /// Padding side for the fixed-width date and kind fields.
    pub alignment: Alignment,
    /// Accepted for compatibility with the upstream surface; the kind
    /// label is currently printed whenever present, regardless of this
    /// flag.
    pub show_type: bool,
    /// Styling capability, resolved once here and injected into the
    /// formatting path. Defaults to the terminal capability probe.
    pub colors: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        ReporterConfig {
            stream: Box::new(StdoutSink),
            err_stream: Box::new(StderrSink),
            alignment: Alignment::Left,
            show_type: false,
            colors: console::colors_enabled(),
        }
    }
}

/// Error raised while emitting a record.
///
/// Nothing is caught or retried inside the reporter; a failure aborts the
/// remainder of the current `log` call, possibly after partial emission.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("sink write failed")]
    Write(#[from] std::io::Error),

    #[error("argument serialization failed")]
    Format(#[from] serde_json::Error),
}

/// Display-ready fields derived from one [`LogRecord`].
///
/// A pure function of the record; exists only for the duration of one
/// `log` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedFields {
    pub args: Vec<String>,
    pub date: String,
    pub message: String,
    pub tag: String,
    pub kind: String,
}

/// Renders [`LogRecord`]s into aligned text lines and routes them to one
/// of two sinks.
///
/// The single entry point is [`Reporter::log`]; everything else is the
/// rendering pipeline it drives. Calls are synchronous and independent:
/// no buffering, no state across records.
pub struct Reporter {
    options: ReporterConfig,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new(ReporterConfig::default())
    }
}

impl Reporter {
    pub fn new(options: ReporterConfig) -> Self {
        Reporter { options }
    }

    /// Route one rendered segment to the channel selected by `is_error`.
    fn write(&self, text: &str, is_error: bool) -> Result<(), ReportError> {
        if is_error {
            self.options.err_stream.write_str(text)?;
        } else {
            self.options.stream.write_str(text)?;
        }
        Ok(())
    }

    /// Render a raw stack dump as a quoted multi-line block, every frame
    /// prefixed with `"> "`.
    pub fn format_stack(&self, stack: &str) -> String {
        format!("> {}", parse_stack(stack).join("\n> "))
    }

    /// Render one argument.
    ///
    /// Plain data objects become 2-space-indented structural text; other
    /// values go through the general stringifier, styled when the colors
    /// capability is on. Error arguments render as their stack block.
    pub fn format(&self, arg: &Arg) -> Result<String, ReportError> {
        match arg {
            Arg::Value(value) if is_plain_object(value) => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            Arg::Value(value) => Ok(stringify(value, self.options.colors)),
            Arg::Str(text) => Ok(text.clone()),
            Arg::Error(err) => Ok(self.format_stack(&err.stack)),
        }
    }

    /// Derive display-ready fields from a record.
    ///
    /// Error-like arguments may promote their message into an empty
    /// `message` and force an empty `kind` to `"error"`. When no message
    /// is present afterwards, the first rendered argument becomes the
    /// message and is removed from the args sequence; at most one
    /// promotion happens per record.
    pub fn get_fields(&self, record: &LogRecord) -> Result<FormattedFields, ReportError> {
        let mut message = record.message.clone().unwrap_or_default();
        let mut kind = record.kind.clone().unwrap_or_default();
        let tag = record.tag.clone().unwrap_or_default();
        let date = record.date.format("%H:%M:%S").to_string();

        let mut args = Vec::with_capacity(record.args.len());
        for arg in &record.args {
            if let Arg::Error(err) = arg {
                if message.is_empty() {
                    if let Some(m) = &err.message {
                        message = m.clone();
                    }
                }
                if kind.is_empty() {
                    kind = "error".to_string();
                }
                args.push(self.format_stack(&err.stack));
            } else {
                args.push(self.format(arg)?);
            }
        }

        // No explicit message: adopt the first rendered argument.
        if message.is_empty() && !args.is_empty() {
            message = args.remove(0);
        }

        Ok(FormattedFields { args, date, message, tag, kind })
    }

    /// Render and emit one record.
    ///
    /// Segments are written in a fixed order, all to the channel selected
    /// by `record.is_error`: bracketed date (padded to 8), bracketed
    /// uppercased kind (padded to 7, when present), bracketed tag (when
    /// present), the message, a newline plus the remaining args joined
    /// with spaces (when any), and a final newline. A failed write aborts
    /// mid-sequence; nothing is rolled back.
    pub fn log(&self, record: &LogRecord) -> Result<(), ReportError> {
        let fields = self.get_fields(record)?;
        let is_error = record.is_error;
        let side = self.options.alignment;

        self.write(&format!("[{}] ", pad(side, &fields.date, 8)), is_error)?;

        if !fields.kind.is_empty() {
            let label = fields.kind.to_uppercase();
            self.write(&format!("[{}] ", pad(side, &label, 7)), is_error)?;
        }

        if !fields.tag.is_empty() {
            self.write(&format!("[{}] ", fields.tag), is_error)?;
        }

        if !fields.message.is_empty() {
            self.write(&fields.message, is_error)?;
        }

        if !fields.args.is_empty() {
            self.write(&format!("\n{}", fields.args.join(" ")), is_error)?;
        }

        self.write("\n", is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_sink::MemorySink;
    use crate::record::ErrorArg;
    use chrono::{DateTime, Local, TimeZone};
    use serde_json::json;

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 12, 34, 56).single().expect("valid time")
    }

    fn record(message: &str) -> LogRecord {
        LogRecord {
            date: noon(),
            message: if message.is_empty() { None } else { Some(message.to_string()) },
            kind: None,
            tag: None,
            args: Vec::new(),
            is_error: false,
        }
    }

    fn test_reporter(alignment: Alignment) -> (Reporter, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let reporter = Reporter::new(ReporterConfig {
            stream: Box::new(out.clone()),
            err_stream: Box::new(err.clone()),
            alignment,
            show_type: false,
            colors: false,
        });
        (reporter, out, err)
    }

    #[test]
    fn message_only_is_a_single_line() {
        let (reporter, out, err) = test_reporter(Alignment::Left);
        reporter.log(&record("hello")).unwrap();
        assert_eq!(out.contents(), "[12:34:56] hello\n");
        assert_eq!(err.contents(), "");
    }

    #[test]
    fn kind_is_uppercased_and_padded() {
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("ready");
        rec.kind = Some("info".to_string());
        reporter.log(&rec).unwrap();
        assert_eq!(out.contents(), "[12:34:56] [INFO   ] ready\n");
    }

    #[test]
    fn right_alignment_pads_on_the_left() {
        let (reporter, out, _) = test_reporter(Alignment::Right);
        let mut rec = record("ready");
        rec.kind = Some("info".to_string());
        reporter.log(&rec).unwrap();
        assert_eq!(out.contents(), "[12:34:56] [   INFO] ready\n");
    }

    #[test]
    fn kind_prints_even_with_show_type_off() {
        // Compatibility: show_type is accepted but does not gate the label.
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("x");
        rec.kind = Some("warn".to_string());
        reporter.log(&rec).unwrap();
        assert!(out.contents().contains("[WARN   ] "));
    }

    #[test]
    fn first_arg_is_promoted_to_message() {
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("");
        rec.tag = Some("db".to_string());
        rec.args = vec![Arg::from("connected")];
        reporter.log(&rec).unwrap();
        // Promoted arg is the message and is not re-emitted in an args line.
        assert_eq!(out.contents(), "[12:34:56] [db] connected\n");
    }

    #[test]
    fn only_one_promotion_per_record() {
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("");
        rec.args = vec![Arg::from("first"), Arg::from("second"), Arg::from("third")];
        reporter.log(&rec).unwrap();
        assert_eq!(out.contents(), "[12:34:56] first\nsecond third\n");
    }

    #[test]
    fn remaining_args_join_on_a_new_line() {
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("listening");
        rec.args = vec![Arg::from("on"), Arg::Value(json!(8080))];
        reporter.log(&rec).unwrap();
        assert_eq!(out.contents(), "[12:34:56] listening\non 8080\n");
    }

    #[test]
    fn error_arg_sets_kind_message_and_stack_block() {
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("");
        rec.args = vec![Arg::Error(ErrorArg::new("x", "Error: x\n at f\n at g"))];
        reporter.log(&rec).unwrap();
        assert_eq!(
            out.contents(),
            "[12:34:56] [ERROR  ] x\n> Error: x\n> at f\n> at g\n"
        );
    }

    #[test]
    fn existing_kind_and_message_survive_error_args() {
        let (reporter, out, _) = test_reporter(Alignment::Left);
        let mut rec = record("explicit");
        rec.kind = Some("warn".to_string());
        rec.args = vec![Arg::Error(ErrorArg::new("ignored", "Error: ignored"))];
        reporter.log(&rec).unwrap();
        let text = out.contents();
        assert!(text.contains("[WARN   ] explicit"));
        assert!(text.contains("> Error: ignored"));
        assert!(!text.contains("[ERROR"));
    }

    #[test]
    fn plain_object_renders_indented() {
        let reporter = test_reporter(Alignment::Left).0;
        let rendered = reporter.format(&Arg::Value(json!({ "a": 1 }))).unwrap();
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn format_stack_quotes_every_line() {
        let reporter = test_reporter(Alignment::Left).0;
        assert_eq!(
            reporter.format_stack("Error: x\n    at f\n    at g"),
            "> Error: x\n> at f\n> at g"
        );
    }

    #[test]
    fn error_records_route_to_the_error_channel_only() {
        let (reporter, out, err) = test_reporter(Alignment::Left);
        let mut rec = record("bad");
        rec.is_error = true;
        reporter.log(&rec).unwrap();
        assert_eq!(out.contents(), "");
        assert_eq!(err.contents(), "[12:34:56] bad\n");
    }

    #[test]
    fn get_fields_is_pure() {
        let (reporter, _, _) = test_reporter(Alignment::Left);
        let mut rec = record("");
        rec.args = vec![Arg::from("promoted"), Arg::from("rest")];
        let first = reporter.get_fields(&rec).unwrap();
        let second = reporter.get_fields(&rec).unwrap();
        assert_eq!(first, second);
        // The input record is untouched by promotion.
        assert_eq!(rec.args.len(), 2);
    }
}
