use crate::record::{Arg, LogRecord};
use crate::reporter::Reporter;
use chrono::Local;
use std::collections::BTreeMap;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that turns events into [`LogRecord`]s and
/// emits them through a [`Reporter`].
///
/// Mapping: event level becomes the lowercased `kind`, the target becomes
/// the `tag`, the `message` field becomes the message, and any remaining
/// fields are attached as a single structured argument. `ERROR`-level
/// events are routed to the error channel. The layer performs no
/// filtering of its own; attach an `EnvFilter` or similar upstream to
/// control what reaches it.
pub struct ReporterLayer {
    reporter: Reporter,
}

impl ReporterLayer {
    pub fn new(reporter: Reporter) -> Self {
        ReporterLayer { reporter }
    }
}

impl<S> Layer<S> for ReporterLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        let mut message: Option<String> = None;

        let mut visitor = FieldVisitor { fields: &mut fields, message: &mut message };
        event.record(&mut visitor);

        let meta = event.metadata();
        let level = *meta.level();

        let args = if fields.is_empty() {
            Vec::new()
        } else {
            vec![Arg::Value(serde_json::Value::Object(fields.into_iter().collect()))]
        };

        let record = LogRecord {
            date: Local::now(),
            message,
            kind: Some(level.to_string().to_lowercase()),
            tag: Some(meta.target().to_string()),
            args,
            is_error: level == Level::ERROR,
        };

        // A broken sink must not take the subscriber down with it.
        if let Err(e) = self.reporter.log(&record) {
            eprintln!("reporter failed to emit record: {}", e);
        }
    }
}

struct FieldVisitor<'a> {
    fields: &'a mut BTreeMap<String, serde_json::Value>,
    message: &'a mut Option<String>,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(format!("{:?}", value)));
        }
    }
}
