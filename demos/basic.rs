//! Direct reporter usage: build records by hand and emit them.
//!
//! Run with: cargo run --example basic

use chrono::Local;
use console_reporter::record::{Arg, ErrorArg, LogRecord};
use console_reporter::reporter::{Reporter, ReporterConfig};
use serde_json::json;

fn main() -> Result<(), console_reporter::reporter::ReportError> {
    let reporter = Reporter::new(ReporterConfig::default());

    reporter.log(&LogRecord::new("starting up"))?;

    reporter.log(&LogRecord {
        date: Local::now(),
        message: None,
        kind: Some("info".to_string()),
        tag: Some("db".to_string()),
        args: vec![Arg::from("connected"), Arg::Value(json!({ "pool": 8 }))],
        is_error: false,
    })?;

    reporter.log(&LogRecord {
        date: Local::now(),
        message: None,
        kind: None,
        tag: Some("net".to_string()),
        args: vec![Arg::Error(ErrorArg::new(
            "connection refused",
            "Error: connection refused\n  at dial\n  at retry",
        ))],
        is_error: true,
    })?;

    Ok(())
}
