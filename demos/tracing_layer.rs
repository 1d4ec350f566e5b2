//! Using the reporter as the global tracing subscriber.
//!
//! Run with: cargo run --example tracing_layer

use console_reporter::init::init_tracing;
use console_reporter::reporter::Reporter;

fn main() {
    init_tracing(Reporter::default());

    tracing::info!(target: "app", "started");
    tracing::info!(target: "db", attempts = 2u64, "retrying connection");
    tracing::error!(target: "net", "upstream timed out");
}
