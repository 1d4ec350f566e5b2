use crate::layer::ReporterLayer;
use crate::reporter::{Reporter, ReporterConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Install a [`Reporter`] as the global `tracing` subscriber.
///
/// Every event in the process is routed through [`ReporterLayer`] and
/// rendered to the reporter's configured channels. Panics if a global
/// subscriber is already set.
pub fn init_tracing(reporter: Reporter) {
    let subscriber = Registry::default().with(ReporterLayer::new(reporter));
    tracing::subscriber::set_global_default(subscriber).expect("set global subscriber");
}

/// Install a reporter built from the given configuration.
///
/// Equivalent to [`init_tracing`] with `Reporter::new(config)`.
pub fn init_tracing_with_config(config: ReporterConfig) {
    init_tracing(Reporter::new(config));
}
