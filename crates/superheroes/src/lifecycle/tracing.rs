//! Tracing setup for the whole process.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! the store loops record an `entity_type` field instead, which keeps log
//! lines short while staying filterable. Levels come from `RUST_LOG`:
//! `info` shows lifecycle events and writes, `debug` adds every request
//! with its payload.

/// Initialize the global tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields replace module paths
        .compact()
        .init();
}
