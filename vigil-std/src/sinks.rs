//! Standard diagnostic sinks.

use vigil_core::Sink;

/// Emits each line as a `tracing` `INFO` event on the `vigil::diagnostics`
/// target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "vigil::diagnostics", "{line}");
    }
}

/// Prints each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn emit(&self, _line: &str) {}
}
