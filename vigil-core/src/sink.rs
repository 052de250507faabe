//! Diagnostic sink trait.

use std::sync::Arc;

/// Destination for the human-readable lines observers and behaviors emit.
///
/// Lines are informative only; nothing parses them.
pub trait Sink: Send + Sync + 'static {
    /// Writes one diagnostic line.
    fn emit(&self, line: &str);
}

/// A sink shared between a dispatcher, its observers and the caller.
pub type SharedSink = Arc<dyn Sink>;

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}
