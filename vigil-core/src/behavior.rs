//! # Forwarding Capability (Behavior)
//!
//! A behavior is one state of a dispatcher. The dispatcher owns exactly one
//! behavior at a time and forwards its two operations to it; the behavior
//! alone decides what each operation means.
//!
//! Both operations are required methods with no default body, so every type
//! that implements [`Behavior`] supplies both of them.

use crate::sink::Sink;
use std::{fmt, sync::Arc};

/// One of the two operations a [`Behavior`] implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// The press half of an interaction (`mouse down`).
    Primary,
    /// The release half of an interaction (`mouse up`).
    Secondary,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Primary => f.write_str("primary"),
            Operation::Secondary => f.write_str("secondary"),
        }
    }
}

/// A swappable behavior that a dispatcher forwards to.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Behavior`",
    label = "missing `Behavior` implementation",
    note = "Behaviors must implement `name`, `primary` and `secondary`."
)]
pub trait Behavior: Send + Sync + 'static {
    /// Variant name used in diagnostics (`"PenTool"`).
    fn name(&self) -> &str;

    /// Handles the primary operation.
    fn primary(&self, sink: &dyn Sink);

    /// Handles the secondary operation.
    fn secondary(&self, sink: &dyn Sink);

    /// Runs the given operation.
    fn perform(&self, operation: Operation, sink: &dyn Sink) {
        match operation {
            Operation::Primary => self.primary(sink),
            Operation::Secondary => self.secondary(sink),
        }
    }
}

impl<B: Behavior + ?Sized> Behavior for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn primary(&self, sink: &dyn Sink) {
        (**self).primary(sink)
    }

    fn secondary(&self, sink: &dyn Sink) {
        (**self).secondary(sink)
    }
}

impl<B: Behavior + ?Sized> Behavior for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn primary(&self, sink: &dyn Sink) {
        (**self).primary(sink)
    }

    fn secondary(&self, sink: &dyn Sink) {
        (**self).secondary(sink)
    }
}
